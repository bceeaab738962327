//! Single-owner TCP link to the robot controller.
//!
//! [`RobotLink`] owns at most one outbound connection process-wide. The
//! handle lives behind a [`tokio::sync::Mutex`] held for the full duration
//! of every connect/send/disconnect call, so those operations are mutually
//! exclusive across concurrent HTTP handlers.
//!
//! A background reader task drains whatever the controller writes back
//! (the primary interface is chatty) and clears the tracked link when the
//! remote closes or the read fails, so a later `send` reports failure
//! instead of writing into a dead handle. Each link carries a generation
//! counter; a stale reader task can never tear down a newer connection.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::error::GatewayError;

/// Errors surfaced by link operations.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// No connection is tracked, or it was already torn down.
    #[error("not connected to robot")]
    NotConnected,

    /// Dialing the controller failed (refused, timed out, DNS).
    #[error("failed to connect to robot")]
    Connect(#[source] std::io::Error),

    /// Writing the script failed; the link has been dropped.
    #[error("write to robot failed")]
    Write(#[source] std::io::Error),
}

impl From<LinkError> for GatewayError {
    fn from(err: LinkError) -> Self {
        match err {
            LinkError::NotConnected => Self::NotConnected,
            LinkError::Connect(io) => Self::ConnectFailed(io),
            // A failed write tears the link down, so from the caller's
            // point of view the gateway is no longer connected.
            LinkError::Write(_) => Self::NotConnected,
        }
    }
}

/// The one live connection, if any.
#[derive(Debug)]
struct ActiveLink {
    writer: OwnedWriteHalf,
    reader_task: JoinHandle<()>,
    generation: u64,
    peer: String,
}

impl ActiveLink {
    /// Aborts the reader task and drops the writer, closing our side.
    fn close(self) {
        self.reader_task.abort();
    }
}

/// Mutex-guarded owner of the single robot connection.
#[derive(Debug)]
pub struct RobotLink {
    active: Arc<Mutex<Option<ActiveLink>>>,
    generation: AtomicU64,
    connect_timeout: Duration,
}

impl RobotLink {
    /// Creates a disconnected link with the given dial timeout.
    #[must_use]
    pub fn new(connect_timeout: Duration) -> Self {
        Self {
            active: Arc::new(Mutex::new(None)),
            generation: AtomicU64::new(0),
            connect_timeout,
        }
    }

    /// Connects to the controller at `(host, port)`, replacing any
    /// existing connection.
    ///
    /// The previous connection is closed first; errors from that close are
    /// ignored. The lock is held across the dial, so a concurrent `send`
    /// can never observe a half-replaced link.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::Connect`] on refusal, timeout, or resolution
    /// failure. The link is left disconnected in that case.
    pub async fn connect(&self, host: &str, port: u16) -> Result<(), LinkError> {
        let mut guard = self.active.lock().await;
        if let Some(old) = guard.take() {
            tracing::info!(peer = %old.peer, "replacing existing robot connection");
            old.close();
        }

        let stream = timeout(self.connect_timeout, TcpStream::connect((host, port)))
            .await
            .map_err(|_| LinkError::Connect(std::io::Error::from(std::io::ErrorKind::TimedOut)))?
            .map_err(LinkError::Connect)?;

        let peer = format!("{host}:{port}");
        let generation = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let (read_half, writer) = stream.into_split();
        let reader_task = self.spawn_reader(read_half, generation);

        tracing::info!(peer = %peer, "connected to robot");
        *guard = Some(ActiveLink {
            writer,
            reader_task,
            generation,
            peer,
        });
        Ok(())
    }

    /// Writes one newline-terminated script to the tracked connection.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NotConnected`] when no connection is tracked,
    /// or [`LinkError::Write`] when the write fails; in the latter case
    /// the dead link is dropped before returning.
    pub async fn send(&self, script: &str) -> Result<(), LinkError> {
        let mut guard = self.active.lock().await;

        let mut payload = String::with_capacity(script.len() + 1);
        payload.push_str(script);
        payload.push('\n');

        let write_result = {
            let Some(link) = guard.as_mut() else {
                return Err(LinkError::NotConnected);
            };
            match link.writer.write_all(payload.as_bytes()).await {
                Ok(()) => link.writer.flush().await,
                Err(err) => Err(err),
            }
        };

        match write_result {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::warn!(error = %err, "write to robot failed; dropping connection");
                if let Some(dead) = guard.take() {
                    dead.close();
                }
                Err(LinkError::Write(err))
            }
        }
    }

    /// Closes the tracked connection, if any. Returns whether one existed.
    pub async fn disconnect(&self) -> bool {
        let mut guard = self.active.lock().await;
        match guard.take() {
            Some(link) => {
                tracing::info!(peer = %link.peer, "disconnected from robot");
                link.close();
                true
            }
            None => false,
        }
    }

    /// Whether a connection is currently tracked.
    pub async fn is_connected(&self) -> bool {
        self.active.lock().await.is_some()
    }

    /// `host:port` of the tracked connection, if any.
    pub async fn peer(&self) -> Option<String> {
        self.active.lock().await.as_ref().map(|link| link.peer.clone())
    }

    /// Spawns the task that drains controller output and clears the link
    /// on EOF or read error, guarded by the generation counter.
    fn spawn_reader(&self, mut read_half: OwnedReadHalf, generation: u64) -> JoinHandle<()> {
        let active = Arc::clone(&self.active);
        tokio::spawn(async move {
            let mut buf = [0u8; 1024];
            let reason = loop {
                match read_half.read(&mut buf).await {
                    Ok(0) => break "closed by remote",
                    // Controller chatter (version banners, state packets);
                    // the relay has no use for it.
                    Ok(_) => {}
                    Err(err) => {
                        tracing::debug!(error = %err, "robot connection read error");
                        break "read error";
                    }
                }
            };
            let mut guard = active.lock().await;
            if guard
                .as_ref()
                .is_some_and(|link| link.generation == generation)
            {
                tracing::warn!(reason, "robot connection lost");
                *guard = None;
            }
        })
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    const DIAL_TIMEOUT: Duration = Duration::from_secs(2);

    async fn local_listener() -> (TcpListener, u16) {
        let Ok(listener) = TcpListener::bind("127.0.0.1:0").await else {
            panic!("failed to bind local listener");
        };
        let Ok(addr) = listener.local_addr() else {
            panic!("listener has no local addr");
        };
        (listener, addr.port())
    }

    /// Polls until the link notices a dead connection or the deadline hits.
    async fn wait_for_disconnect(link: &RobotLink) {
        for _ in 0..200 {
            if !link.is_connected().await {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("link never observed the closed connection");
    }

    #[tokio::test]
    async fn send_without_connect_reports_not_connected() {
        let link = RobotLink::new(DIAL_TIMEOUT);
        let result = link.send("stop").await;
        assert!(matches!(result, Err(LinkError::NotConnected)));
        assert!(!link.is_connected().await);
    }

    #[tokio::test]
    async fn connect_refused_is_connect_error() {
        // Bind then drop to get a port with no listener.
        let (listener, port) = local_listener().await;
        drop(listener);

        let link = RobotLink::new(DIAL_TIMEOUT);
        let result = link.connect("127.0.0.1", port).await;
        assert!(matches!(result, Err(LinkError::Connect(_))));
        assert!(!link.is_connected().await);
    }

    #[tokio::test]
    async fn send_writes_newline_terminated_script() {
        let (listener, port) = local_listener().await;
        let link = RobotLink::new(DIAL_TIMEOUT);

        let Ok(()) = link.connect("127.0.0.1", port).await else {
            panic!("connect to local listener failed");
        };
        let Ok((mut robot, _)) = listener.accept().await else {
            panic!("accept failed");
        };

        let Ok(()) = link.send("stopj(10)").await else {
            panic!("send failed");
        };

        let mut buf = vec![0u8; 64];
        let Ok(n) = robot.read(&mut buf).await else {
            panic!("read failed");
        };
        buf.truncate(n);
        assert_eq!(buf, b"stopj(10)\n");
        assert_eq!(link.peer().await.as_deref(), Some(format!("127.0.0.1:{port}").as_str()));
    }

    #[tokio::test]
    async fn remote_close_clears_the_link() {
        let (listener, port) = local_listener().await;
        let link = RobotLink::new(DIAL_TIMEOUT);

        let Ok(()) = link.connect("127.0.0.1", port).await else {
            panic!("connect failed");
        };
        let Ok((robot, _)) = listener.accept().await else {
            panic!("accept failed");
        };
        drop(robot);

        wait_for_disconnect(&link).await;
        let result = link.send("stop").await;
        assert!(matches!(result, Err(LinkError::NotConnected)));
    }

    #[tokio::test]
    async fn reconnect_replaces_previous_connection() {
        let (first, port_a) = local_listener().await;
        let (second, port_b) = local_listener().await;
        let link = RobotLink::new(DIAL_TIMEOUT);

        let Ok(()) = link.connect("127.0.0.1", port_a).await else {
            panic!("first connect failed");
        };
        let Ok((mut old_robot, _)) = first.accept().await else {
            panic!("first accept failed");
        };

        let Ok(()) = link.connect("127.0.0.1", port_b).await else {
            panic!("second connect failed");
        };
        let Ok((mut new_robot, _)) = second.accept().await else {
            panic!("second accept failed");
        };

        let Ok(()) = link.send("stop").await else {
            panic!("send failed");
        };

        // The new target receives the script.
        let mut buf = vec![0u8; 16];
        let Ok(n) = new_robot.read(&mut buf).await else {
            panic!("read on new connection failed");
        };
        buf.truncate(n);
        assert_eq!(buf, b"stop\n");

        // The old target sees EOF, not the script.
        let mut old_buf = vec![0u8; 16];
        let Ok(n) = old_robot.read(&mut old_buf).await else {
            panic!("read on old connection failed");
        };
        assert_eq!(n, 0);
    }

    #[tokio::test]
    async fn disconnect_drops_the_link() {
        let (listener, port) = local_listener().await;
        let link = RobotLink::new(DIAL_TIMEOUT);

        let Ok(()) = link.connect("127.0.0.1", port).await else {
            panic!("connect failed");
        };
        let _accepted = listener.accept().await;

        assert!(link.disconnect().await);
        assert!(!link.is_connected().await);
        assert!(!link.disconnect().await);
    }
}
