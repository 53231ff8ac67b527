//! Unix-socket [`EventSource`] implementation.
//!
//! Binds a Unix stream socket and accepts one connection at a time.  Each
//! line received is parsed as a JSON-encoded
//! [`HostEvent`](crate::event::HostEvent); replies are written back on the
//! same connection (see [`lines`](super::lines) for the wire format).

use super::lines::{relay, ListenerError};
use crate::traits::{EventSource, Request};
use log::{debug, error, info};
use std::io::BufReader;
use std::os::unix::net::UnixListener;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

/// An [`EventSource`] that listens on a Unix stream socket for
/// JSON-encoded host events.
///
/// Each accepted connection can send multiple newline-delimited events.
/// When the connection closes, the listener waits for the next one.
pub struct UnixSocketListener {
    path: PathBuf,
}

impl UnixSocketListener {
    /// Create a new listener bound to `path`.
    ///
    /// The socket file is created when [`run`](EventSource::run) is called.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The filesystem path of the socket.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for UnixSocketListener {
    type Error = ListenerError;

    /// Bind the socket and start accepting connections.
    ///
    /// This method **blocks** until the sink is closed.  Run it on a
    /// dedicated thread.
    fn run(&mut self, sink: mpsc::Sender<Request>) -> Result<(), Self::Error> {
        // Remove stale socket if present.
        let _ = std::fs::remove_file(&self.path);

        let listener = UnixListener::bind(&self.path)?;
        info!("listening on {}", self.path.display());

        for stream in listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    error!("accept error: {}", e);
                    continue;
                }
            };
            debug!("client connected");

            let reader = match stream.try_clone() {
                Ok(s) => BufReader::new(s),
                Err(e) => {
                    error!("failed to clone client stream: {}", e);
                    continue;
                }
            };
            match relay(reader, &stream, &sink) {
                Ok(true) => debug!("client disconnected"),
                Ok(false) => {
                    let _ = std::fs::remove_file(&self.path);
                    return Ok(());
                }
                Err(e) => error!("connection error: {}", e),
            }
        }
        Ok(())
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{HostEvent, Reply};
    use crate::geometry::Frame;
    use std::io::{BufRead, Write};
    use std::os::unix::net::UnixStream;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Monotonic counter to generate unique socket paths per test.
    static TEST_ID: AtomicU32 = AtomicU32::new(0);

    /// Helper: create a unique temporary socket path for each test.
    fn tmp_socket_path() -> PathBuf {
        let id = TEST_ID.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir();
        dir.join(format!("magsnap-test-{}-{}.sock", std::process::id(), id))
    }

    /// Spawn a listener plus a handler that echoes proposals back as
    /// handled.
    fn spawn_echo(path: &Path) -> mpsc::Receiver<HostEvent> {
        let (tx, rx) = mpsc::channel::<Request>();
        let (seen_tx, seen_rx) = mpsc::channel();

        let listen_path = path.to_path_buf();
        std::thread::spawn(move || {
            let mut listener = UnixSocketListener::new(&listen_path);
            let _ = listener.run(tx);
        });
        std::thread::spawn(move || {
            for req in rx {
                if let HostEvent::PositionChanging(change) = &req.event {
                    let _ = req.reply.send(Reply {
                        frame: change.frame,
                        handled: true,
                    });
                }
                let _ = seen_tx.send(req.event);
            }
        });

        // Give the listener a moment to bind.
        std::thread::sleep(std::time::Duration::from_millis(150));
        seen_rx
    }

    #[test]
    fn request_reply_over_socket() {
        let path = tmp_socket_path();
        let seen = spawn_echo(&path);

        let mut stream = UnixStream::connect(&path).expect("connect");
        writeln!(stream, r#"{{"SessionStart":{{"frame":"0 0 100 100"}}}}"#).unwrap();
        writeln!(stream, r#"{{"PositionChanging":{{"frame":"10 0 100 100"}}}}"#).unwrap();

        let mut reader = std::io::BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let reply: Reply = serde_json::from_str(&line).unwrap();
        assert_eq!(reply.frame, Frame::new(10, 0, 100, 100));
        assert!(reply.handled);

        writeln!(stream, r#""SessionEnd""#).unwrap();
        stream.shutdown(std::net::Shutdown::Write).unwrap();

        std::thread::sleep(std::time::Duration::from_millis(150));
        let events: Vec<HostEvent> = seen.try_iter().collect();
        assert_eq!(events.len(), 3);
        assert_eq!(events[2], HostEvent::SessionEnd);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_json_does_not_crash() {
        let path = tmp_socket_path();
        let seen = spawn_echo(&path);

        {
            let mut stream = UnixStream::connect(&path).expect("connect");
            writeln!(stream, "not json at all").unwrap();
            writeln!(stream, r#""SessionEnd""#).unwrap();
            stream.shutdown(std::net::Shutdown::Write).unwrap();
        }

        std::thread::sleep(std::time::Duration::from_millis(150));
        let events: Vec<HostEvent> = seen.try_iter().collect();
        // Only the valid event should have arrived.
        assert_eq!(events, vec![HostEvent::SessionEnd]);

        let _ = std::fs::remove_file(&path);
    }
}
