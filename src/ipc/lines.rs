//! The line protocol shared by every transport.
//!
//! # Wire format
//!
//! Every event is a single line of JSON followed by `\n`:
//!
//! ```json
//! {"SessionStart":{"frame":"100 100 200 100"}}
//! {"PositionChanging":{"frame":"-10 100 310 100"}}
//! "SessionEnd"
//! ```
//!
//! Each `PositionChanging` line is answered with one line:
//!
//! ```json
//! {"frame":{"left":0,"top":100,"width":300,"height":100},"handled":true}
//! ```

use crate::event::{HostEvent, Reply};
use crate::traits::Request;
use log::{debug, error, info};
use std::io::{BufRead, Write};
use std::sync::mpsc;

/// Errors produced while relaying a line stream.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Forward every event read from `reader` into `sink`, writing replies to
/// `writer`.
///
/// Blank lines are skipped and malformed lines are logged and skipped.  A
/// position-changing notification whose request is dropped without an
/// answer is answered with the unmodified proposal, so the host is never
/// left waiting.
///
/// Returns `Ok(false)` when `sink` has been closed and the caller should
/// stop, `Ok(true)` when `reader` is exhausted.
pub fn relay<R, W>(reader: R, mut writer: W, sink: &mpsc::Sender<Request>) -> Result<bool, ListenerError>
where
    R: BufRead,
    W: Write,
{
    for line in reader.split(b'\n') {
        let line = match String::from_utf8(line?) {
            Ok(line) => line,
            Err(e) => {
                error!("bad event: line is not UTF-8 ({})", e);
                continue;
            }
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let event = match serde_json::from_str::<HostEvent>(text) {
            Ok(event) => event,
            Err(e) => {
                error!("bad event: {} ({})", text, e);
                continue;
            }
        };
        debug!("received {:?}", event);

        let fallback = match &event {
            HostEvent::PositionChanging(change) => Some(Reply::pass_through(change)),
            _ => None,
        };

        let (request, answer) = Request::new(event);
        if sink.send(request).is_err() {
            info!("sink closed, shutting down");
            return Ok(false);
        }

        if let Some(fallback) = fallback {
            let reply = answer.recv().unwrap_or(fallback);
            serde_json::to_writer(&mut writer, &reply)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
    }
    Ok(true)
}
