//! Replays a recorded event trace.
//!
//! A trace is a file (or stdin) in the line format of
//! [`lines`](super::lines).  Replies are written to the given writer,
//! usually stdout, so a trace can be piped through the daemon to inspect
//! what the engine does with a recorded gesture.

use super::lines::{relay, ListenerError};
use crate::traits::{EventSource, Request};
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::sync::mpsc;

/// An [`EventSource`] reading one trace to the end.
pub struct TraceReplay<R, W> {
    input: Option<R>,
    output: W,
}

impl<R, W> TraceReplay<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Some(input),
            output,
        }
    }

    /// Consume the replay, returning the writer replies went to.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl TraceReplay<BufReader<File>, std::io::Stdout> {
    /// Replay the trace at `path`, answering on stdout.
    pub fn from_path(path: &Path) -> Result<Self, ListenerError> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file), std::io::stdout()))
    }
}

impl TraceReplay<BufReader<std::io::Stdin>, std::io::Stdout> {
    /// Replay a trace piped on stdin, answering on stdout.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

impl<R, W> EventSource for TraceReplay<R, W>
where
    R: BufRead + Send,
    W: Write + Send,
{
    type Error = ListenerError;

    /// Relay the whole trace.  A second call does nothing.
    fn run(&mut self, sink: mpsc::Sender<Request>) -> Result<(), Self::Error> {
        let Some(input) = self.input.take() else {
            return Ok(());
        };
        relay(input, &mut self.output, &sink)?;
        info!("trace finished");
        Ok(())
    }
}
