//! Event transports.
//!
//! Hosts (or scripts standing in for them) deliver newline-delimited JSON
//! [`HostEvent`](crate::event::HostEvent)s and read back one
//! [`Reply`](crate::event::Reply) line per position-changing notification.
//! [`listener`] serves a Unix socket, [`replay`] a recorded trace.

pub mod lines;
pub mod listener;
pub mod replay;
