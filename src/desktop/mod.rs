//! Concrete [`Desktop`](crate::traits::Desktop) implementations.
//!
//! The crate does not talk to a native windowing system itself; hosts
//! embedding the engine provide their own backend.  [`layout`] answers every
//! query from a configured screen and window layout, which is what the
//! daemon binary and the tests use.

pub mod layout;
