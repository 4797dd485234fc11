//! Command handlers.
//!
//! One function per command; each validates its input, calls into the
//! engine, and wraps the result in an [`Output`](crate::Output).

pub mod catalog;
pub mod search;
pub mod sort;
