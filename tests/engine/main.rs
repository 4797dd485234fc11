//! Engine integration tests
//!
//! Exercises the public engine surface end to end: the seven sorting
//! algorithms, binary search and the dispatcher.

mod common;

mod properties;
mod scenarios;
mod trace_shape;
