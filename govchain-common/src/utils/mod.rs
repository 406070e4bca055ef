//! utils
//!
//! Small helpers shared by the engine and the node binary.

pub mod time;
