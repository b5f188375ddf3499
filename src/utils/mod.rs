//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File and stream I/O with consistent error handling

pub mod io;
