#![forbid(unsafe_code)]

//! Seeds Builder: assembles, writes and checks the seeds document.
//!
//! All graph semantics live in `seed_graph`; this crate adds the
//! document envelope, file I/O and drift detection.

pub mod document;
pub mod codec;
pub mod drift;
pub mod cli;
pub mod logging;
