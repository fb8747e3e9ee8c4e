//! Application layer: discovery, destination choice, and the deploy loop.

pub mod candidates;
pub mod deploy;
pub mod destination;
pub mod discover;
pub mod run;

pub use run::{Run, RunOptions};
