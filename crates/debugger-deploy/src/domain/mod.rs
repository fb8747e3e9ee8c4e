//! Domain types shared by the discovery and deployment stages.

pub mod errors;
pub mod model;
