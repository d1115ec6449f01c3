//! Domain Models - The vocabulary of the engine
//!
//! These types are the ubiquitous language shared by the scoring,
//! trend and evolution services.

pub mod domain;
pub mod evolution;
pub mod fact;
pub mod feature;
pub mod signal;
pub mod snapshot;
pub mod trend;
