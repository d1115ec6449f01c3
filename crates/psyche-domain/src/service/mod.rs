//! Domain Services - Pure computations over domain models
//!
//! Services here take data and configuration in and hand results back.
//! Reading the clock, talking to stores and coordinating concurrent
//! work is the use case layer's job.

pub mod aggregator;
pub mod evolution;
pub mod projection;
pub mod trend_analyzer;
