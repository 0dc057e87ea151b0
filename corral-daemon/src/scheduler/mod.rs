//! Scheduler layer for the daemon
//!
//! This layer drives the reconciler on a fixed interval. Passes run
//! strictly one after another on a single task; a pass finishes before
//! the next tick is honored.

pub mod ticker;

pub use ticker::PoolScheduler;
