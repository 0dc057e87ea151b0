//! Provider layer
//!
//! Providers are the reconciler's only windows onto the outside world: the
//! fleet instance inventory, GitHub's registration list and the fleet
//! provisioning endpoint. They are trait-based to enable testing with
//! in-memory fakes; the HTTP implementations over the corral-fleet and
//! corral-github clients live alongside each trait.

mod creator;
mod inventory;
mod registry;

// Re-export traits
pub use creator::RunnerCreator;
pub use inventory::InstanceInventory;
pub use registry::RunnerRegistry;
