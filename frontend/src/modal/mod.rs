//! Modal dialog lifecycle: a widget-independent `phase` state machine and
//! the Bootstrap glue that drives it.

mod bootstrap;
pub mod phase;

pub use bootstrap::{hide, restore_body, watch, HideOutcome};
