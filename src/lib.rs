//! # hue-spread
//!
//! Greedy interval-splitting experiments for online color assignment.
//!
//! The model: participants joining a session each need a color the moment
//! they arrive, colors already handed out can never change, and the palette
//! should stay as spread out as possible at every moment. Colors live on the
//! unit interval (think hue), the endpoints 0 and 1 are taken first, and each
//! newcomer lands a fixed fraction `1/divisor` into the widest remaining gap.
//!
//! Two running statistics score a rule: the worst case (the lowest ratio of
//! achieved minimum spacing to optimal even spacing seen so far) and the
//! running average of that ratio. The candidate divisors that motivated the
//! experiments are 2, the golden ratio, and the default 7/4.
//!
//! ## Quick start
//!
//! ```rust
//! use hue_spread::prelude::*;
//!
//! let report = Simulation::new(SplitRule::halves()).run();
//! assert_eq!(report.palette.len(), 100);
//! println!("W = {}, A = {}", report.worst_ratio(), report.average_ratio());
//! ```
//!
//! ## Modules
//!
//! - [`interval`]: gap scans over sorted point sequences
//! - [`palette`]: the assigned-color sequence
//! - [`strategy`]: split rules and the candidate divisors
//! - [`metrics`]: quality ratio and running statistics
//! - [`simulation`]: the split-and-evaluate loop and its reports
//! - [`error`]: error types

pub mod error;
pub mod interval;
pub mod metrics;
pub mod palette;
pub mod simulation;
pub mod strategy;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{SpreadError, SpreadResult};
    pub use crate::interval::{narrowest_gap, widest_gap, Gap};
    pub use crate::metrics::{quality_ratio, SpacingStats};
    pub use crate::palette::Palette;
    pub use crate::simulation::{RunReport, Simulation, StepReport, FIRST_STEP, STEP_LIMIT};
    pub use crate::strategy::{SplitRule, PHI, SEVEN_FOURTHS, TWO};
}
