// Feedback Engine: rule-based performance report from four sub-scores.
// Pure computation; the only I/O lives in handlers.

pub mod analysis;
pub mod engine;
pub mod handlers;
pub mod recommendations;
pub mod tiers;
