//! Distance search between normalized clouds.
//!
//! `bound` provides cheap per-offset lower bounds, `greedy` the exact
//! early-abandoning distance, and `pruned` combines both for one
//! candidate/template pair.

pub mod bound;
pub mod greedy;
pub mod pruned;

pub use bound::{lower_bounds, offset_step};
pub use greedy::cloud_distance;
pub use pruned::{cloud_match, SearchStats};
