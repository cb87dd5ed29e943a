//! GestureMatch is a single-stroke gesture recognizer built on point clouds.
//!
//! Strokes are normalized into fixed-size clouds and compared against
//! registered templates with a greedy weighted matching. Per-offset lower
//! bounds from a precomputed lookup table prune most exact evaluations, and
//! the exact matcher abandons early once it cannot beat the best template.
//! Optional parallelism is available via the `rayon` feature.

pub mod acceptance;
pub mod cloud;
pub mod geometry;
pub mod lowlevel;
pub mod recognizer;
pub mod search;
mod trace;
pub mod util;

pub use acceptance::{AcceptancePolicy, RejectReason, Rejection, Verdict};
pub use cloud::{CloudParams, PointCloud};
pub use geometry::input::{convert_points, Conversion, InputPoint};
pub use geometry::Point;
pub use recognizer::{score_from_distance, Match, Recognizer, RecognizerConfig};
pub use search::SearchStats;
pub use util::{GestureError, GestureResult};
