//! Low-level building blocks for custom matching pipelines.
//!
//! These expose the normalization steps, the lookup table, and the bound and
//! distance functions behind [`Recognizer`](crate::Recognizer). Most users
//! should prefer the recognizer itself.

pub use crate::cloud::normalize::{
    centroid, make_grid_coords, normalize, resample, scale, translate_to, MIN_POINTS,
};
pub use crate::cloud::{GridCoord, ProximityLut};
pub use crate::geometry::{distance, path_length, squared_distance};
pub use crate::recognizer::TemplateRegistry;
pub use crate::search::{cloud_distance, cloud_match, lower_bounds, offset_step};
