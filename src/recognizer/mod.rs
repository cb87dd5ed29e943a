//! Template registry and nearest-template classification.
//!
//! [`Recognizer`] owns the registered templates and compares a normalized
//! candidate against each of them, carrying the best distance across
//! templates so later comparisons prune harder.

mod registry;

pub use registry::TemplateRegistry;

use crate::cloud::normalize::MIN_POINTS;
use crate::cloud::{CloudParams, PointCloud};
use crate::geometry::Point;
use crate::search::{cloud_match, SearchStats};
use crate::trace::{trace_event, trace_span, trace_warn};
use crate::util::{GestureError, GestureResult};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Configuration for a [`Recognizer`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecognizerConfig {
    /// Cloud layout shared by templates and candidates.
    pub cloud: CloudParams,
    /// Score templates concurrently (requires the `rayon` feature).
    pub parallel: bool,
}

/// Best template for a recognized stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    /// Name of the winning template.
    pub name: String,
    /// Similarity in `[0, 1]`; exactly 1 for distances up to 1.
    pub score: f64,
    /// Greedy cloud distance to the winning template.
    pub distance: f64,
    /// Wall-clock time spent in recognition.
    pub elapsed: Duration,
    /// Work counters for the search.
    pub stats: SearchStats,
}

/// Converts a cloud distance into a similarity score.
///
/// Distances at or below 1 map to 1; larger distances map to `1 / distance`.
pub fn score_from_distance(distance: f64) -> f64 {
    if distance > 1.0 {
        1.0 / distance
    } else {
        1.0
    }
}

/// Point-cloud gesture recognizer over an owned template registry.
#[derive(Clone, Debug, Default)]
pub struct Recognizer {
    registry: TemplateRegistry,
    cfg: RecognizerConfig,
}

impl Recognizer {
    /// Creates an empty recognizer with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty recognizer with a validated configuration.
    pub fn with_config(cfg: RecognizerConfig) -> GestureResult<Self> {
        cfg.cloud.validate()?;
        Ok(Self {
            registry: TemplateRegistry::new(),
            cfg,
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &RecognizerConfig {
        &self.cfg
    }

    /// Returns the registered templates.
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Returns the number of registered templates.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if no template is registered.
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Returns template names in registration order, duplicates included.
    pub fn template_names(&self) -> Vec<&str> {
        self.registry.iter().map(PointCloud::name).collect()
    }

    /// Counts templates registered under `name`.
    pub fn count_named(&self, name: &str) -> usize {
        self.registry.count_named(name)
    }

    /// Normalizes `points` and registers them as a template.
    ///
    /// Returns how many templates now share `name`. Adding a name twice keeps
    /// both entries. On error the registry is left unchanged.
    pub fn add_template(&mut self, name: &str, points: &[Point]) -> GestureResult<usize> {
        let _span =
            trace_span!("add_template", template = name, raw_points = points.len()).entered();
        if points.len() < MIN_POINTS {
            trace_warn!("template_rejected", template = name, raw_points = points.len());
            return Err(GestureError::InsufficientPoints {
                got: points.len(),
                needed: MIN_POINTS,
            });
        }
        let cloud = match PointCloud::new(name, points, &self.cfg.cloud) {
            Ok(cloud) => cloud,
            Err(err) => {
                trace_warn!("template_rejected", template = name, raw_points = points.len());
                return Err(err);
            }
        };
        let count = self.registry.push(cloud);
        trace_event!("template_added", total = self.registry.len(), same_name = count);
        Ok(count)
    }

    /// Removes every registered template.
    pub fn remove_all_templates(&mut self) {
        self.registry.clear();
    }

    /// Finds the registered template closest to the stroke.
    ///
    /// Fails with [`GestureError::InsufficientPoints`] for strokes shorter than
    /// two points (before any normalization) and with
    /// [`GestureError::EmptyRegistry`] when nothing is registered.
    pub fn recognize(&self, points: &[Point]) -> GestureResult<Match> {
        let started = Instant::now();
        if points.len() < MIN_POINTS {
            return Err(GestureError::InsufficientPoints {
                got: points.len(),
                needed: MIN_POINTS,
            });
        }
        if self.registry.is_empty() {
            return Err(GestureError::EmptyRegistry);
        }

        let _span = trace_span!("recognize", templates = self.registry.len()).entered();
        let candidate = PointCloud::new("", points, &self.cfg.cloud)?;
        let (best, stats) = if self.cfg.parallel {
            self.search_parallel(&candidate)
        } else {
            self.search_sequential(&candidate)
        };
        let (index, distance) = best.ok_or(GestureError::NoMatch)?;
        let template = self.registry.get(index).ok_or(GestureError::NoMatch)?;
        let score = score_from_distance(distance);

        trace_event!(
            "recognize_best",
            template = template.name(),
            distance = distance,
            exact_evaluations = stats.exact_evaluations,
            pruned_offsets = stats.pruned_offsets,
        );
        Ok(Match {
            name: template.name().to_string(),
            score,
            distance,
            elapsed: started.elapsed(),
            stats,
        })
    }

    /// Scores templates in order, sharing the running best for pruning.
    fn search_sequential(&self, candidate: &PointCloud) -> (Option<(usize, f64)>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut best = f64::INFINITY;
        let mut winner = None;
        for (index, template) in self.registry.iter().enumerate() {
            stats.templates += 1;
            let d = cloud_match(candidate, template, best, &mut stats);
            if d < best {
                best = d;
                winner = Some((index, d));
            }
        }
        (winner, stats)
    }

    /// Scores templates concurrently, each with its own running best.
    ///
    /// Ties resolve to the earliest-registered template.
    #[cfg(feature = "rayon")]
    fn search_parallel(&self, candidate: &PointCloud) -> (Option<(usize, f64)>, SearchStats) {
        let results: Vec<(f64, SearchStats)> = self
            .registry
            .as_slice()
            .par_iter()
            .map(|template| {
                let mut stats = SearchStats {
                    templates: 1,
                    ..SearchStats::default()
                };
                let d = cloud_match(candidate, template, f64::INFINITY, &mut stats);
                (d, stats)
            })
            .collect();

        let mut stats = SearchStats::default();
        let mut winner: Option<(usize, f64)> = None;
        for (index, (d, local)) in results.into_iter().enumerate() {
            stats.merge(local);
            if d < winner.map_or(f64::INFINITY, |(_, best)| best) {
                winner = Some((index, d));
            }
        }
        (winner, stats)
    }

    #[cfg(not(feature = "rayon"))]
    fn search_parallel(&self, candidate: &PointCloud) -> (Option<(usize, f64)>, SearchStats) {
        self.search_sequential(candidate)
    }
}
