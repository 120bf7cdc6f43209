//! Engine configuration.
//!
//! Defaults match the reference campus deployment: a quadtree root centred
//! on the campus with a ±0.01° extent and capacity 4, Dijkstra over walkway
//! distance, and a 1 m merge threshold / 1.4 m/s walking speed for
//! preprocessing.

use crate::{Algorithm, CnError, CnResult, WeightCriterion};

// ── IndexConfig ───────────────────────────────────────────────────────────────

/// Root boundary and node capacity of the spatial index.
///
/// Coordinates are in index space: `x` = latitude, `y` = longitude.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexConfig {
    pub center_x:    f64,
    pub center_y:    f64,
    pub half_width:  f64,
    pub half_height: f64,
    /// Points a quadtree node stores before it subdivides.
    pub capacity:    usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            center_x:    12.924,
            center_y:    77.498,
            half_width:  0.01,
            half_height: 0.01,
            capacity:    4,
        }
    }
}

impl IndexConfig {
    /// Relative padding applied by [`fit`](Self::fit) so points on the hull
    /// are strictly inside the boundary.
    const FIT_PADDING: f64 = 1e-6;

    /// A boundary covering every `(x, y)` in `points`, or `None` if empty.
    ///
    /// Degenerate extents (all points on a line) are widened to a small
    /// positive half-size so the boundary still has area.
    pub fn fit<I>(points: I, capacity: usize) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let (mut min_x, mut max_x, mut min_y, mut max_y) = (x0, x0, y0, y0);
        for (x, y) in it {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }

        let half = |lo: f64, hi: f64| {
            let h = (hi - lo) * 0.5;
            h + (h * Self::FIT_PADDING).max(Self::FIT_PADDING)
        };

        Some(Self {
            center_x:    (min_x + max_x) * 0.5,
            center_y:    (min_y + max_y) * 0.5,
            half_width:  half(min_x, max_x),
            half_height: half(min_y, max_y),
            capacity,
        })
    }

    pub fn validate(&self) -> CnResult<()> {
        if self.capacity == 0 {
            return Err(CnError::Config("index capacity must be at least 1".into()));
        }
        if !(self.half_width > 0.0 && self.half_height > 0.0) {
            return Err(CnError::Config(format!(
                "index half extents must be positive, got ({}, {})",
                self.half_width, self.half_height
            )));
        }
        if !(self.center_x.is_finite() && self.center_y.is_finite()) {
            return Err(CnError::Config("index centre must be finite".into()));
        }
        Ok(())
    }
}

// ── RoutingConfig ─────────────────────────────────────────────────────────────

/// Default search behaviour for applications.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoutingConfig {
    /// Edge scalar used as search weight.
    pub criterion: WeightCriterion,
    /// Strategy used when the caller doesn't pick one.
    pub algorithm: Algorithm,
}

// ── PreprocessConfig ──────────────────────────────────────────────────────────

/// Parameters for turning raw map features into a node/edge dataset.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PreprocessConfig {
    /// Coordinates closer than this (metres) collapse onto one node.
    pub node_match_threshold_m: f64,
    /// Average walking speed used to derive edge times.
    pub walking_speed_mps:      f64,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { node_match_threshold_m: 1.0, walking_speed_mps: 1.4 }
    }
}

impl PreprocessConfig {
    pub fn validate(&self) -> CnResult<()> {
        if !(self.walking_speed_mps > 0.0) {
            return Err(CnError::Config(format!(
                "walking speed must be positive, got {}",
                self.walking_speed_mps
            )));
        }
        if !(self.node_match_threshold_m >= 0.0) {
            return Err(CnError::Config(format!(
                "node match threshold must be nonnegative, got {}",
                self.node_match_threshold_m
            )));
        }
        Ok(())
    }
}

// ── CampusConfig ──────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// Typically loaded from a JSON file by the application crate; every section
/// falls back to its default when absent.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CampusConfig {
    pub index:      IndexConfig,
    pub routing:    RoutingConfig,
    pub preprocess: PreprocessConfig,
}

impl CampusConfig {
    pub fn validate(&self) -> CnResult<()> {
        self.index.validate()?;
        self.preprocess.validate()
    }
}
