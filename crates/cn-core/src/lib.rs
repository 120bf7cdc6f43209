//! `cn-core` — foundational types for the campus-nav pathfinding engine.
//!
//! This crate is a dependency of every other `cn-*` crate.  It has no `cn-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`                                              |
//! | [`geo`]         | `GeoPoint`, haversine distance                        |
//! | [`algorithm`]   | `Algorithm`, `WeightCriterion`                        |
//! | [`config`]      | `CampusConfig`, `IndexConfig`, `RoutingConfig`, …     |
//! | [`error`]       | `CnError`, `CnResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; needed to   |
//! |         | read `CampusConfig` from JSON.                             |

pub mod algorithm;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use algorithm::{Algorithm, WeightCriterion};
pub use config::{CampusConfig, IndexConfig, PreprocessConfig, RoutingConfig};
pub use error::{CnError, CnResult};
pub use geo::GeoPoint;
pub use ids::NodeId;
