//! `cn-quadtree` — a point-region quadtree over planar coordinates.
//!
//! # Crate layout
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`geometry`] | `Rectangle` (centre + half extents), `Point<T>`   |
//! | [`tree`]     | `QuadTree<T>`, `Quadrant`                         |
//!
//! The index is independent of the campus graph: it stores `(x, y)` pairs
//! with an arbitrary payload `T`.  Use a borrowed payload (`&Node`) to keep
//! the index a read-only view over data owned elsewhere, or an id for an
//! owned, `'static` index.
//!
//! Coordinates are treated as planar; no projection or geodesic correction
//! is applied.

pub mod geometry;
pub mod tree;


pub use geometry::{Point, Rectangle};
pub use tree::{QuadTree, Quadrant};
