//! Point-region quadtree.
//!
//! # Structure
//!
//! Every node owns its boundary and up to `capacity` points.  Once divided it
//! also owns exactly four children that quarter the boundary:
//!
//! ```text
//!   +------+------+
//!   |  NW  |  NE  |     y grows upwards ("north")
//!   +------+------+
//!   |  SW  |  SE  |
//!   +------+------+
//! ```
//!
//! A node subdivides the first time an insertion would exceed its capacity.
//! Subdivision is permanent: afterwards the node keeps the points it already
//! holds and routes every further insertion into a child.
//!
//! Children are owned outright (`Box<[QuadTree<T>; 4]>`); there are no parent
//! or sibling links.

use crate::geometry::{Point, Rectangle};

// ── Quadrant ──────────────────────────────────────────────────────────────────

/// One of the four children of a divided node.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    /// Order used by insertion and nearest-point search.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    /// Order used by range queries.
    const QUERY_ORDER: [Quadrant; 4] = [
        Quadrant::NorthWest,
        Quadrant::NorthEast,
        Quadrant::SouthWest,
        Quadrant::SouthEast,
    ];

    /// Slot of this quadrant in a node's child array.
    #[inline]
    fn slot(self) -> usize {
        match self {
            Quadrant::NorthEast => 0,
            Quadrant::NorthWest => 1,
            Quadrant::SouthEast => 2,
            Quadrant::SouthWest => 3,
        }
    }

    /// The sub-rectangle of `parent` covered by this quadrant.
    pub fn of(self, parent: &Rectangle) -> Rectangle {
        let w = parent.w / 2.0;
        let h = parent.h / 2.0;
        let (sx, sy) = match self {
            Quadrant::NorthEast => (1.0, 1.0),
            Quadrant::NorthWest => (-1.0, 1.0),
            Quadrant::SouthEast => (1.0, -1.0),
            Quadrant::SouthWest => (-1.0, -1.0),
        };
        Rectangle::new(parent.x + sx * w, parent.y + sy * h, w, h)
    }
}

// ── QuadTree ──────────────────────────────────────────────────────────────────

/// A quadtree node; the root node is the whole index.
#[derive(Clone, Debug)]
pub struct QuadTree<T> {
    boundary: Rectangle,
    capacity: usize,
    points:   Vec<Point<T>>,
    /// `Some` once divided, indexed by [`Quadrant::slot`].
    children: Option<Box<[QuadTree<T>; 4]>>,
}

impl<T> QuadTree<T> {
    /// Create an empty, undivided tree.
    ///
    /// A `capacity` of zero is raised to one; a node must be able to hold at
    /// least one point or every insertion would subdivide forever.
    pub fn new(boundary: Rectangle, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            boundary,
            capacity,
            points: Vec::with_capacity(capacity),
            children: None,
        }
    }

    /// Build a tree and insert every point, in order.
    ///
    /// Points outside `boundary` are dropped; compare [`len`](Self::len) with
    /// the input length to detect them.
    pub fn from_points<I>(boundary: Rectangle, capacity: usize, points: I) -> Self
    where
        I: IntoIterator<Item = Point<T>>,
    {
        let mut tree = Self::new(boundary, capacity);
        for p in points {
            tree.insert(p);
        }
        tree
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn boundary(&self) -> &Rectangle {
        &self.boundary
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// Points stored directly in this node (not its descendants).
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// The child covering `quadrant`, if this node is divided.
    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadTree<T>> {
        self.children.as_ref().map(|c| &c[quadrant.slot()])
    }

    /// Total number of points in this subtree.
    pub fn len(&self) -> usize {
        self.points.len()
            + self
                .children
                .as_ref()
                .map_or(0, |c| c.iter().map(QuadTree::len).sum())
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.children.is_none()
    }

    /// Number of levels in this subtree (a lone node has depth 1).
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |c| c.iter().map(QuadTree::depth).max().unwrap_or(0))
    }

    /// Every stored point, in range-query order.
    pub fn iter(&self) -> impl Iterator<Item = &Point<T>> + '_ {
        let mut out = Vec::with_capacity(self.points.len());
        self.collect_all(&mut out);
        out.into_iter()
    }

    fn collect_all<'a>(&'a self, out: &mut Vec<&'a Point<T>>) {
        out.extend(self.points.iter());
        if let Some(children) = &self.children {
            for q in Quadrant::QUERY_ORDER {
                children[q.slot()].collect_all(out);
            }
        }
    }

    // ── Insertion ─────────────────────────────────────────────────────────

    /// Insert `point`.  Returns `false` (leaving the tree untouched) if the
    /// point lies outside this node's boundary.
    pub fn insert(&mut self, point: Point<T>) -> bool {
        self.try_insert(point).is_ok()
    }

    /// Like [`insert`](Self::insert) but hands a rejected point back.
    pub fn try_insert(&mut self, point: Point<T>) -> Result<(), Point<T>> {
        if !self.boundary.contains_point(&point) {
            return Err(point);
        }

        if self.children.is_none() && self.points.len() < self.capacity {
            self.points.push(point);
            return Ok(());
        }

        let capacity = self.capacity;
        let boundary = self.boundary;
        let children = self.children.get_or_insert_with(|| {
            tracing::trace!(
                x = boundary.x, y = boundary.y, w = boundary.w, h = boundary.h,
                "quadtree node subdivided"
            );
            Box::new(Quadrant::ALL.map(|q| QuadTree::new(q.of(&boundary), capacity)))
        });

        // A child accepts iff its boundary contains the point, so the first
        // containing child in NE, NW, SE, SW order takes it.
        match children
            .iter_mut()
            .find(|c| c.boundary.contains_point(&point))
        {
            Some(child) => child.try_insert(point),
            None => Err(point),
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Append every stored point inside `range` (border inclusive) to
    /// `found`.
    ///
    /// Subtrees whose boundary does not touch `range` are skipped.  Results
    /// come in traversal order: a node's own points, then its NW, NE, SW,
    /// and SE subtrees.
    pub fn query<'a>(&'a self, range: &Rectangle, found: &mut Vec<&'a Point<T>>) {
        if !self.boundary.intersects(range) {
            return;
        }

        found.extend(self.points.iter().filter(|p| range.contains_point(p)));

        if let Some(children) = &self.children {
            for q in Quadrant::QUERY_ORDER {
                children[q.slot()].query(range, found);
            }
        }
    }

    /// Convenience wrapper around [`query`](Self::query) with a fresh
    /// accumulator.
    pub fn query_range(&self, range: &Rectangle) -> Vec<&Point<T>> {
        let mut found = Vec::new();
        self.query(range, &mut found);
        found
    }

    /// The stored point closest to `(x, y)` by Euclidean distance, or `None`
    /// if the tree is empty.
    ///
    /// Branch-and-bound: a subtree is skipped when its boundary is already
    /// farther away than the best point found so far.  Among equidistant
    /// points the first one visited (own points, then NE, NW, SE, SW) wins.
    pub fn find_nearest(&self, x: f64, y: f64) -> Option<&Point<T>> {
        let mut best: Option<(&Point<T>, f64)> = None;
        self.nearest_in(x, y, &mut best);
        best.map(|(p, _)| p)
    }

    /// Like [`find_nearest`](Self::find_nearest), returning the distance too.
    pub fn find_nearest_with_distance(&self, x: f64, y: f64) -> Option<(&Point<T>, f64)> {
        let mut best = None;
        self.nearest_in(x, y, &mut best);
        best
    }

    fn nearest_in<'a>(&'a self, x: f64, y: f64, best: &mut Option<(&'a Point<T>, f64)>) {
        let best_dist = best.map_or(f64::INFINITY, |(_, d)| d);
        if self.boundary.distance_to(x, y) > best_dist {
            return;
        }

        for p in &self.points {
            let d = p.distance_to(x, y);
            if d < best.map_or(f64::INFINITY, |(_, d)| d) {
                *best = Some((p, d));
            }
        }

        if let Some(children) = &self.children {
            for child in children.iter() {
                child.nearest_in(x, y, best);
            }
        }
    }
}
