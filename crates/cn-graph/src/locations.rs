//! Named places and location-to-location routing.
//!
//! A building outline contributes many nodes that share one name.  Users pick
//! places, not nodes, so routing between two places tries every
//! (start node, end node) pair and keeps the cheapest path.

use rustc_hash::FxHashMap;

use cn_core::{Algorithm, GeoPoint, NodeId};

use crate::graph::CampusGraph;
use crate::route::{Route, path_cost};
use crate::search::PathFinder;
use crate::{GraphError, GraphResult};

/// All nodes sharing one trimmed, non-empty name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub name:     String,
    /// Mean position of the member nodes; where a single marker goes.
    pub centroid: GeoPoint,
    /// Member node ids in graph order.
    pub members:  Vec<NodeId>,
}

/// Index of named locations, in order of first appearance in the graph.
#[derive(Debug, Clone, Default)]
pub struct Locations {
    list:    Vec<Location>,
    by_name: FxHashMap<String, usize>,
}

impl Locations {
    /// Group the graph's named nodes by name.
    pub fn from_graph(graph: &CampusGraph) -> Self {
        let mut list: Vec<Location> = Vec::new();
        let mut by_name: FxHashMap<String, usize> = FxHashMap::default();
        let mut positions: Vec<Vec<GeoPoint>> = Vec::new();

        for node in graph.nodes() {
            let Some(name) = node.display_name() else { continue };
            let slot = *by_name.entry(name.to_owned()).or_insert_with(|| {
                list.push(Location {
                    name:     name.to_owned(),
                    centroid: node.pos,
                    members:  Vec::new(),
                });
                positions.push(Vec::new());
                list.len() - 1
            });
            list[slot].members.push(node.id);
            positions[slot].push(node.pos);
        }

        for (loc, pts) in list.iter_mut().zip(positions) {
            if let Some(c) = GeoPoint::centroid(pts) {
                loc.centroid = c;
            }
        }

        tracing::debug!(locations = list.len(), "grouped named nodes");
        Self { list, by_name }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Look up a location by name (surrounding whitespace ignored).
    pub fn get(&self, name: &str) -> Option<&Location> {
        self.by_name.get(name.trim()).map(|&i| &self.list[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> + '_ {
        self.list.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.list.iter().map(|l| l.name.as_str())
    }

    /// Cheapest route from any node of `from` to any node of `to`.
    ///
    /// Runs `finder` for every member pair in member order and scores each
    /// non-empty path with [`path_cost`].  Only a strictly cheaper path
    /// replaces the current best, so the first of equally cheap paths wins
    /// and a path with infinite cost never wins.
    ///
    /// # Errors
    ///
    /// - [`GraphError::SameLocation`] if `from` and `to` name the same place;
    /// - [`GraphError::UnknownLocation`] if either name is unknown;
    /// - [`GraphError::NoRoute`] if no pair yields a valid path.
    pub fn route<P: PathFinder + ?Sized>(
        &self,
        graph: &CampusGraph,
        from: &str,
        to: &str,
        finder: &P,
    ) -> GraphResult<Route> {
        let (from, to) = (from.trim(), to.trim());
        if from == to {
            return Err(GraphError::SameLocation(from.to_owned()));
        }
        let start = self
            .get(from)
            .ok_or_else(|| GraphError::UnknownLocation(from.to_owned()))?;
        let end = self
            .get(to)
            .ok_or_else(|| GraphError::UnknownLocation(to.to_owned()))?;

        let mut best: Option<Route> = None;
        for &s in &start.members {
            for &e in &end.members {
                let path = finder.find_path(graph, s, e);
                if path.is_empty() {
                    continue;
                }
                let cost = path_cost(graph, &path);
                if cost < best.as_ref().map_or(f64::INFINITY, |r| r.cost) {
                    best = Some(Route { nodes: path, cost });
                }
            }
        }

        match best {
            Some(route) => {
                tracing::debug!(from, to, hops = route.hops(), cost = route.cost, "location route");
                Ok(route)
            }
            None => Err(GraphError::NoRoute { from: from.to_owned(), to: to.to_owned() }),
        }
    }
}

/// [`Locations::route`] with one of the built-in strategies.
pub fn route_between(
    graph: &CampusGraph,
    locations: &Locations,
    from: &str,
    to: &str,
    algorithm: Algorithm,
) -> GraphResult<Route> {
    locations.route(graph, from, to, &algorithm)
}
