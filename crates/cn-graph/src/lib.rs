//! `cn-graph` — campus walkway graph, path search, and location routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`graph`]     | `CampusGraph`, `Node`, `NodeKind`, `Edge`                 |
//! | [`search`]    | `PathFinder` trait, `Bfs`, `Dfs`, `Dijkstra`, `search`    |
//! | [`route`]     | `Route`, `path_cost`                                      |
//! | [`locations`] | `Locations`, `Location`, `route_between` (named places)   |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                            |
//!
//! Every algorithm takes the graph as an explicit argument; nothing here
//! holds global state.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod graph;
pub mod locations;
pub mod route;
pub mod search;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::{CampusGraph, Edge, Node, NodeKind};
pub use locations::{Location, Locations, route_between};
pub use route::{Route, path_cost};
pub use search::{Bfs, Dfs, Dijkstra, PathFinder, bfs, dfs, dijkstra, search};
