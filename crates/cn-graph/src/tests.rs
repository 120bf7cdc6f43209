//! Unit tests for cn-graph.
//!
//! All tests use hand-crafted or seeded-random graphs.

#[cfg(test)]
mod helpers {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use cn_core::NodeId;

    use crate::{CampusGraph, Edge, Node};

    pub fn n(id: u32) -> NodeId {
        NodeId(id)
    }

    /// A(0,0) → B(1,0) → C(2,0) with weights 1, 1 plus a direct A → C of 5.
    pub fn line_network() -> (CampusGraph, [NodeId; 3]) {
        let (a, b, c) = (n(1), n(2), n(3));
        let mut g = CampusGraph::new();
        g.add_node(Node::new(a, 0.0, 0.0));
        g.add_node(Node::new(b, 1.0, 0.0));
        g.add_node(Node::new(c, 2.0, 0.0));
        g.add_edge(Edge::new(a, b, 1.0));
        g.add_edge(Edge::new(b, c, 1.0));
        g.add_edge(Edge::new(a, c, 5.0));
        (g, [a, b, c])
    }

    /// Small grid:
    ///
    /// ```text
    ///   0 — 1 — 2
    ///   |       |
    ///   3 ————— 4
    /// ```
    ///
    /// Undirected walkways.  0→1→2→4 costs 30, 0→3→4 costs 60, so the
    /// cheapest route takes three hops while the fewest-hop route costs more.
    pub fn grid_network() -> (CampusGraph, [NodeId; 5]) {
        let ids = [n(0), n(1), n(2), n(3), n(4)];
        let mut g = CampusGraph::new();
        g.add_node(Node::new(ids[0], 0.0, 0.0));
        g.add_node(Node::new(ids[1], 0.0, 1.0));
        g.add_node(Node::new(ids[2], 0.0, 2.0));
        g.add_node(Node::new(ids[3], 1.0, 0.0));
        g.add_node(Node::new(ids[4], 1.0, 2.0));
        g.add_walkway(ids[0], ids[1], 10.0, true);
        g.add_walkway(ids[1], ids[2], 10.0, true);
        g.add_walkway(ids[2], ids[4], 10.0, true);
        g.add_walkway(ids[0], ids[3], 50.0, true);
        g.add_walkway(ids[3], ids[4], 10.0, true);
        (g, ids)
    }

    /// Random directed graph on `nodes` vertices with integer weights 0..=9
    /// (exact float sums) and occasional parallel edges.
    pub fn random_graph(seed: u64, nodes: u32, edges: usize) -> CampusGraph {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut g = CampusGraph::new();
        for i in 0..nodes {
            g.add_node(Node::new(n(i), i as f64, 0.0));
        }
        for _ in 0..edges {
            let from = n(rng.gen_range(0..nodes));
            let to = n(rng.gen_range(0..nodes));
            g.add_edge(Edge::new(from, to, rng.gen_range(0..=9) as f64));
        }
        g
    }

    /// Exhaustive search over simple paths: (min hops, min cost), or `None`
    /// if `end` is unreachable.  Only for tiny graphs.
    pub fn brute_force(g: &CampusGraph, start: NodeId, end: NodeId) -> Option<(usize, f64)> {
        fn walk(
            g: &CampusGraph,
            cur: NodeId,
            end: NodeId,
            on_path: &mut Vec<NodeId>,
            cost: f64,
            best: &mut Option<(usize, f64)>,
        ) {
            if cur == end {
                let hops = on_path.len() - 1;
                *best = Some(match *best {
                    None => (hops, cost),
                    Some((h, c)) => (h.min(hops), c.min(cost)),
                });
                return;
            }
            for e in g.out_edges(cur) {
                if on_path.contains(&e.to) {
                    continue;
                }
                on_path.push(e.to);
                walk(g, e.to, end, on_path, cost + e.weight, best);
                on_path.pop();
            }
        }
        let mut best = None;
        walk(g, start, end, &mut vec![start], 0.0, &mut best);
        best
    }

    /// Every consecutive pair is joined by an edge, and the endpoints match.
    pub fn is_valid_path(g: &CampusGraph, path: &[NodeId], start: NodeId, end: NodeId) -> bool {
        path.first() == Some(&start)
            && path.last() == Some(&end)
            && path.windows(2).all(|w| g.edge_between(w[0], w[1]).is_some())
    }
}

// ── Graph structure ───────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use super::helpers::n;
    use crate::{CampusGraph, Edge, Node, NodeKind};

    #[test]
    fn empty_graph() {
        let g = CampusGraph::new();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
        assert!(g.out_edges(n(1)).is_empty());
    }

    #[test]
    fn add_node_is_idempotent_and_overwrites() {
        let mut g = CampusGraph::new();
        g.add_node(Node::new(n(1), 0.0, 0.0));
        g.add_edge(Edge::new(n(1), n(2), 3.0));
        g.add_node(Node::new(n(1), 5.0, 5.0).named("Library"));

        assert_eq!(g.node_count(), 1);
        assert_eq!(g.node(n(1)).unwrap().name, "Library");
        assert_eq!(g.node(n(1)).unwrap().pos.lat, 5.0);
        // Existing adjacency survives the overwrite.
        assert_eq!(g.out_degree(n(1)), 1);
    }

    #[test]
    fn edges_keep_insertion_order_and_duplicates() {
        let mut g = CampusGraph::new();
        g.add_node(Node::new(n(1), 0.0, 0.0));
        g.add_edge(Edge::new(n(1), n(3), 2.0));
        g.add_edge(Edge::new(n(1), n(2), 1.0));
        g.add_edge(Edge::new(n(1), n(3), 7.0));

        let targets: Vec<_> = g.out_edges(n(1)).iter().map(|e| e.to).collect();
        assert_eq!(targets, vec![n(3), n(2), n(3)]);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge_between(n(1), n(3)).unwrap().weight, 2.0);
    }

    #[test]
    fn edges_may_reference_unknown_nodes() {
        let mut g = CampusGraph::new();
        g.add_node(Node::new(n(1), 0.0, 0.0));
        g.add_edge(Edge::new(n(1), n(99), 1.0));
        g.add_edge(Edge::new(n(42), n(1), 1.0));
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.dangling_edge_count(), 2);
        // Recorded, but an id without a node record has no usable out-edges.
        assert_eq!(g.out_degree(n(42)), 0);
        assert!(g.edge_between(n(42), n(1)).is_none());
        assert_eq!(g.out_degree(n(1)), 1);
    }

    #[test]
    fn nodes_iterate_in_first_insertion_order() {
        let mut g = CampusGraph::new();
        for id in [5, 1, 9, 1] {
            g.add_node(Node::new(n(id), 0.0, 0.0));
        }
        let ids: Vec<_> = g.nodes().map(|node| node.id).collect();
        assert_eq!(ids, vec![n(5), n(1), n(9)]);
    }

    #[test]
    fn walkway_adds_both_directions() {
        let mut g = CampusGraph::new();
        g.add_node(Node::new(n(1), 0.0, 0.0));
        g.add_node(Node::new(n(2), 1.0, 0.0));
        g.add_walkway(n(1), n(2), 4.0, false);
        assert_eq!(g.edge_count(), 2);
        let back = g.edge_between(n(2), n(1)).unwrap();
        assert_eq!(back.weight, 4.0);
        assert!(!back.accessible);
    }

    #[test]
    fn node_builders_and_display_name() {
        let node = Node::new(n(1), 1.0, 2.0).named("  Gym ").with_kind(NodeKind::Building);
        assert_eq!(node.display_name(), Some("Gym"));
        assert_eq!(node.kind.as_str(), "building");
        assert_eq!(Node::new(n(2), 0.0, 0.0).named("   ").display_name(), None);
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use cn_core::Algorithm;

    use super::helpers::{brute_force, grid_network, is_valid_path, line_network, n, random_graph};
    use crate::{Bfs, CampusGraph, Dfs, Dijkstra, Edge, Node, PathFinder, bfs, dfs, dijkstra, path_cost, search};

    #[test]
    fn dijkstra_prefers_cheaper_two_hop_path() {
        let (g, [a, b, c]) = line_network();
        let path = dijkstra(&g, a, c);
        assert_eq!(path, vec![a, b, c]);
        assert_eq!(path_cost(&g, &path), 2.0);
    }

    #[test]
    fn bfs_takes_fewest_hops() {
        let (g, [a, _, c]) = line_network();
        let path = bfs(&g, a, c);
        assert!(is_valid_path(&g, &path, a, c));
        assert_eq!(path.len() - 1, 1, "direct edge is the minimal-hop route");
    }

    #[test]
    fn grid_weighted_vs_unweighted() {
        let (g, [n0, n1, n2, n3, n4]) = grid_network();
        assert_eq!(dijkstra(&g, n0, n4), vec![n0, n1, n2, n4]);
        assert_eq!(bfs(&g, n0, n4), vec![n0, n3, n4]);
        assert_eq!(path_cost(&g, &bfs(&g, n0, n4)), 60.0);
    }

    #[test]
    fn dfs_explores_last_pushed_neighbour_first() {
        let (g, [n0, _, n2, n3, n4]) = grid_network();
        // n0's adjacency is [n1, n3]; n3 is pushed last and popped first.
        assert_eq!(dfs(&g, n0, n4), vec![n0, n3, n4]);
        let path = dfs(&g, n0, n2);
        assert!(is_valid_path(&g, &path, n0, n2));
        assert_eq!(path, vec![n0, n3, n4, n2]);
    }

    #[test]
    fn trivial_same_node() {
        let (g, [n0, ..]) = grid_network();
        for algo in Algorithm::ALL {
            assert_eq!(search(&g, n0, n0, algo), vec![n0], "{algo}");
        }
        // Holds even for ids the graph has never seen.
        for algo in Algorithm::ALL {
            assert_eq!(search(&g, n(77), n(77), algo), vec![n(77)], "{algo}");
        }
    }

    #[test]
    fn no_route_disconnected() {
        let mut g = CampusGraph::new();
        g.add_node(Node::new(n(1), 0.0, 0.0));
        g.add_node(Node::new(n(2), 1.0, 0.0));
        for algo in Algorithm::ALL {
            assert!(search(&g, n(1), n(2), algo).is_empty(), "{algo}");
        }
    }

    #[test]
    fn directed_one_way_blocks_return() {
        let mut g = CampusGraph::new();
        g.add_node(Node::new(n(1), 0.0, 0.0));
        g.add_node(Node::new(n(2), 1.0, 0.0));
        g.add_edge(Edge::new(n(1), n(2), 1.0));
        for algo in Algorithm::ALL {
            assert_eq!(search(&g, n(1), n(2), algo), vec![n(1), n(2)], "{algo}");
            assert!(search(&g, n(2), n(1), algo).is_empty(), "{algo}");
        }
    }

    #[test]
    fn unknown_nodes_are_dead_ends() {
        let mut g = CampusGraph::new();
        g.add_node(Node::new(n(1), 0.0, 0.0));
        g.add_node(Node::new(n(3), 0.0, 0.0));
        g.add_edge(Edge::new(n(1), n(2), 1.0)); // 2 has no node record
        g.add_edge(Edge::new(n(2), n(3), 1.0)); // recorded, but never followed
        g.add_edge(Edge::new(n(1), n(9), 1.0));
        g.add_edge(Edge::new(n(9), n(1), 1.0));
        for algo in Algorithm::ALL {
            assert!(search(&g, n(1), n(3), algo).is_empty(), "{algo}");
            assert_eq!(search(&g, n(1), n(2), algo), vec![n(1), n(2)], "{algo}");
            assert_eq!(search(&g, n(1), n(9), algo), vec![n(1), n(9)], "{algo}");
            assert!(search(&g, n(9), n(1), algo).is_empty(), "{algo}");
            assert_eq!(search(&g, n(2), n(2), algo), vec![n(2)], "{algo}");
        }
    }

    #[test]
    fn unknown_start_has_no_route() {
        let (g, [n0, ..]) = grid_network();
        for algo in Algorithm::ALL {
            assert!(search(&g, n(1000), n0, algo).is_empty(), "{algo}");
        }
    }

    #[test]
    fn zero_weight_edges() {
        let mut g = CampusGraph::new();
        for id in 1..=3 {
            g.add_node(Node::new(n(id), 0.0, 0.0));
        }
        g.add_edge(Edge::new(n(1), n(2), 0.0));
        g.add_edge(Edge::new(n(2), n(3), 0.0));
        g.add_edge(Edge::new(n(1), n(3), 0.5));
        assert_eq!(dijkstra(&g, n(1), n(3)), vec![n(1), n(2), n(3)]);
    }

    #[test]
    fn path_finder_trait_matches_functions() {
        let (g, [n0, _, _, _, n4]) = grid_network();
        let finders: [(&dyn PathFinder, Algorithm); 3] =
            [(&Bfs, Algorithm::Bfs), (&Dfs, Algorithm::Dfs), (&Dijkstra, Algorithm::Dijkstra)];
        for (finder, algo) in finders {
            assert_eq!(finder.find_path(&g, n0, n4), search(&g, n0, n4, algo));
            assert_eq!(algo.find_path(&g, n0, n4), search(&g, n0, n4, algo));
        }
    }

    #[test]
    fn repeated_queries_identical() {
        let g = random_graph(5, 30, 90);
        for algo in Algorithm::ALL {
            let first = search(&g, n(0), n(29), algo);
            for _ in 0..3 {
                assert_eq!(search(&g, n(0), n(29), algo), first, "{algo}");
            }
        }
    }

    #[test]
    fn random_graphs_match_brute_force() {
        for seed in 0..40 {
            let g = random_graph(seed, 7, 14);
            for s in 0..7 {
                for e in 0..7 {
                    let (s, e) = (n(s), n(e));
                    let expected = brute_force(&g, s, e);
                    let b = bfs(&g, s, e);
                    let d = dfs(&g, s, e);
                    let w = dijkstra(&g, s, e);
                    match expected {
                        None => {
                            assert!(b.is_empty() && d.is_empty() && w.is_empty(), "seed {seed} {s}->{e}");
                        }
                        Some((hops, cost)) => {
                            assert!(is_valid_path(&g, &b, s, e), "bfs seed {seed} {s}->{e}");
                            assert!(is_valid_path(&g, &d, s, e), "dfs seed {seed} {s}->{e}");
                            assert!(is_valid_path(&g, &w, s, e), "dijkstra seed {seed} {s}->{e}");
                            assert_eq!(b.len() - 1, hops, "bfs hops seed {seed} {s}->{e}");
                            // Parallel edges: path_cost takes the first edge of a
                            // pair, so compare against the minimal achievable sum
                            // along the returned node sequence.
                            assert_eq!(min_cost_along(&g, &w), cost, "dijkstra cost seed {seed} {s}->{e}");
                        }
                    }
                }
            }
        }
    }

    /// Sum of the cheapest parallel edge for each consecutive pair.
    fn min_cost_along(g: &crate::CampusGraph, path: &[cn_core::NodeId]) -> f64 {
        path.windows(2)
            .map(|w| {
                g.out_edges(w[0])
                    .iter()
                    .filter(|e| e.to == w[1])
                    .map(|e| e.weight)
                    .fold(f64::INFINITY, f64::min)
            })
            .sum()
    }
}

// ── Path cost & routes ────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use super::helpers::{grid_network, line_network, n};
    use crate::{Route, path_cost};

    #[test]
    fn trivial_paths_cost_nothing() {
        let (g, [a, ..]) = line_network();
        assert_eq!(path_cost(&g, &[]), 0.0);
        assert_eq!(path_cost(&g, &[a]), 0.0);
    }

    #[test]
    fn missing_edge_is_infinite() {
        let (g, [a, b, c]) = line_network();
        assert_eq!(path_cost(&g, &[c, b, a]), f64::INFINITY);
        assert!(!Route::from_path(&g, vec![a, n(50)]).is_valid());
    }

    #[test]
    fn first_parallel_edge_is_used() {
        let (mut g, [a, b, _]) = line_network();
        g.add_edge(crate::Edge::new(a, b, 0.25));
        assert_eq!(path_cost(&g, &[a, b]), 1.0);
    }

    #[test]
    fn route_helpers() {
        let (g, [n0, n1, n2, _, n4]) = grid_network();
        let r = Route::from_path(&g, vec![n0, n1, n2, n4]);
        assert_eq!(r.cost, 30.0);
        assert_eq!(r.hops(), 3);
        assert!(!r.is_trivial());
        assert!(r.is_valid());
        let line = r.polyline(&g);
        assert_eq!(line.len(), 4);
        assert_eq!((line[3].lat, line[3].lon), (1.0, 2.0));
    }
}

// ── Named locations ───────────────────────────────────────────────────────────

#[cfg(test)]
mod locations {
    use cn_core::Algorithm;

    use super::helpers::n;
    use crate::{CampusGraph, Dijkstra, GraphError, Locations, Node, NodeKind, route_between};

    /// Library has two entrances (1, 2), Gym has two (5, 6), 3/4 are walkway.
    ///
    /// ```text
    ///   1 —2— 3 —2— 5        costs on the arrows
    ///   2 —1— 4 —1— 6
    /// ```
    fn campus() -> CampusGraph {
        let mut g = CampusGraph::new();
        g.add_node(Node::new(n(1), 0.0, 0.0).named("Library").with_kind(NodeKind::Building));
        g.add_node(Node::new(n(2), 0.0, 2.0).named("Library ").with_kind(NodeKind::Building));
        g.add_node(Node::new(n(3), 1.0, 0.0));
        g.add_node(Node::new(n(4), 1.0, 2.0));
        g.add_node(Node::new(n(5), 2.0, 0.0).named("Gym").with_kind(NodeKind::Building));
        g.add_node(Node::new(n(6), 2.0, 2.0).named("Gym").with_kind(NodeKind::Building));
        g.add_node(Node::new(n(7), 9.0, 9.0).named("Island"));
        g.add_walkway(n(1), n(3), 2.0, true);
        g.add_walkway(n(3), n(5), 2.0, true);
        g.add_walkway(n(2), n(4), 1.0, true);
        g.add_walkway(n(4), n(6), 1.0, true);
        g
    }

    #[test]
    fn groups_by_trimmed_name_with_centroid() {
        let locs = Locations::from_graph(&campus());
        assert_eq!(locs.len(), 3);
        assert_eq!(locs.names().collect::<Vec<_>>(), vec!["Library", "Gym", "Island"]);

        let lib = locs.get("Library").unwrap();
        assert_eq!(lib.members, vec![n(1), n(2)]);
        assert_eq!((lib.centroid.lat, lib.centroid.lon), (0.0, 1.0));
        assert!(locs.get(" Gym ").is_some());
        assert!(locs.get("Pool").is_none());
    }

    #[test]
    fn picks_cheapest_member_pair() {
        let g = campus();
        let locs = Locations::from_graph(&g);
        let r = locs.route(&g, "Library", "Gym", &Dijkstra).unwrap();
        assert_eq!(r.nodes, vec![n(2), n(4), n(6)]);
        assert_eq!(r.cost, 2.0);

        // Unweighted strategies are still scored by cost.
        let r = locs.route(&g, "Library", "Gym", &Algorithm::Bfs).unwrap();
        assert_eq!(r.cost, 2.0);
    }

    #[test]
    fn route_between_dispatches_algorithm() {
        let g = campus();
        let locs = Locations::from_graph(&g);
        let r = route_between(&g, &locs, "Gym", "Library", Algorithm::Dijkstra).unwrap();
        assert_eq!(r.nodes, vec![n(6), n(4), n(2)]);
        assert_eq!(r.hops(), 2);
    }

    #[test]
    fn same_location_rejected() {
        let g = campus();
        let locs = Locations::from_graph(&g);
        assert!(matches!(
            locs.route(&g, "Gym", " Gym", &Dijkstra),
            Err(GraphError::SameLocation(_))
        ));
    }

    #[test]
    fn unknown_location_rejected() {
        let g = campus();
        let locs = Locations::from_graph(&g);
        assert!(matches!(
            locs.route(&g, "Library", "Pool", &Dijkstra),
            Err(GraphError::UnknownLocation(name)) if name == "Pool"
        ));
    }

    #[test]
    fn unreachable_location_is_no_route() {
        let g = campus();
        let locs = Locations::from_graph(&g);
        for algo in Algorithm::ALL {
            assert!(matches!(
                locs.route(&g, "Library", "Island", &algo),
                Err(GraphError::NoRoute { .. })
            ));
        }
    }
}
