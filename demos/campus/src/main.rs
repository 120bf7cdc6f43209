//! campus — command-line demo for the campus-nav engine.
//!
//! Loads a node/edge dataset (or the built-in sample campus), then routes
//! between named places, finds the node nearest a coordinate, lists places,
//! or preprocesses a GeoJSON map into a dataset file.
//!
//! ```text
//! campus locations
//! campus route --from "Main Library" --to "Food Court" --algorithm bfs
//! campus nearest --lat 12.9231 --lng 77.4979 --within 0.0005
//! campus preprocess --geojson map.geojson --out campus.json
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` for per-query detail.

mod sample;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cn_core::{Algorithm, CampusConfig, GeoPoint, NodeId, WeightCriterion};
use cn_dataset::{
    Dataset, build_node_index, fitted_index_config, load_dataset_json, nearest_node,
    preprocess_geojson_file, save_dataset_json,
};
use cn_graph::{CampusGraph, Locations, Route, route_between};
use cn_quadtree::Rectangle;

use sample::sample_dataset;

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "Campus navigation demo", long_about = None)]
struct Cli {
    /// JSON config file; every section falls back to its default.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Route between two named places
    Route {
        /// Dataset JSON (`{"nodes": [...], "edges": [...]}`); sample campus if omitted
        #[arg(long)]
        data: Option<PathBuf>,

        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        /// bfs, dfs or dijkstra (default from config)
        #[arg(long)]
        algorithm: Option<Algorithm>,

        /// distance or time (default from config)
        #[arg(long)]
        criterion: Option<WeightCriterion>,
    },
    /// Find the node nearest a coordinate
    Nearest {
        #[arg(long)]
        data: Option<PathBuf>,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Also list nodes within this many degrees of the coordinate
        #[arg(long)]
        within: Option<f64>,

        /// Size the index boundary to the dataset instead of the configured one
        #[arg(long)]
        fit: bool,
    },
    /// List named places
    Locations {
        #[arg(long)]
        data: Option<PathBuf>,
    },
    /// Convert a GeoJSON map into a dataset file
    Preprocess {
        #[arg(long)]
        geojson: PathBuf,

        #[arg(long)]
        out: PathBuf,
    },
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(anyhow::Error::msg)
}

fn load_config(path: Option<&Path>) -> Result<CampusConfig> {
    let Some(path) = path else {
        return Ok(CampusConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config: CampusConfig = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate()?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

fn load_dataset(data: Option<&Path>, config: &CampusConfig) -> Result<Dataset> {
    match data {
        Some(path) => load_dataset_json(path)
            .with_context(|| format!("loading dataset {}", path.display())),
        None => sample_dataset(&config.preprocess),
    }
}

fn node_label(graph: &CampusGraph, id: NodeId) -> String {
    match graph.node(id) {
        Some(node) => match node.display_name() {
            Some(name) => format!("{id} {name}"),
            None => format!("{id}"),
        },
        None => format!("{id} (no record)"),
    }
}

fn print_route(graph: &CampusGraph, route: &Route, criterion: WeightCriterion) {
    let unit = match criterion {
        WeightCriterion::Distance => "m",
        WeightCriterion::Time     => "s",
    };
    println!("{} hops, {:.1} {unit}", route.hops(), route.cost);
    for &id in &route.nodes {
        match graph.node(id) {
            Some(node) => println!(
                "  {:<32} {:>10.6} {:>10.6}",
                node_label(graph, id),
                node.pos.lat,
                node.pos.lon
            ),
            None => println!("  {}", node_label(graph, id)),
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn run_route(
    config: &CampusConfig,
    data: Option<&Path>,
    from: &str,
    to: &str,
    algorithm: Option<Algorithm>,
    criterion: Option<WeightCriterion>,
) -> Result<()> {
    let algorithm = algorithm.unwrap_or(config.routing.algorithm);
    let criterion = criterion.unwrap_or(config.routing.criterion);

    let graph = load_dataset(data, config)?.to_graph(criterion)?;
    let locations = Locations::from_graph(&graph);

    let t0 = Instant::now();
    let route = route_between(&graph, &locations, from, to, algorithm)?;
    tracing::info!(elapsed = ?t0.elapsed(), "route found");

    println!("{} -> {} ({algorithm}, by {criterion})", from.trim(), to.trim());
    print_route(&graph, &route, criterion);
    Ok(())
}

fn run_nearest(
    config: &CampusConfig,
    data: Option<&Path>,
    lat: f64,
    lng: f64,
    within: Option<f64>,
    fit: bool,
) -> Result<()> {
    let graph = load_dataset(data, config)?.to_graph(config.routing.criterion)?;
    let index_config = if fit {
        fitted_index_config(&graph, config.index.capacity).unwrap_or_else(|| config.index.clone())
    } else {
        config.index.clone()
    };
    let index = build_node_index(&graph, &index_config)?;

    let Some(node) = nearest_node(&index, lat, lng) else {
        bail!("no indexed nodes");
    };
    println!(
        "nearest: {} at ({:.6}, {:.6}), {:.1} m away",
        node_label(&graph, node.id),
        node.pos.lat,
        node.pos.lon,
        node.pos.distance_m(GeoPoint::new(lat, lng)),
    );

    if let Some(half) = within {
        let hits = index.query_range(&Rectangle::new(lat, lng, half, half));
        println!("{} nodes within ±{half}°:", hits.len());
        for p in hits {
            println!("  {}", node_label(&graph, p.data.id));
        }
    }
    Ok(())
}

fn run_locations(config: &CampusConfig, data: Option<&Path>) -> Result<()> {
    let graph = load_dataset(data, config)?.to_graph(config.routing.criterion)?;
    let locations = Locations::from_graph(&graph);

    println!("{:<24} {:>7} {:>10} {:>10}", "Location", "Nodes", "Lat", "Lng");
    println!("{}", "-".repeat(54));
    for loc in locations.iter() {
        println!(
            "{:<24} {:>7} {:>10.6} {:>10.6}",
            loc.name,
            loc.members.len(),
            loc.centroid.lat,
            loc.centroid.lon,
        );
    }
    Ok(())
}

fn run_preprocess(config: &CampusConfig, geojson: &Path, out: &Path) -> Result<()> {
    let dataset = preprocess_geojson_file(geojson, &config.preprocess)
        .with_context(|| format!("preprocessing {}", geojson.display()))?;
    save_dataset_json(out, &dataset)
        .with_context(|| format!("writing {}", out.display()))?;
    println!(
        "wrote {} nodes, {} edges to {}",
        dataset.nodes.len(),
        dataset.edges.len(),
        out.display()
    );
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Route { data, from, to, algorithm, criterion } => {
            run_route(&config, data.as_deref(), &from, &to, algorithm, criterion)
        }
        Command::Nearest { data, lat, lng, within, fit } => {
            run_nearest(&config, data.as_deref(), lat, lng, within, fit)
        }
        Command::Locations { data } => run_locations(&config, data.as_deref()),
        Command::Preprocess { geojson, out } => run_preprocess(&config, &geojson, &out),
    }
}
