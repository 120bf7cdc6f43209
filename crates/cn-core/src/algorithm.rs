//! Search-strategy and edge-weight selectors shared by the graph, dataset,
//! and application crates.

use std::str::FromStr;

use crate::CnError;

/// Which path-search strategy to run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Unweighted breadth-first search.  Minimal hop count.
    Bfs,
    /// Unweighted depth-first search.  Some path, not necessarily short.
    Dfs,
    /// Weighted shortest path over nonnegative edge weights.
    #[default]
    Dijkstra,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra];

    /// `true` if the strategy takes edge weights into account.
    #[inline]
    pub fn is_weighted(self) -> bool {
        matches!(self, Algorithm::Dijkstra)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs      => "bfs",
            Algorithm::Dfs      => "dfs",
            Algorithm::Dijkstra => "dijkstra",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs"      => Ok(Algorithm::Bfs),
            "dfs"      => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            other => Err(CnError::Parse(format!(
                "unknown algorithm {other:?}: expected \"bfs\", \"dfs\", or \"dijkstra\""
            ))),
        }
    }
}

/// Which scalar of an edge record becomes its search weight.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeightCriterion {
    /// Walkway length in metres.
    #[default]
    Distance,
    /// Walking time in seconds.
    Time,
}

impl WeightCriterion {
    pub fn as_str(self) -> &'static str {
        match self {
            WeightCriterion::Distance => "distance",
            WeightCriterion::Time     => "time",
        }
    }
}

impl std::fmt::Display for WeightCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightCriterion {
    type Err = CnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "distance" => Ok(WeightCriterion::Distance),
            "time"     => Ok(WeightCriterion::Time),
            other => Err(CnError::Parse(format!(
                "unknown weight criterion {other:?}: expected \"distance\" or \"time\""
            ))),
        }
    }
}
