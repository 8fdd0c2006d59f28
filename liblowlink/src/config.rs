//! Analysis settings, readable from TOML:
//!
//! ```toml
//! scc = "tarjan"
//! dense_limit = 32
//! ```
use crate::graph::{AnyGraph, ListGraph, MatrixGraph, Orientation};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SccAlgorithm {
    #[serde(rename = "kosaraju")]
    Kosaraju,
    #[serde(rename = "tarjan")]
    Tarjan,
}

impl Default for SccAlgorithm {
    fn default() -> Self {
        SccAlgorithm::Kosaraju
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backing {
    List,
    Matrix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Algorithm used by
    /// [`strongly_connected_components`](crate::strongly_connected_components).
    pub scc: SccAlgorithm,
    /// Largest vertex count for which a dense matrix is recommended.
    pub dense_limit: usize,
}

pub const DEFAULT_DENSE_LIMIT: usize = 64;

impl Default for Config {
    fn default() -> Self {
        Config {
            scc: SccAlgorithm::default(),
            dense_limit: DEFAULT_DENSE_LIMIT,
        }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(s)?;
        debug!("config = {:?}", config);
        Ok(config)
    }

    pub fn backing(&self, n: usize) -> Backing {
        if n <= self.dense_limit {
            Backing::Matrix
        } else {
            Backing::List
        }
    }

    /// An empty graph on `n` vertices, with the backing recommended
    /// for `n`.
    pub fn new_graph(&self, n: usize, orientation: Orientation) -> AnyGraph {
        match self.backing(n) {
            Backing::Matrix => AnyGraph::Matrix(MatrixGraph::new(n, orientation)),
            Backing::List => AnyGraph::List(ListGraph::new(n, orientation)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn defaults() {
        let c = Config::from_toml("").unwrap();
        assert_eq!(c, Config::default());
        assert_eq!(c.scc, SccAlgorithm::Kosaraju);
        assert_eq!(c.backing(DEFAULT_DENSE_LIMIT), Backing::Matrix);
        assert_eq!(c.backing(DEFAULT_DENSE_LIMIT + 1), Backing::List);
    }

    #[test]
    fn parse() {
        let c = Config::from_toml("scc = \"tarjan\"\ndense_limit = 0\n").unwrap();
        assert_eq!(c.scc, SccAlgorithm::Tarjan);
        assert_eq!(c.dense_limit, 0);
        match c.new_graph(3, Orientation::Directed) {
            AnyGraph::List(g) => assert_eq!(g.size(), 3),
            AnyGraph::Matrix(_) => panic!("expected a list backing"),
        }
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(Config::from_toml("colour = \"blue\"\n").is_err());
        assert!(Config::from_toml("scc = \"dijkstra\"\n").is_err());
    }
}
