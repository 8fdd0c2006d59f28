//! Strongly connected components of directed graphs.
//!
//! Two interchangeable decompositions are provided: [`kosaraju`],
//! built on two runs of the [`Traversal`](crate::dfs::Traversal)
//! kernel, and [`tarjan`], a single pass. They produce the same
//! partition, possibly with different labels.
use crate::config::{Config, SccAlgorithm};
use crate::graph::{Graph, GraphError, VertexId};

mod condensation;
mod kosaraju;
mod tarjan;

pub use condensation::condensation;
pub use kosaraju::kosaraju;
pub use tarjan::tarjan;

/// A labelling of the vertices with components `1..=count`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition {
    pub labels: Vec<usize>,
    pub count: usize,
}

impl Partition {
    /// Label of `v`, `None` if `v` is not covered.
    pub fn label(&self, v: VertexId) -> Option<usize> {
        self.labels.get(v.0).cloned()
    }

    /// Whether `u` and `v` are both covered and in the same class.
    pub fn same(&self, u: VertexId, v: VertexId) -> bool {
        match (self.label(u), self.label(v)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Members of each component, component `c` at index `c - 1`,
    /// each sorted. Vertices with a label outside `1..=count` are
    /// left out.
    pub fn classes(&self) -> Vec<Vec<VertexId>> {
        let mut classes = vec![Vec::new(); self.count];
        for (v, &l) in self.labels.iter().enumerate() {
            if let Some(class) = l.checked_sub(1).and_then(|c| classes.get_mut(c)) {
                class.push(VertexId(v))
            }
        }
        classes
    }

    /// Check that the partition labels exactly `size` vertices, each
    /// within `1..=count`.
    pub fn check(&self, size: usize) -> Result<(), GraphError> {
        if self.labels.len() != size {
            return Err(GraphError::PartitionMismatch {
                expected: size,
                got: self.labels.len(),
            });
        }
        for (v, &label) in self.labels.iter().enumerate() {
            if label == 0 || label > self.count {
                return Err(GraphError::InvalidLabel {
                    vertex: VertexId(v),
                    label,
                    count: self.count,
                });
            }
        }
        Ok(())
    }
}

pub fn strongly_connected_components<G: Graph>(
    graph: &G,
    config: &Config,
) -> Result<Partition, GraphError> {
    match config.scc {
        SccAlgorithm::Kosaraju => kosaraju(graph),
        SccAlgorithm::Tarjan => tarjan(graph),
    }
}
