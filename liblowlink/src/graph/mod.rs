//! Graph storage.
//!
//! A graph is anything implementing [`Graph`]: a fixed set of
//! vertices `0..size()`, and edges added one at a time, each with a
//! stable [`EdgeId`]. Parallel edges and self-loops are allowed.
//!
//! Two backings are provided, [`ListGraph`] (adjacency lists) and
//! [`MatrixGraph`] (a dense table of edge multisets, for small dense
//! inputs). Analyses never read a graph directly: they first take a
//! [`Snapshot`], which freezes the adjacency into compact rows.
use crate::HashSet;

mod list;
mod matrix;
mod snapshot;

pub use list::ListGraph;
pub use matrix::{MatrixGraph, MatrixNeighbors};
pub use snapshot::Snapshot;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct VertexId(pub usize);

impl From<usize> for VertexId {
    fn from(v: usize) -> Self {
        VertexId(v)
    }
}

/// Identity of an edge, by default its insertion index. Both
/// directions of an undirected edge share the same identity, which
/// is how a traversal tells the edge it arrived by apart from a
/// parallel copy of it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct EdgeId(pub usize);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Adjacent {
    pub target: VertexId,
    pub edge: EdgeId,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    Directed,
    Undirected,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Orientation::Directed => write!(fmt, "directed"),
            Orientation::Undirected => write!(fmt, "undirected"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid vertex {} (graph has {} vertices)", vertex.0, size)]
    InvalidVertex { vertex: VertexId, size: usize },
    #[error("Edge identity {} already in use", edge.0)]
    DuplicateEdge { edge: EdgeId },
    #[error("Expected a {} graph", expected)]
    Orientation { expected: Orientation },
    #[error("Partition covers {} vertices, graph has {}", got, expected)]
    PartitionMismatch { expected: usize, got: usize },
    #[error("Vertex {} has label {}, outside 1..={}", vertex.0, label, count)]
    InvalidLabel {
        vertex: VertexId,
        label: usize,
        count: usize,
    },
}

pub trait Graph {
    type Neighbors<'a>: Iterator<Item = Adjacent>
    where
        Self: 'a;

    fn size(&self) -> usize;

    fn orientation(&self) -> Orientation;

    /// Number of edges inserted (an undirected edge counts once).
    fn edge_count(&self) -> usize;

    /// Identity the next [`add_edge`](Graph::add_edge) will use: one
    /// past the largest identity inserted so far.
    fn next_edge_id(&self) -> EdgeId;

    /// Insert an edge identified by `id`. Undirected graphs insert
    /// both directions.
    fn add_edge_with_id(
        &mut self,
        from: VertexId,
        to: VertexId,
        id: EdgeId,
    ) -> Result<EdgeId, GraphError>;

    /// Insert an edge with a fresh identity. Without caller-chosen
    /// identities, this is the insertion index.
    fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<EdgeId, GraphError> {
        let id = self.next_edge_id();
        self.add_edge_with_id(from, to, id)
    }

    fn neighbors(&self, v: VertexId) -> Result<Self::Neighbors<'_>, GraphError>;

    fn is_directed(&self) -> bool {
        self.orientation() == Orientation::Directed
    }

    fn check_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if v.0 < self.size() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: v,
                size: self.size(),
            })
        }
    }

    /// The same graph with every arc flipped, edge identities
    /// preserved. An undirected graph is its own reverse.
    fn reversed(&self) -> Result<ListGraph, GraphError> {
        let mut rev = ListGraph::new(self.size(), self.orientation());
        for v in 0..self.size() {
            let v = VertexId(v);
            for a in self.neighbors(v)? {
                match self.orientation() {
                    Orientation::Directed => rev.push_arc(a.target, v, a.edge),
                    Orientation::Undirected => rev.push_arc(v, a.target, a.edge),
                }
            }
        }
        rev.set_edges(self.edge_count(), self.edge_ids()?);
        Ok(rev)
    }

    /// Identities of all inserted edges.
    fn edge_ids(&self) -> Result<HashSet<EdgeId>, GraphError> {
        let mut ids = HashSet::default();
        for v in 0..self.size() {
            for a in self.neighbors(VertexId(v))? {
                ids.insert(a.edge);
            }
        }
        Ok(ids)
    }
}

pub(crate) fn expect_orientation<G: Graph>(
    graph: &G,
    expected: Orientation,
) -> Result<(), GraphError> {
    if graph.orientation() == expected {
        Ok(())
    } else {
        Err(GraphError::Orientation { expected })
    }
}

/// A graph whose backing was picked at runtime, see
/// [`Config::new_graph`](crate::Config::new_graph).
#[derive(Debug, Clone)]
pub enum AnyGraph {
    List(ListGraph),
    Matrix(MatrixGraph),
}

pub enum AnyNeighbors<'a> {
    List(<ListGraph as Graph>::Neighbors<'a>),
    Matrix(MatrixNeighbors<'a>),
}

impl<'a> Iterator for AnyNeighbors<'a> {
    type Item = Adjacent;
    fn next(&mut self) -> Option<Adjacent> {
        match self {
            AnyNeighbors::List(it) => it.next(),
            AnyNeighbors::Matrix(it) => it.next(),
        }
    }
}

impl Graph for AnyGraph {
    type Neighbors<'a> = AnyNeighbors<'a>;

    fn size(&self) -> usize {
        match self {
            AnyGraph::List(g) => g.size(),
            AnyGraph::Matrix(g) => g.size(),
        }
    }

    fn orientation(&self) -> Orientation {
        match self {
            AnyGraph::List(g) => g.orientation(),
            AnyGraph::Matrix(g) => g.orientation(),
        }
    }

    fn edge_count(&self) -> usize {
        match self {
            AnyGraph::List(g) => g.edge_count(),
            AnyGraph::Matrix(g) => g.edge_count(),
        }
    }

    fn next_edge_id(&self) -> EdgeId {
        match self {
            AnyGraph::List(g) => g.next_edge_id(),
            AnyGraph::Matrix(g) => g.next_edge_id(),
        }
    }

    fn add_edge_with_id(
        &mut self,
        from: VertexId,
        to: VertexId,
        id: EdgeId,
    ) -> Result<EdgeId, GraphError> {
        match self {
            AnyGraph::List(g) => g.add_edge_with_id(from, to, id),
            AnyGraph::Matrix(g) => g.add_edge_with_id(from, to, id),
        }
    }

    fn neighbors(&self, v: VertexId) -> Result<AnyNeighbors<'_>, GraphError> {
        match self {
            AnyGraph::List(g) => Ok(AnyNeighbors::List(g.neighbors(v)?)),
            AnyGraph::Matrix(g) => Ok(AnyNeighbors::Matrix(g.neighbors(v)?)),
        }
    }
}
