use super::{Adjacent, Graph, GraphError, Orientation, VertexId};
use crate::vector2::Vector2;

/// Frozen adjacency of a [`Graph`], one contiguous row per vertex in
/// the order given by [`Graph::neighbors`]. Traversals index into it
/// with `(vertex, position)` pairs.
#[derive(Debug)]
pub struct Snapshot {
    rows: Vector2<Adjacent>,
    orientation: Orientation,
}

impl Snapshot {
    pub fn new<G: Graph>(graph: &G) -> Result<Self, GraphError> {
        let n = graph.size();
        let total = match graph.orientation() {
            Orientation::Directed => graph.edge_count(),
            Orientation::Undirected => 2 * graph.edge_count(),
        };
        let mut rows = Vector2::with_capacities(total, n);
        for v in 0..n {
            rows.push();
            for a in graph.neighbors(VertexId(v))? {
                rows.push_to_last(a)
            }
        }
        debug!(
            "snapshot: {} vertices, {} arcs, {}",
            rows.len(),
            rows.total(),
            graph.orientation()
        );
        Ok(Snapshot {
            rows,
            orientation: graph.orientation(),
        })
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn degree(&self, v: VertexId) -> usize {
        self.rows[v.0].len()
    }

    pub fn arc(&self, v: VertexId, i: usize) -> Adjacent {
        self.rows[v.0][i]
    }

    pub fn row(&self, v: VertexId) -> &[Adjacent] {
        &self.rows[v.0]
    }

    pub fn check_vertex(&self, v: VertexId) -> Result<(), GraphError> {
        if v.0 < self.size() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex: v,
                size: self.size(),
            })
        }
    }
}
