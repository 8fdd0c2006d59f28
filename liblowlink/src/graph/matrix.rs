use super::{Adjacent, EdgeId, Graph, GraphError, Orientation, VertexId};
use crate::HashSet;

/// Dense `n × n` table, cell `(u, v)` holding the identities of the
/// arcs from `u` to `v` in insertion order. Neighbors come out by
/// increasing target, then by insertion order.
#[derive(Debug, Clone)]
pub struct MatrixGraph {
    n: usize,
    cells: Vec<Vec<EdgeId>>,
    orientation: Orientation,
    edges: usize,
    ids: HashSet<EdgeId>,
    next_id: usize,
}

impl MatrixGraph {
    pub fn new(n: usize, orientation: Orientation) -> Self {
        MatrixGraph {
            n,
            cells: vec![Vec::new(); n * n],
            orientation,
            edges: 0,
            ids: HashSet::default(),
            next_id: 0,
        }
    }

    /// Number of arcs from `u` to `v`.
    pub fn multiplicity(&self, u: VertexId, v: VertexId) -> Result<usize, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.cells[u.0 * self.n + v.0].len())
    }
}

pub struct MatrixNeighbors<'a> {
    row: &'a [Vec<EdgeId>],
    col: usize,
    k: usize,
}

impl<'a> Iterator for MatrixNeighbors<'a> {
    type Item = Adjacent;
    fn next(&mut self) -> Option<Adjacent> {
        while self.col < self.row.len() {
            let cell = &self.row[self.col];
            if self.k < cell.len() {
                self.k += 1;
                return Some(Adjacent {
                    target: VertexId(self.col),
                    edge: cell[self.k - 1],
                });
            }
            self.col += 1;
            self.k = 0;
        }
        None
    }
}

impl Graph for MatrixGraph {
    type Neighbors<'a> = MatrixNeighbors<'a>;

    fn size(&self) -> usize {
        self.n
    }

    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn edge_count(&self) -> usize {
        self.edges
    }

    fn next_edge_id(&self) -> EdgeId {
        EdgeId(self.next_id)
    }

    fn add_edge_with_id(
        &mut self,
        from: VertexId,
        to: VertexId,
        id: EdgeId,
    ) -> Result<EdgeId, GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if !self.ids.insert(id) {
            return Err(GraphError::DuplicateEdge { edge: id });
        }
        self.cells[from.0 * self.n + to.0].push(id);
        if self.orientation == Orientation::Undirected {
            self.cells[to.0 * self.n + from.0].push(id);
        }
        self.edges += 1;
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        Ok(id)
    }

    fn neighbors(&self, v: VertexId) -> Result<MatrixNeighbors<'_>, GraphError> {
        self.check_vertex(v)?;
        Ok(MatrixNeighbors {
            row: &self.cells[v.0 * self.n..(v.0 + 1) * self.n],
            col: 0,
            k: 0,
        })
    }

    fn edge_ids(&self) -> Result<HashSet<EdgeId>, GraphError> {
        Ok(self.ids.clone())
    }
}
