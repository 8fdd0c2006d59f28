use super::{Adjacent, EdgeId, Graph, GraphError, Orientation, VertexId};
use crate::HashSet;

/// Adjacency lists, in insertion order.
#[derive(Debug, Clone)]
pub struct ListGraph {
    adjacency: Vec<Vec<Adjacent>>,
    orientation: Orientation,
    edges: usize,
    ids: HashSet<EdgeId>,
    next_id: usize,
}

impl ListGraph {
    pub fn new(n: usize, orientation: Orientation) -> Self {
        ListGraph {
            adjacency: vec![Vec::new(); n],
            orientation,
            edges: 0,
            ids: HashSet::default(),
            next_id: 0,
        }
    }

    pub fn directed(n: usize) -> Self {
        Self::new(n, Orientation::Directed)
    }

    pub fn undirected(n: usize) -> Self {
        Self::new(n, Orientation::Undirected)
    }

    /// Build a graph from `(from, to)` pairs, edge `i` getting
    /// identity `EdgeId(i)`.
    pub fn from_edges<I: IntoIterator<Item = (usize, usize)>>(
        n: usize,
        orientation: Orientation,
        edges: I,
    ) -> Result<Self, GraphError> {
        let mut g = Self::new(n, orientation);
        for (from, to) in edges {
            g.add_edge(VertexId(from), VertexId(to))?;
        }
        Ok(g)
    }

    pub(crate) fn push_arc(&mut self, from: VertexId, to: VertexId, edge: EdgeId) {
        self.adjacency[from.0].push(Adjacent { target: to, edge })
    }

    pub(crate) fn set_edges(&mut self, edges: usize, ids: HashSet<EdgeId>) {
        self.edges = edges;
        self.next_id = ids.iter().map(|e| e.0.saturating_add(1)).max().unwrap_or(0);
        self.ids = ids;
    }
}

impl Graph for ListGraph {
    type Neighbors<'a> = std::iter::Copied<std::slice::Iter<'a, Adjacent>>;

    fn size(&self) -> usize {
        self.adjacency.len()
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
        self.push_arc(from, to, id);
        if self.orientation == Orientation::Undirected {
            self.push_arc(to, from, id);
        }
        self.edges += 1;
        self.next_id = self.next_id.max(id.0.saturating_add(1));
        Ok(id)
    }

    fn neighbors(&self, v: VertexId) -> Result<Self::Neighbors<'_>, GraphError> {
        self.check_vertex(v)?;
        Ok(self.adjacency[v.0].iter().copied())
    }

    fn edge_ids(&self) -> Result<HashSet<EdgeId>, GraphError> {
        Ok(self.ids.clone())
    }
}
