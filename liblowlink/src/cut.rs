//! Cut vertices and bridges of undirected graphs.
use crate::dfs::Traversal;
use crate::graph::{expect_orientation, EdgeId, Graph, GraphError, Orientation, VertexId};
use crate::HashSet;

#[derive(Debug, Clone, Default)]
pub struct Articulation {
    pub cut_vertices: HashSet<VertexId>,
    /// Bridges by edge identity. Parallel edges are never bridges.
    pub bridges: HashSet<EdgeId>,
}

/// Cut vertices and bridges, from a single traversal.
pub fn articulation<G: Graph>(graph: &G) -> Result<Articulation, GraphError> {
    expect_orientation(graph, Orientation::Undirected)?;
    let t = Traversal::run(graph)?;
    let a = Articulation::from_traversal(&t);
    debug!(
        "articulation: {} cut vertices, {} bridges",
        a.cut_vertices.len(),
        a.bridges.len()
    );
    Ok(a)
}

pub fn cut_vertices<G: Graph>(graph: &G) -> Result<HashSet<VertexId>, GraphError> {
    Ok(articulation(graph)?.cut_vertices)
}

pub fn bridges<G: Graph>(graph: &G) -> Result<HashSet<EdgeId>, GraphError> {
    Ok(articulation(graph)?.bridges)
}

impl Articulation {
    pub(crate) fn from_traversal(t: &Traversal) -> Self {
        let mut a = Articulation::default();
        for v in 0..t.size() {
            let (p, e) = if let Some(pe) = t.parent[v] {
                pe
            } else {
                if t.children(VertexId(v)) >= 2 {
                    a.cut_vertices.insert(VertexId(v));
                }
                continue;
            };
            // Nothing below `v` climbs above `p`: removing `p`
            // separates the subtree of `v` from the rest.
            if t.low_link[v] >= t.discovery[p.0] && !t.is_root(p) {
                a.cut_vertices.insert(p);
            }
            // A parallel copy of `e` is a back-edge to `p`, so it
            // already pulled `low_link[v]` down to `discovery[p]`.
            if t.low_link[v] > t.discovery[p.0] {
                a.bridges.insert(e);
            }
        }
        a
    }

    pub fn is_cut_vertex(&self, v: VertexId) -> bool {
        self.cut_vertices.contains(&v)
    }

    pub fn is_bridge(&self, e: EdgeId) -> bool {
        self.bridges.contains(&e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ListGraph;

    fn undirected(n: usize, edges: &[(usize, usize)]) -> ListGraph {
        ListGraph::from_edges(n, Orientation::Undirected, edges.iter().cloned()).unwrap()
    }

    #[test]
    fn star_center_is_cut_vertex() {
        let g = undirected(4, &[(0, 1), (0, 2), (0, 3)]);
        let a = articulation(&g).unwrap();
        assert_eq!(a.cut_vertices.len(), 1);
        assert!(a.is_cut_vertex(VertexId(0)));
        assert_eq!(a.bridges.len(), 3);
    }

    #[test]
    fn root_with_one_child_is_not_cut() {
        // 0 is the root and leaf of the path 0-1-2.
        let g = undirected(3, &[(0, 1), (1, 2)]);
        let a = articulation(&g).unwrap();
        assert_eq!(a.cut_vertices.iter().collect::<Vec<_>>(), vec![&VertexId(1)]);
    }

    #[test]
    fn bridge_between_two_triangles() {
        let g = undirected(
            6,
            &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)],
        );
        let a = articulation(&g).unwrap();
        assert_eq!(a.bridges.iter().collect::<Vec<_>>(), vec![&EdgeId(3)]);
        let mut cut: Vec<_> = a.cut_vertices.into_iter().collect();
        cut.sort();
        assert_eq!(cut, vec![VertexId(2), VertexId(3)]);
    }

    #[test]
    fn bridges_reported_by_identity() {
        let mut g = ListGraph::undirected(3);
        g.add_edge_with_id(VertexId(0), VertexId(1), EdgeId(10))
            .unwrap();
        g.add_edge_with_id(VertexId(1), VertexId(2), EdgeId(20))
            .unwrap();
        g.add_edge_with_id(VertexId(1), VertexId(2), EdgeId(30))
            .unwrap();
        let b = bridges(&g).unwrap();
        assert_eq!(b.into_iter().collect::<Vec<_>>(), vec![EdgeId(10)]);
    }

    #[test]
    fn self_loop_does_not_protect() {
        let g = undirected(2, &[(0, 1), (1, 1)]);
        let a = articulation(&g).unwrap();
        assert!(a.is_bridge(EdgeId(0)));
        assert!(!a.is_bridge(EdgeId(1)));
        assert!(a.cut_vertices.is_empty());
    }

    #[test]
    fn directed_graph_rejected() {
        let g = ListGraph::directed(2);
        assert_eq!(
            articulation(&g).unwrap_err(),
            GraphError::Orientation {
                expected: Orientation::Undirected
            }
        );
    }
}
