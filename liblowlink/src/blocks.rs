//! Block decompositions of undirected graphs.
//!
//! Two different notions of "block" live here:
//!
//! - [`two_edge_components`] gives each vertex exactly one label: two
//!   vertices share a label iff they remain connected after all
//!   bridges are removed.
//! - [`biconnected_components`] labels edges instead, in the classical
//!   way, so that a cut vertex belongs to several components.
use crate::cut::Articulation;
use crate::dfs::Traversal;
use crate::graph::{
    expect_orientation, EdgeId, Graph, GraphError, ListGraph, Orientation, Snapshot, VertexId,
};
use crate::scc::Partition;
use crate::HashMap;

/// Partition into 2-edge-connected blocks, labelled `1..=count` in
/// discovery order of their first vertex.
pub fn two_edge_components<G: Graph>(graph: &G) -> Result<Partition, GraphError> {
    expect_orientation(graph, Orientation::Undirected)?;
    let t = Traversal::run(graph)?;
    let a = Articulation::from_traversal(&t);
    let p = label_blocks(&t, &a);
    debug!("two_edge_components: {} blocks", p.count);
    Ok(p)
}

fn label_blocks(t: &Traversal, a: &Articulation) -> Partition {
    let mut labels = vec![0; t.size()];
    let mut count = 0;
    for v in t.discovery_order() {
        labels[v.0] = match t.parent[v.0] {
            Some((p, e)) if !a.is_bridge(e) => labels[p.0],
            _ => {
                count += 1;
                count
            }
        }
    }
    Partition { labels, count }
}

/// The blocks, and the forest whose vertices are the blocks (block
/// `b` being vertex `b - 1`) and whose edges are the bridges, under
/// their original identities.
pub fn bridge_tree<G: Graph>(graph: &G) -> Result<(Partition, ListGraph), GraphError> {
    expect_orientation(graph, Orientation::Undirected)?;
    let t = Traversal::run(graph)?;
    let a = Articulation::from_traversal(&t);
    let blocks = label_blocks(&t, &a);
    let mut tree = ListGraph::undirected(blocks.count);
    for v in t.discovery_order() {
        if let Some((p, e)) = t.parent[v.0] {
            if a.is_bridge(e) {
                tree.add_edge_with_id(
                    VertexId(blocks.labels[p.0] - 1),
                    VertexId(blocks.labels[v.0] - 1),
                    e,
                )?;
            }
        }
    }
    Ok((blocks, tree))
}

/// Minimum number of edges to add, each inside a connected
/// component, so that the graph has no bridge left.
///
/// Every connected component whose bridge tree has `l` leaves needs
/// `(l + 1) / 2` new edges, pairing leaves across the tree.
pub fn augmentation_count<G: Graph>(graph: &G) -> Result<usize, GraphError> {
    let (blocks, tree) = bridge_tree(graph)?;
    // One DFS tree of the bridge forest per connected component.
    let components = Traversal::run(&tree)?;
    let mut leaves = vec![0; components.tree_count()];
    for b in 0..blocks.count {
        if tree.neighbors(VertexId(b))?.count() == 1 {
            leaves[components.tree[b]] += 1
        }
    }
    let total = leaves.iter().map(|l| (l + 1) / 2).sum();
    debug!(
        "augmentation_count: {} blocks, {} leaves, {} edges",
        blocks.count,
        leaves.iter().sum::<usize>(),
        total
    );
    Ok(total)
}

/// Classical biconnected components, as a partition of the edges.
#[derive(Debug, Clone, Default)]
pub struct EdgePartition {
    labels: HashMap<EdgeId, usize>,
    edges: Vec<Vec<EdgeId>>,
    vertices: Vec<Vec<VertexId>>,
}

impl EdgePartition {
    fn new_component(&mut self) -> usize {
        self.edges.push(Vec::new());
        self.vertices.push(Vec::new());
        self.edges.len()
    }

    fn assign(&mut self, e: EdgeId, label: usize, u: VertexId, v: VertexId) {
        self.labels.insert(e, label);
        self.edges[label - 1].push(e);
        self.vertices[label - 1].push(u);
        self.vertices[label - 1].push(v);
    }

    pub fn count(&self) -> usize {
        self.edges.len()
    }

    pub fn label(&self, e: EdgeId) -> Option<usize> {
        self.labels.get(&e).cloned()
    }

    /// Edges of component `label`, `None` outside `1..=count()`.
    pub fn edges(&self, label: usize) -> Option<&[EdgeId]> {
        let i = label.checked_sub(1)?;
        self.edges.get(i).map(|e| &e[..])
    }

    /// Vertices touched by component `label`, sorted.
    pub fn vertices(&self, label: usize) -> Option<&[VertexId]> {
        let i = label.checked_sub(1)?;
        self.vertices.get(i).map(|v| &v[..])
    }
}

/// Biconnected components. The tree edge into `v` opens a new
/// component when `v`'s subtree cannot climb above its parent, and
/// otherwise joins the component of the tree edge into the parent.
/// A back-edge joins the component of the tree edge into its lower
/// end, and a self-loop is a component of its own.
pub fn biconnected_components<G: Graph>(graph: &G) -> Result<EdgePartition, GraphError> {
    expect_orientation(graph, Orientation::Undirected)?;
    let snapshot = Snapshot::new(graph)?;
    let t = Traversal::over(&snapshot, &[]);
    let mut bcc = EdgePartition::default();
    let mut above = vec![0; t.size()];
    for v in t.discovery_order() {
        if let Some((p, e)) = t.parent[v.0] {
            above[v.0] = if t.low_link[v.0] >= t.discovery[p.0] {
                bcc.new_component()
            } else {
                above[p.0]
            };
            bcc.assign(e, above[v.0], p, v);
        }
    }
    for u in 0..snapshot.size() {
        let u = VertexId(u);
        for a in snapshot.row(u) {
            if bcc.labels.contains_key(&a.edge) {
                continue;
            }
            if a.target == u {
                let c = bcc.new_component();
                bcc.assign(a.edge, c, u, u);
            } else if t.discovery[a.target.0] < t.discovery[u.0] {
                bcc.assign(a.edge, above[u.0], u, a.target);
            }
        }
    }
    for vs in bcc.vertices.iter_mut() {
        vs.sort();
        vs.dedup();
    }
    debug!("biconnected_components: {} components", bcc.count());
    Ok(bcc)
}
