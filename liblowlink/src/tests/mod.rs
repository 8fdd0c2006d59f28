use crate::*;
use quickcheck::{Arbitrary, Gen};

mod deep;

/// A small random multigraph, loops included, for property tests.
#[derive(Debug, Clone)]
struct EdgeList {
    n: usize,
    edges: Vec<(usize, usize)>,
}

impl Arbitrary for EdgeList {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = 1 + usize::arbitrary(g) % 9;
        let m = usize::arbitrary(g) % 16;
        let edges = (0..m)
            .map(|_| (usize::arbitrary(g) % n, usize::arbitrary(g) % n))
            .collect();
        EdgeList { n, edges }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let list = self.clone();
        Box::new((0..self.edges.len()).map(move |i| {
            let mut l = list.clone();
            l.edges.remove(i);
            l
        }))
    }
}

impl EdgeList {
    fn graph(&self, orientation: Orientation) -> ListGraph {
        ListGraph::from_edges(self.n, orientation, self.edges.iter().cloned()).unwrap()
    }

    fn matrix(&self, orientation: Orientation) -> MatrixGraph {
        let mut g = MatrixGraph::new(self.n, orientation);
        for &(u, v) in self.edges.iter() {
            g.add_edge(VertexId(u), VertexId(v)).unwrap();
        }
        g
    }

    /// Adjacency without edge `skip_edge` and without the edges
    /// touching `skip_vertex`.
    fn plain(
        &self,
        directed: bool,
        skip_edge: Option<usize>,
        skip_vertex: Option<usize>,
    ) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.n];
        for (i, &(u, v)) in self.edges.iter().enumerate() {
            if Some(i) == skip_edge || Some(u) == skip_vertex || Some(v) == skip_vertex {
                continue;
            }
            adj[u].push(v);
            if !directed {
                adj[v].push(u)
            }
        }
        adj
    }
}

fn reach(adj: &[Vec<usize>], from: usize) -> Vec<bool> {
    let mut seen = vec![false; adj.len()];
    let mut stack = vec![from];
    seen[from] = true;
    while let Some(u) = stack.pop() {
        for &v in adj[u].iter() {
            if !seen[v] {
                seen[v] = true;
                stack.push(v)
            }
        }
    }
    seen
}

/// Connected components of an undirected adjacency, ignoring
/// `skip`.
fn count_components(adj: &[Vec<usize>], skip: Option<usize>) -> usize {
    let mut seen = vec![false; adj.len()];
    let mut count = 0;
    for v in 0..adj.len() {
        if seen[v] || Some(v) == skip {
            continue;
        }
        count += 1;
        for (w, r) in reach(adj, v).into_iter().enumerate() {
            seen[w] |= r
        }
    }
    count
}

/// Whether two labellings define the same partition.
fn same_partition(a: &[usize], b: &[usize]) -> bool {
    a.len() == b.len()
        && (0..a.len()).all(|u| (0..a.len()).all(|v| (a[u] == a[v]) == (b[u] == b[v])))
}

fn labels_in_range(p: &Partition) -> bool {
    p.labels.iter().all(|&l| l >= 1 && l <= p.count)
        && (1..=p.count).all(|c| p.labels.contains(&c))
}
