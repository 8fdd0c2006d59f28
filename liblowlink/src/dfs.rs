//! Depth-first traversal with discovery times and low-link values.
//!
//! The walk keeps an explicit stack of `(vertex, next neighbor)`
//! frames instead of recursing, so a path-shaped graph with millions
//! of vertices only costs heap memory. When a frame runs out of
//! neighbors it is popped, the vertex is marked done, and its
//! low-link is propagated to its parent.
use crate::graph::{EdgeId, Graph, GraphError, Orientation, Snapshot, VertexId};
use std::cmp::min;

bitflags! {
    struct Flags: u8 {
        const VISITED = 2;
        const ACTIVE = 1;
    }
}

/// Result of a complete depth-first walk, covering every vertex.
#[derive(Debug, Clone)]
pub struct Traversal {
    /// Global visitation counter value at the first visit, starting
    /// at 0.
    pub discovery: Vec<usize>,
    /// Smallest discovery time reachable from the subtree of the
    /// vertex through at most one back-edge.
    pub low_link: Vec<usize>,
    /// Tree parent, and the edge the vertex was reached by. `None`
    /// for roots.
    pub parent: Vec<Option<(VertexId, EdgeId)>>,
    /// Index into `roots` of the tree containing the vertex.
    pub tree: Vec<usize>,
    pub roots: Vec<VertexId>,
    /// Vertices in the order they were completed.
    pub finish_order: Vec<VertexId>,
    children: Vec<usize>,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexId,
    next: usize,
    /// Whether the arc back to the parent has already been skipped
    /// (or doesn't need to be, for roots and directed graphs).
    parent_skipped: bool,
}

struct DfsContext<'a> {
    snapshot: &'a Snapshot,
    flags: Vec<Flags>,
    counter: usize,
    stack: Vec<Frame>,
    out: Traversal,
}

impl Traversal {
    /// Walk the whole graph, trying roots in vertex order.
    pub fn run<G: Graph>(graph: &G) -> Result<Traversal, GraphError> {
        let snapshot = Snapshot::new(graph)?;
        Ok(Self::over(&snapshot, &[]))
    }

    /// Walk the whole graph, trying roots in the order given by
    /// `roots` first, then the remaining vertices in vertex
    /// order. All roots are validated before the walk starts.
    pub fn run_with_roots<G: Graph, I: IntoIterator<Item = VertexId>>(
        graph: &G,
        roots: I,
    ) -> Result<Traversal, GraphError> {
        let snapshot = Snapshot::new(graph)?;
        let roots: Vec<VertexId> = roots.into_iter().collect();
        for &r in roots.iter() {
            snapshot.check_vertex(r)?
        }
        Ok(Self::over(&snapshot, &roots))
    }

    pub(crate) fn over(snapshot: &Snapshot, roots: &[VertexId]) -> Traversal {
        let n = snapshot.size();
        let mut cx = DfsContext {
            snapshot,
            flags: vec![Flags::empty(); n],
            counter: 0,
            stack: Vec::new(),
            out: Traversal {
                discovery: vec![0; n],
                low_link: vec![0; n],
                parent: vec![None; n],
                tree: vec![0; n],
                roots: Vec::new(),
                finish_order: Vec::with_capacity(n),
                children: vec![0; n],
            },
        };
        for r in roots.iter().copied().chain((0..n).map(VertexId)) {
            if !cx.flags[r.0].contains(Flags::VISITED) {
                cx.walk(r)
            }
        }
        debug!(
            "traversal: {} vertices, {} trees",
            n,
            cx.out.roots.len()
        );
        cx.out
    }

    pub fn size(&self) -> usize {
        self.discovery.len()
    }

    /// Number of DFS-tree children of `v`.
    pub fn children(&self, v: VertexId) -> usize {
        self.children[v.0]
    }

    pub fn is_root(&self, v: VertexId) -> bool {
        self.parent[v.0].is_none()
    }

    pub fn tree_count(&self) -> usize {
        self.roots.len()
    }

    /// Vertices sorted by discovery time. Every parent comes before
    /// its children.
    pub fn discovery_order(&self) -> Vec<VertexId> {
        let mut order = vec![VertexId(0); self.size()];
        for (v, &d) in self.discovery.iter().enumerate() {
            order[d] = VertexId(v)
        }
        order
    }
}

impl<'a> DfsContext<'a> {
    fn enter(&mut self, v: VertexId, parent: Option<(VertexId, EdgeId)>, tree: usize) {
        let t = self.counter;
        self.counter += 1;
        trace!("enter {:?} at {}, parent {:?}", v, t, parent);
        self.out.discovery[v.0] = t;
        self.out.low_link[v.0] = t;
        self.out.parent[v.0] = parent;
        self.out.tree[v.0] = tree;
        self.flags[v.0] = Flags::VISITED | Flags::ACTIVE;
        self.stack.push(Frame {
            vertex: v,
            next: 0,
            parent_skipped: parent.is_none()
                || self.snapshot.orientation() == Orientation::Directed,
        });
    }

    fn walk(&mut self, root: VertexId) {
        let tree = self.out.roots.len();
        self.out.roots.push(root);
        self.enter(root, None, tree);
        while let Some(top) = self.stack.last_mut() {
            let Frame {
                vertex: v,
                next,
                parent_skipped,
            } = *top;
            if next < self.snapshot.degree(v) {
                top.next += 1;
                let arc = self.snapshot.arc(v, next);
                if !parent_skipped {
                    if let Some((_, e)) = self.out.parent[v.0] {
                        if e == arc.edge {
                            // Only this exact arc is the tree edge, a
                            // parallel copy has another identity.
                            top.parent_skipped = true;
                            continue;
                        }
                    }
                }
                let w = arc.target;
                if !self.flags[w.0].contains(Flags::VISITED) {
                    self.out.children[v.0] += 1;
                    self.enter(w, Some((v, arc.edge)), tree);
                } else if self.flags[w.0].contains(Flags::ACTIVE) {
                    self.out.low_link[v.0] = min(self.out.low_link[v.0], self.out.discovery[w.0]);
                }
            } else {
                self.stack.pop();
                self.flags[v.0].remove(Flags::ACTIVE);
                self.out.finish_order.push(v);
                trace!("finish {:?}, low {}", v, self.out.low_link[v.0]);
                if let Some((p, _)) = self.out.parent[v.0] {
                    self.out.low_link[p.0] = min(self.out.low_link[p.0], self.out.low_link[v.0]);
                }
            }
        }
    }
}
