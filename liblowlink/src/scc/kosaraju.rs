use super::Partition;
use crate::dfs::Traversal;
use crate::graph::{expect_orientation, Graph, GraphError, Orientation, Snapshot};

/// Two-pass decomposition. The first walk gives a finish order; the
/// second walks the reversed graph, taking roots in reverse finish
/// order, and each of its trees is one component. Labels follow the
/// order of the second walk.
pub fn kosaraju<G: Graph>(graph: &G) -> Result<Partition, GraphError> {
    expect_orientation(graph, Orientation::Directed)?;
    let first = Traversal::run(graph)?;
    let reversed = Snapshot::new(&graph.reversed()?)?;
    let mut roots = first.finish_order;
    roots.reverse();
    let second = Traversal::over(&reversed, &roots);
    let p = Partition {
        labels: second.tree.iter().map(|t| t + 1).collect(),
        count: second.tree_count(),
    };
    debug!("kosaraju: {} components", p.count);
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ListGraph;

    #[test]
    fn cycle_with_tail() {
        let g =
            ListGraph::from_edges(4, Orientation::Directed, vec![(0, 1), (1, 2), (2, 0), (2, 3)])
                .unwrap();
        let p = kosaraju(&g).unwrap();
        assert_eq!(p.count, 2);
        assert_eq!(p.labels, vec![1, 1, 1, 2]);
    }

    #[test]
    fn dag_is_all_singletons_in_topological_order() {
        let g = ListGraph::from_edges(3, Orientation::Directed, vec![(2, 1), (1, 0)]).unwrap();
        let p = kosaraju(&g).unwrap();
        // Sources come first in the second walk.
        assert_eq!(p.labels, vec![3, 2, 1]);
    }

    #[test]
    fn undirected_rejected() {
        let g = ListGraph::undirected(1);
        assert!(kosaraju(&g).is_err());
    }
}
