use super::Partition;
use crate::graph::{expect_orientation, Graph, GraphError, ListGraph, Orientation, VertexId};
use crate::HashSet;

/// Contract every component of `partition` to a single vertex
/// (component `c` becoming vertex `c - 1`). There is one arc per
/// pair of distinct components joined by at least one arc of
/// `graph`, numbered in the order they are first met. The result is
/// acyclic when `partition` is a decomposition of `graph`.
pub fn condensation<G: Graph>(graph: &G, partition: &Partition) -> Result<ListGraph, GraphError> {
    expect_orientation(graph, Orientation::Directed)?;
    partition.check(graph.size())?;
    let mut dag = ListGraph::directed(partition.count);
    let mut seen = HashSet::default();
    for u in 0..graph.size() {
        let cu = partition.labels[u];
        for a in graph.neighbors(VertexId(u))? {
            let ca = partition.labels[a.target.0];
            if cu != ca && seen.insert((cu, ca)) {
                dag.add_edge(VertexId(cu - 1), VertexId(ca - 1))?;
            }
        }
    }
    debug!(
        "condensation: {} components, {} arcs",
        dag.size(),
        dag.edge_count()
    );
    Ok(dag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scc::kosaraju;

    #[test]
    fn collapses_cycles() {
        let g = ListGraph::from_edges(
            5,
            Orientation::Directed,
            vec![(0, 1), (1, 0), (1, 2), (0, 2), (2, 3), (3, 2), (3, 4)],
        )
        .unwrap();
        let p = kosaraju(&g).unwrap();
        assert_eq!(p.count, 3);
        let dag = condensation(&g, &p).unwrap();
        assert_eq!(dag.size(), 3);
        assert_eq!(dag.edge_count(), 2);
        let c = |v: usize| VertexId(p.labels[v] - 1);
        let out: Vec<_> = dag.neighbors(c(0)).unwrap().map(|a| a.target).collect();
        assert_eq!(out, vec![c(2)]);
        let out: Vec<_> = dag.neighbors(c(2)).unwrap().map(|a| a.target).collect();
        assert_eq!(out, vec![c(4)]);
    }

    #[test]
    fn mismatched_partition() {
        let g = ListGraph::directed(3);
        let p = Partition {
            labels: vec![1, 1],
            count: 1,
        };
        assert_eq!(
            condensation(&g, &p).unwrap_err(),
            GraphError::PartitionMismatch {
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn labels_out_of_range() {
        let g = ListGraph::from_edges(2, Orientation::Directed, vec![(0, 1)]).unwrap();
        let zero = Partition {
            labels: vec![0, 1],
            count: 1,
        };
        assert_eq!(
            condensation(&g, &zero).unwrap_err(),
            GraphError::InvalidLabel {
                vertex: VertexId(0),
                label: 0,
                count: 1
            }
        );
        let above = Partition {
            labels: vec![1, 3],
            count: 2,
        };
        assert_eq!(
            condensation(&g, &above).unwrap_err(),
            GraphError::InvalidLabel {
                vertex: VertexId(1),
                label: 3,
                count: 2
            }
        );
        // Neither is accessible through the partition itself.
        assert_eq!(zero.classes(), vec![vec![VertexId(1)]]);
        assert_eq!(above.label(VertexId(2)), None);
        assert!(!above.same(VertexId(0), VertexId(2)));
    }
}
