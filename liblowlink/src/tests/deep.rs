use super::*;

const N: usize = 200_000;

// Long enough to overflow the native stack of a recursive walk.
#[test]
fn long_undirected_path() {
    env_logger::try_init().unwrap_or(());
    let g = ListGraph::from_edges(N, Orientation::Undirected, (1..N).map(|v| (v - 1, v))).unwrap();
    let a = articulation(&g).unwrap();
    assert_eq!(a.bridges.len(), N - 1);
    assert_eq!(a.cut_vertices.len(), N - 2);
    assert!(!a.is_cut_vertex(VertexId(0)));
    assert!(!a.is_cut_vertex(VertexId(N - 1)));
    assert_eq!(two_edge_components(&g).unwrap().count, N);
}

#[test]
fn long_directed_cycle() {
    env_logger::try_init().unwrap_or(());
    let g = ListGraph::from_edges(N, Orientation::Directed, (0..N).map(|v| (v, (v + 1) % N)))
        .unwrap();
    assert_eq!(kosaraju(&g).unwrap().count, 1);
    assert_eq!(tarjan(&g).unwrap().count, 1);
}

#[test]
fn long_directed_path() {
    let g = ListGraph::from_edges(N, Orientation::Directed, (1..N).map(|v| (v - 1, v))).unwrap();
    let p = kosaraju(&g).unwrap();
    assert_eq!(p.count, N);
    // The source is the first root of the second walk.
    assert_eq!(p.label(VertexId(0)), Some(1));
    assert_eq!(p.label(VertexId(N - 1)), Some(N));
    let q = tarjan(&g).unwrap();
    assert_eq!(q.count, N);
    assert_eq!(q.label(VertexId(N - 1)), Some(1));
}
