use super::Partition;
use crate::graph::{expect_orientation, Graph, GraphError, Orientation, Snapshot, VertexId};
use std::cmp::min;

bitflags! {
    struct Flags: u8 {
        const VISITED = 2;
        const ONSTACK = 1;
    }
}

/// Single-pass decomposition. Components are labelled in the order
/// they are completed, which is a reverse topological order of the
/// condensation.
pub fn tarjan<G: Graph>(graph: &G) -> Result<Partition, GraphError> {
    expect_orientation(graph, Orientation::Directed)?;
    let g = Snapshot::new(graph)?;
    let n = g.size();
    let mut flags = vec![Flags::empty(); n];
    let mut index = vec![0; n];
    let mut lowlink = vec![0; n];
    let mut labels = vec![0; n];
    let mut count = 0;

    let mut counter = 0;
    let mut stack = Vec::new();
    let mut call_stack = Vec::new();
    for root in 0..n {
        if flags[root].contains(Flags::VISITED) {
            continue;
        }
        call_stack.push((VertexId(root), 0, true));
        'recursion: while let Some((n_l, i, first_visit)) = call_stack.pop() {
            let mut i = i;
            if first_visit {
                index[n_l.0] = counter;
                lowlink[n_l.0] = counter;
                flags[n_l.0] |= Flags::ONSTACK | Flags::VISITED;
                stack.push(n_l);
                counter += 1;
            } else {
                let n_child = g.arc(n_l, i).target;
                lowlink[n_l.0] = min(lowlink[n_l.0], lowlink[n_child.0]);
                i += 1
            }

            for j in i..g.degree(n_l) {
                let n_child = g.arc(n_l, j).target;
                if !flags[n_child.0].contains(Flags::VISITED) {
                    call_stack.push((n_l, j, false));
                    call_stack.push((n_child, 0, true));
                    continue 'recursion;
                } else if flags[n_child.0].contains(Flags::ONSTACK) {
                    lowlink[n_l.0] = min(lowlink[n_l.0], index[n_child.0])
                }
            }

            if index[n_l.0] == lowlink[n_l.0] {
                count += 1;
                while let Some(n_p) = stack.pop() {
                    labels[n_p.0] = count;
                    flags[n_p.0] ^= Flags::ONSTACK;
                    if n_p == n_l {
                        break;
                    }
                }
            }
        }
    }
    debug!("tarjan: {} components", count);
    Ok(Partition { labels, count })
}
