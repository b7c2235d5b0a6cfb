use std::collections::VecDeque;

use crate::graph::adjacency::WordGraph;
use crate::graph::types::DepthMap;

/// Breadth-first search from `from`, recording the hop depth of every word
/// reached, until `to` is first discovered.
///
/// `depth` is cleared and seeded with `{from: 0}`. Returns `true` as soon as
/// `to` is reached through a newly discovered neighbour; the rest of the
/// frontier is left unexplored. Returns `false` if the queue drains first,
/// including when `from` is not a vertex of `graph`.
pub fn bfs_find_depth<'g>(
    graph: &'g WordGraph,
    from: &'g str,
    to: &str,
    depth: &mut DepthMap<'g>,
) -> bool {
    depth.clear();
    depth.insert(from, 0);

    let mut queue: VecDeque<(&'g str, usize)> = VecDeque::new();
    queue.push_back((from, 0));

    while let Some((current, current_depth)) = queue.pop_front() {
        let Some(neighbors) = graph.neighbors(current) else {
            continue;
        };

        for neighbor in neighbors {
            if depth.contains_key(neighbor.as_str()) {
                continue;
            }
            depth.insert(neighbor.as_str(), current_depth + 1);
            queue.push_back((neighbor.as_str(), current_depth + 1));

            if neighbor.as_str() == to {
                tracing::trace!(visited = depth.len(), depth = current_depth + 1, "target reached");
                return true;
            }
        }
    }

    tracing::trace!(visited = depth.len(), "target unreachable");
    false
}
