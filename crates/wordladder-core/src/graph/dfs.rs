use crate::graph::adjacency::WordGraph;
use crate::graph::types::{DepthMap, Ladder, LadderSet, Word};

/// Neighbours of `word`, empty when it is not a vertex.
fn neighbors_of<'g>(graph: &'g WordGraph, word: &str) -> impl Iterator<Item = &'g Word> + 'g {
    graph.neighbors(word).into_iter().flatten()
}

/// Enumerate every path from `from` to `to` that steps from depth `d` to
/// depth `d + 1` at each edge, i.e. every shortest ladder.
///
/// Uses an explicit stack of `(depth, neighbour iterator)` frames in place
/// of recursion; the path buffer is pushed when a frame is entered and
/// popped when it is exhausted. Words missing from `depth` are never
/// entered. The result is sorted.
pub fn dfs_find_paths(
    graph: &WordGraph,
    from: &str,
    to: &str,
    depth: &DepthMap<'_>,
) -> LadderSet {
    let mut ladders = LadderSet::new();
    let Some(&from_depth) = depth.get(from) else {
        return ladders;
    };

    let mut path: Vec<&str> = vec![from];
    if from == to {
        ladders.push(to_ladder(&path));
        return ladders;
    }

    let mut stack = vec![(from_depth, neighbors_of(graph, from))];

    while let Some((current_depth, neighbors)) = stack.last_mut() {
        let next_depth = *current_depth + 1;
        let Some(next) = neighbors.next() else {
            stack.pop();
            path.pop();
            continue;
        };

        if depth.get(next.as_str()) != Some(&next_depth) {
            continue;
        }

        path.push(next);
        if next.as_str() == to {
            ladders.push(to_ladder(&path));
            path.pop();
        } else {
            stack.push((next_depth, neighbors_of(graph, next)));
        }
    }

    ladders.sort();
    ladders
}

fn to_ladder(path: &[&str]) -> Ladder {
    path.iter().map(|word| word.to_string()).collect()
}
