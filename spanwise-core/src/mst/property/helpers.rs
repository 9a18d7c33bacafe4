//! Shared helpers for the MST property suite.

/// Path-compressing find over a parent array.
pub(super) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}

/// Labels every vertex `1..=vertex_count` with the root of its component.
pub(super) fn component_roots(
    vertex_count: usize,
    pairs: impl IntoIterator<Item = (usize, usize)>,
) -> Vec<usize> {
    let mut parent: Vec<usize> = (0..=vertex_count).collect();
    for (left, right) in pairs {
        let left_root = find_root(&mut parent, left);
        let right_root = find_root(&mut parent, right);
        if left_root != right_root {
            parent[right_root] = left_root;
        }
    }
    (0..=vertex_count)
        .map(|vertex| find_root(&mut parent, vertex))
        .collect()
}

/// Counts the connected components over `1..=vertex_count`.
pub(super) fn count_components(
    vertex_count: usize,
    pairs: impl IntoIterator<Item = (usize, usize)>,
) -> usize {
    let roots = component_roots(vertex_count, pairs);
    (1..=vertex_count)
        .filter(|&vertex| roots[vertex] == vertex)
        .count()
}
