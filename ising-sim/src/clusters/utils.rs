use crate::geometry::{Lattice, N_DIRECTIONS};

// --- Union-Find ---

#[inline]
pub(super) fn find(parent: &mut [u32], mut x: u32) -> u32 {
    while parent[x as usize] != x {
        parent[x as usize] = parent[parent[x as usize] as usize];
        x = parent[x as usize];
    }
    x
}

#[inline]
pub(super) fn union(parent: &mut [u32], rank: &mut [u8], x: u32, y: u32) {
    let rx = find(parent, x);
    let ry = find(parent, y);
    if rx == ry {
        return;
    }
    if rank[rx as usize] < rank[ry as usize] {
        parent[rx as usize] = ry;
    } else {
        parent[ry as usize] = rx;
        if rank[rx as usize] == rank[ry as usize] {
            rank[rx as usize] += 1;
        }
    }
}

/// Depth-first growth from `seed`. `should_add(site, neighbor)` is asked once
/// per bond from a cluster site to a not-yet-included neighbor.
/// `in_cluster` must be all-false and `stack` empty on entry.
/// Returns the cluster size.
#[inline]
pub(super) fn grow_cluster(
    lattice: &Lattice,
    seed: usize,
    in_cluster: &mut [bool],
    stack: &mut Vec<usize>,
    mut should_add: impl FnMut(usize, usize) -> bool,
) -> usize {
    in_cluster[seed] = true;
    stack.push(seed);
    let mut size = 1;

    while let Some(site) = stack.pop() {
        for nb in lattice.neighbors(site) {
            if !in_cluster[nb] && should_add(site, nb) {
                in_cluster[nb] = true;
                stack.push(nb);
                size += 1;
            }
        }
    }
    size
}

/// Activate forward bonds via union-find and return the flattened root of
/// every site. `should_bond(site, neighbor)` is asked once per forward bond.
pub(super) fn uf_roots(
    lattice: &Lattice,
    mut should_bond: impl FnMut(usize, usize) -> bool,
) -> Vec<u32> {
    let n_spins = lattice.n_spins;
    let mut parent: Vec<u32> = (0..n_spins as u32).collect();
    let mut rank = vec![0u8; n_spins];

    for i in 0..n_spins {
        for d in 0..N_DIRECTIONS {
            let j = lattice.neighbor(i, d, true);
            if should_bond(i, j) {
                union(&mut parent, &mut rank, i as u32, j as u32);
            }
        }
    }

    for i in 0..n_spins {
        parent[i] = find(&mut parent, i as u32);
    }
    parent
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // 4×4 periodic lattice:
    //
    //    0  1  2  3
    //    4  5  6  7
    //    8  9 10 11
    //   12 13 14 15
    //
    // Marked sites {0, 1, 3, 12, 10}: 0-1, 0-3 (wrap) and 0-12 (wrap) are
    // adjacent, 10 is isolated from them.
    fn marked() -> HashSet<usize> {
        [0, 1, 3, 12, 10].into_iter().collect()
    }

    #[test]
    fn test_grow_cluster_follows_wrapped_bonds() {
        let lattice = Lattice::new(4).unwrap();
        let marked = marked();
        let mut in_cluster = vec![false; 16];
        let mut stack = Vec::new();

        let size = grow_cluster(&lattice, 1, &mut in_cluster, &mut stack, |_, nb| {
            marked.contains(&nb)
        });
        let cluster: HashSet<usize> = (0..16).filter(|&i| in_cluster[i]).collect();
        assert_eq!(size, 4);
        assert_eq!(cluster, [0, 1, 3, 12].into_iter().collect());
        assert!(stack.is_empty());
    }

    #[test]
    fn test_grow_cluster_single_site() {
        let lattice = Lattice::new(4).unwrap();
        let mut in_cluster = vec![false; 16];
        let mut stack = Vec::new();
        let size = grow_cluster(&lattice, 10, &mut in_cluster, &mut stack, |_, _| false);
        assert_eq!(size, 1);
        assert_eq!(in_cluster.iter().filter(|&&b| b).count(), 1);
        assert!(in_cluster[10]);
    }

    #[test]
    fn test_grow_cluster_asks_each_new_neighbor() {
        // Accept everything: the whole torus is reached and every site is
        // counted once.
        let lattice = Lattice::new(5).unwrap();
        let mut in_cluster = vec![false; 25];
        let mut stack = Vec::new();
        let size = grow_cluster(&lattice, 7, &mut in_cluster, &mut stack, |_, _| true);
        assert_eq!(size, 25);
        assert!(in_cluster.iter().all(|&b| b));
    }

    #[test]
    fn test_uf_roots_group_marked_sites() {
        let lattice = Lattice::new(4).unwrap();
        let marked = marked();
        let roots = uf_roots(&lattice, |i, j| marked.contains(&i) && marked.contains(&j));

        let root_a = roots[0];
        for s in [0, 1, 3, 12] {
            assert_eq!(roots[s], root_a, "site {s} should join cluster A");
        }
        assert_ne!(roots[10], root_a);

        let clustered: HashSet<usize> = [0, 1, 3, 12].into_iter().collect();
        for i in 0..16 {
            if !clustered.contains(&i) {
                assert_eq!(roots[i], i as u32, "site {i} should be a singleton");
            }
        }
    }
}
