//! Disjoint-set (Union-Find) data structure.
//!
//! Maintains a collection of disjoint sets over elements `0..n` with
//! near-constant-time union and find operations, backed by flat
//! `parent`/`size` arrays rather than pointer-based tree nodes.
//!
//! # Algorithm
//!
//! Uses **path halving** during `find` (every visited node's parent is
//! redirected to its grandparent) and **union by size** during `union`
//! (the smaller tree's root is attached under the larger tree's root).
//! Either technique alone bounds tree height by O(log n); together the
//! amortized cost per operation is effectively constant for any
//! practical input size.
//!
//! `find` is an iterative loop, not a recursion, so deep parent chains
//! never translate into call-stack depth.
//!
//! # References
//!
//! - Sedgewick & Wayne (2011), *Algorithms*, 4th ed., §1.5
//! - Tarjan & van Leeuwen (1984), "Worst-Case Analysis of Set Union Algorithms"

/// Disjoint-set forest with path halving and union by size.
///
/// # Examples
/// ```
/// use percolation::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// assert_eq!(uf.component_count(), 5);
///
/// uf.union(0, 1);
/// uf.union(2, 3);
/// assert_eq!(uf.component_count(), 3);
///
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(0, 2));
///
/// uf.union(1, 3);
/// assert!(uf.connected(0, 2)); // transitivity
/// assert_eq!(uf.component_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates a new Union-Find with `n` disjoint singleton sets `{0}, {1}, ..., {n-1}`.
    ///
    /// # Complexity
    /// O(n)
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Finds the representative (root) of the set containing `x`.
    ///
    /// Applies **path halving** while climbing: each visited node's
    /// parent pointer is redirected to its grandparent, so the chain
    /// shrinks on every query. Terminates at the fixed point where
    /// `parent[x] == x`.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets containing `p` and `q`.
    ///
    /// Uses **union by size**: the root of the smaller tree is attached
    /// under the root of the larger tree, and the surviving root's size
    /// absorbs the other's. When both trees have equal size, `q`'s root
    /// is attached under `p`'s root; the tie-break is arbitrary but
    /// deterministic, so tree shapes are reproducible.
    ///
    /// # Returns
    /// `true` if `p` and `q` were in different sets (and are now merged),
    /// `false` if they were already in the same set.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    ///
    /// # Panics
    /// Panics if `p >= len()` or `q >= len()`.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let root_p = self.find(p);
        let root_q = self.find(q);

        if root_p == root_q {
            return false;
        }

        if self.size[root_p] < self.size[root_q] {
            self.parent[root_p] = root_q;
            self.size[root_q] += self.size[root_p];
        } else {
            self.parent[root_q] = root_p;
            self.size[root_p] += self.size[root_q];
        }

        self.components -= 1;
        true
    }

    /// Returns `true` if `p` and `q` are in the same set.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Returns the number of disjoint sets.
    ///
    /// # Complexity
    /// O(1)
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Returns the size of the set containing `x`.
    ///
    /// # Complexity
    /// Amortized O(α(n))
    pub fn component_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }
}
