//! # Disjoint Set
//!
//! Array-backed union-find over `0..n`, used for Kruskal spanning trees.

/// Union-find forest with path compression and union by rank.
///
/// # Examples
///
/// ```
/// use delve::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.union(1, 0));
/// assert!(!sets.connected(0, 2));
/// ```
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `element`'s set.
    ///
    /// Panics if `element` is out of range.
    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = element;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` if they were already in the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        true
    }

    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons() {
        let mut sets = DisjointSet::new(3);
        assert_eq!(sets.len(), 3);
        for i in 0..3 {
            assert_eq!(sets.find(i), i);
        }
        assert!(DisjointSet::new(0).is_empty());
    }

    #[test]
    fn test_union_is_transitive() {
        let mut sets = DisjointSet::new(6);
        assert!(sets.union(0, 1));
        assert!(sets.union(1, 2));
        assert!(sets.union(4, 5));

        assert!(sets.connected(0, 2));
        assert!(sets.connected(5, 4));
        assert!(!sets.connected(2, 4));
        assert!(!sets.connected(3, 0));

        assert!(sets.union(2, 5));
        assert!(sets.connected(0, 4));
        assert!(!sets.union(1, 4));
    }

    #[test]
    fn test_long_chain_compresses() {
        let mut sets = DisjointSet::new(100);
        for i in 1..100 {
            sets.union(i - 1, i);
        }
        let root = sets.find(99);
        assert!((0..100).all(|i| sets.find(i) == root));
    }
}
