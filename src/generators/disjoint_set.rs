use std::collections::HashMap;

use crate::maze::Coord;

/// Union-find over maze cells for Kruskal's cycle test.
///
/// Cells are mapped to dense indices into flat parent/rank arenas; `find`
/// path-compresses and `union` merges by rank. Calling `find` or `union` on a
/// cell never registered with `make_set` is a programmer error and panics.
pub struct DisjointSet {
    index: HashMap<Coord, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub fn new() -> Self {
        DisjointSet {
            index: HashMap::new(),
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }

    /// Registers `cell` as a fresh singleton set.
    ///
    /// # Panics
    /// If the cell was already registered.
    pub fn make_set(&mut self, cell: Coord) {
        let id = self.parent.len();
        if self.index.insert(cell, id).is_some() {
            panic!("cell {:?} registered twice", cell);
        }
        self.parent.push(id);
        self.rank.push(0);
    }

    /// The representative of the set containing `cell`; two cells are in the
    /// same set iff their representatives are equal.
    ///
    /// # Panics
    /// If the cell was never registered with `make_set`.
    pub fn find(&mut self, cell: Coord) -> usize {
        let id = self.id_of(cell);
        self.find_root(id)
    }

    /// Merges the sets containing `a` and `b`. Returns `false` (and leaves
    /// the forest untouched) when they are already unified.
    ///
    /// # Panics
    /// If either cell was never registered with `make_set`.
    pub fn union(&mut self, a: Coord, b: Coord) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_b] = root_a;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_a] = root_b;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }

    fn id_of(&self, cell: Coord) -> usize {
        match self.index.get(&cell) {
            Some(&id) => id,
            None => panic!("cell {:?} was never registered with make_set", cell),
        }
    }

    fn find_root(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find_root(self.parent[x]);
        }
        self.parent[x]
    }
}

impl Default for DisjointSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons_are_distinct() {
        let mut ds = DisjointSet::new();
        ds.make_set((0, 0));
        ds.make_set((0, 1));
        assert_ne!(ds.find((0, 0)), ds.find((0, 1)));
    }

    #[test]
    fn test_union_merges_and_reports() {
        let mut ds = DisjointSet::new();
        ds.make_set((0, 0));
        ds.make_set((0, 1));
        ds.make_set((0, 2));
        assert!(ds.union((0, 0), (0, 1)));
        assert!(ds.union((0, 1), (0, 2)));
        assert_eq!(ds.find((0, 0)), ds.find((0, 2)));
        // Already unified: reported as a no-op.
        assert!(!ds.union((0, 0), (0, 2)));
    }

    #[test]
    #[should_panic]
    fn test_find_unregistered_cell_panics() {
        let mut ds = DisjointSet::new();
        ds.find((3, 3));
    }

    #[test]
    #[should_panic]
    fn test_double_registration_panics() {
        let mut ds = DisjointSet::new();
        ds.make_set((1, 1));
        ds.make_set((1, 1));
    }
}
