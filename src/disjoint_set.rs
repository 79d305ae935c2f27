use std::collections::TryReserveError;

/// Union-find forest over cell indices.
///
/// The forest does not know about owners: callers only union cells they have
/// checked to belong to the same player.
#[derive(Debug, PartialEq, Eq)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl Clone for DisjointSet {
    fn clone(&self) -> Self {
        DisjointSet {
            parent: self.parent.clone(),
            rank: self.rank.clone(),
        }
    }

    // Reuses the existing buffers, so snapshot and restore never allocate.
    fn clone_from(&mut self, source: &Self) {
        self.parent.clone_from(&source.parent);
        self.rank.clone_from(&source.rank);
    }
}

impl DisjointSet {
    /// `len` singleton sets.
    pub fn try_new(len: usize) -> Result<Self, TryReserveError> {
        let mut parent = Vec::new();
        parent.try_reserve_exact(len)?;
        parent.extend(0..len);

        let mut rank = Vec::new();
        rank.try_reserve_exact(len)?;
        rank.resize(len, 0);

        Ok(DisjointSet { parent, rank })
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of `x`'s set, compressing the path on the way.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }

        root
    }

    /// Merges the sets of `a` and `b` by rank. Returns false if they were
    /// already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }

        true
    }

    /// Detaches `x` into a fresh singleton.
    ///
    /// Only sound when every other member of `x`'s set is reset as well.
    pub fn reset(&mut self, x: usize) {
        self.parent[x] = x;
        self.rank[x] = 0;
    }
}
