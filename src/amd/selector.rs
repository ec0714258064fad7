/// Bucket queue of variables keyed by approximate degree.
///
/// Each bucket is a doubly linked list threaded through per-node
/// `next`/`prev` arrays.  Insertion is at the front of a bucket, so
/// among variables of equal degree the most recently inserted one is
/// selected first.
#[derive(Debug, Clone, Default)]
pub(crate) struct DegreeLists {
    head: Vec<Option<usize>>,
    next: Vec<Option<usize>>,
    prev: Vec<Option<usize>>,
    // bucket currently holding each node
    key: Vec<Option<usize>>,
    // no bucket below this one is occupied
    mindeg: usize,
    len: usize,
}

impl DegreeLists {
    /// Empty queue for nodes `0..n` with degrees in `0..=n`
    pub fn new(n: usize) -> Self {
        DegreeLists {
            head: vec![None; n + 1],
            next: vec![None; n],
            prev: vec![None; n],
            key: vec![None; n],
            mindeg: n,
            len: 0,
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, i: usize) -> bool {
        self.key[i].is_some()
    }

    /// Places `i` at the front of bucket `deg`.
    pub fn insert(&mut self, i: usize, deg: usize) {
        debug_assert!(!self.contains(i));
        let deg = deg.min(self.head.len() - 1);
        let inext = self.head[deg];
        if let Some(inext) = inext {
            self.prev[inext] = Some(i);
        }
        self.next[i] = inext;
        self.prev[i] = None;
        self.head[deg] = Some(i);
        self.key[i] = Some(deg);
        self.mindeg = self.mindeg.min(deg);
        self.len += 1;
    }

    /// Unlinks `i` from its bucket.  No effect if `i` is not queued.
    pub fn remove(&mut self, i: usize) {
        let Some(deg) = self.key[i].take() else {
            return;
        };
        let (inext, ilast) = (self.next[i], self.prev[i]);
        if let Some(inext) = inext {
            self.prev[inext] = ilast;
        }
        match ilast {
            Some(ilast) => self.next[ilast] = inext,
            None => self.head[deg] = inext,
        }
        self.next[i] = None;
        self.prev[i] = None;
        self.len -= 1;
    }

    /// Removes and returns the front of the lowest occupied bucket.
    pub fn select_min(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let deg = (self.mindeg..self.head.len()).find(|&d| self.head[d].is_some())?;
        self.mindeg = deg;
        let me = self.head[deg]?;
        self.remove(me);
        Some(me)
    }
}
