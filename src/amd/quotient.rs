//! Quotient graph of the partially eliminated matrix.
//!
//! Nodes `0..n` live in a single arena and change role as the
//! elimination proceeds.  A variable's list holds its adjacent
//! elements first (`elen` of them) followed by its remaining direct
//! neighbours.  An element's list holds its boundary variables.
//! Lists of nodes that stop participating are dropped, so the arena
//! never needs compacting.
//!
//! Weights are signed: a variable or element being assembled during
//! the current pivot step is marked by a negated `nv`, and the `w`
//! array doubles as a scratch set using the `wflg` stamp.

use super::dense::DenseNodes;
use std::cmp::min;

/// Role of a node in the quotient graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeStatus {
    /// uneliminated (principal) variable
    Variable,
    /// element still present in the graph
    Element,
    /// element absorbed into the element given by its parent
    Absorbed,
    /// variable merged into its parent supervariable, or eliminated
    /// together with the pivot that is its parent
    Merged,
    /// variable deferred to the end of the ordering
    Dense,
}

/// Running totals of the structural events of an elimination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct EliminationCounters {
    pub supervariables: usize,
    pub mass_eliminated: usize,
    pub elements: usize,
    pub absorbed: usize,
    pub aggressive: usize,
}

/// Outcome of eliminating one pivot
#[derive(Debug, Clone)]
pub(crate) struct Pivot {
    pub me: usize,
    /// variables eliminated in this step, including mass eliminations
    pub npiv: usize,
    /// weight of the new element's boundary
    pub degme: usize,
    /// variables that were taken out of the degree lists
    pub removed: Vec<usize>,
    /// `(variable, new degree)` to reinsert, in order
    pub updates: Vec<(usize, usize)>,
}

/// Parent links, weights and front sizes after the elimination
#[derive(Debug, Clone, Default)]
pub(crate) struct AssemblyTree {
    pub parent: Vec<Option<usize>>,
    /// number of variables each principal node stands for
    pub nv: Vec<usize>,
    pub fsize: Vec<usize>,
    pub status: Vec<NodeStatus>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct QuotientGraph {
    n: usize,
    adj: Vec<Vec<usize>>,
    elen: Vec<usize>,
    nv: Vec<isize>,
    degree: Vec<usize>,
    status: Vec<NodeStatus>,
    parent: Vec<Option<usize>>,
    fsize: Vec<usize>,
    // number of variable lists an element appears in
    refs: Vec<usize>,
    w: Vec<isize>,
    wflg: isize,
    wbig: isize,
    lemax: usize,
    nel: usize,
    hash_key: Vec<usize>,
    buckets: Vec<Vec<usize>>,
    aggressive: bool,
    pub counters: EliminationCounters,
}

impl QuotientGraph {
    /// Builds the graph from the adjacency of A + A'.
    ///
    /// Returns the graph and the variables to place in the degree
    /// lists, in insertion order, with their initial degrees.
    pub fn new(
        adjacency: Vec<Vec<usize>>,
        dense: &DenseNodes,
        aggressive: bool,
    ) -> (Self, Vec<(usize, usize)>) {
        let n = adjacency.len();
        let mut g = QuotientGraph {
            n,
            degree: adjacency.iter().map(|l| l.len()).collect(),
            adj: adjacency,
            elen: vec![0; n],
            nv: vec![1; n],
            status: vec![NodeStatus::Variable; n],
            parent: vec![None; n],
            fsize: vec![0; n],
            refs: vec![0; n],
            w: vec![1; n],
            wflg: 0,
            wbig: isize::MAX - n as isize,
            lemax: 0,
            nel: 0,
            hash_key: vec![0; n],
            buckets: vec![Vec::new(); n],
            aggressive,
            counters: EliminationCounters::default(),
        };

        for &i in &dense.nodes {
            g.nv[i] = 0;
            g.status[i] = NodeStatus::Dense;
            g.adj[i] = Vec::new();
            g.nel += 1;
        }

        let mut initial = Vec::with_capacity(n - dense.count());
        for i in 0..n {
            if g.status[i] == NodeStatus::Dense {
                continue;
            }
            if g.degree[i] == 0 {
                // isolated: an element of its own, and a tree root
                g.status[i] = NodeStatus::Element;
                g.fsize[i] = 1;
                g.w[i] = 0;
                g.nel += 1;
            } else {
                initial.push((i, g.degree[i]));
            }
        }

        g.wflg = g.clear_flag(0);
        (g, initial)
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// number of variables eliminated so far, dense ones included
    pub fn eliminated(&self) -> usize {
        self.nel
    }

    #[cfg(test)]
    pub fn status(&self, i: usize) -> NodeStatus {
        self.status[i]
    }

    /// variables represented by principal variable `i`
    #[cfg(test)]
    pub fn weight(&self, i: usize) -> usize {
        self.nv[i].max(0) as usize
    }

    /// number of variables that list element `e` as a neighbour
    #[cfg(test)]
    pub fn references(&self, e: usize) -> usize {
        self.refs[e]
    }

    /// Upper bound on the external degree of active variable `v`.
    ///
    /// Kept current by [`eliminate`](QuotientGraph::eliminate) using
    /// element boundary sizes only.
    #[cfg(test)]
    pub fn approximate_external_degree(&self, v: usize) -> usize {
        debug_assert_eq!(self.status[v], NodeStatus::Variable);
        self.degree[v]
    }

    fn is_live_element(&self, e: usize) -> bool {
        self.status[e] == NodeStatus::Element && self.w[e] != 0
    }

    // resets the marks once the stamp grows too large
    fn clear_flag(&mut self, wflg: isize) -> isize {
        if wflg < 2 || wflg >= self.wbig {
            for x in self.w.iter_mut().filter(|x| **x != 0) {
                *x = 1;
            }
            2
        } else {
            wflg
        }
    }

    // Drops one variable's reference to element e.  An element that no
    // variable refers to any more is gone.
    fn release(&mut self, e: usize) {
        assert!(self.refs[e] > 0, "element {} released too often", e);
        self.refs[e] -= 1;
        if self.refs[e] == 0 && self.status[e] == NodeStatus::Element {
            self.w[e] = 0;
            self.adj[e] = Vec::new();
        }
    }

    // drops every element reference held by variable i's list
    fn release_list(&mut self, i: usize) {
        let list = std::mem::take(&mut self.adj[i]);
        for &e in &list[..self.elen[i]] {
            self.release(e);
        }
    }

    fn absorb(&mut self, e: usize, into: usize) {
        self.parent[e] = Some(into);
        self.w[e] = 0;
        self.status[e] = NodeStatus::Absorbed;
        self.adj[e] = Vec::new();
        self.counters.absorbed += 1;
    }

    /// Eliminates variable `me`, turning it into an element.
    pub fn eliminate(&mut self, me: usize) -> Pivot {
        assert_eq!(self.status[me], NodeStatus::Variable);
        assert!(self.nv[me] > 0);

        let elenme = self.elen[me];
        let mut nvpiv = self.nv[me];
        self.nel += nvpiv as usize;
        self.nv[me] = -nvpiv;
        self.status[me] = NodeStatus::Element;
        self.counters.elements += 1;

        // ---- construct the new element --------------------------------
        // boundary = union of the boundaries of me's elements and me's
        // own variables.  Gathered variables are marked by negating nv.
        let mut degme: isize = 0;
        let mut lme: Vec<usize> = Vec::new();
        let list = std::mem::take(&mut self.adj[me]);
        let (elements, variables) = list.split_at(elenme);

        for &e in elements {
            debug_assert!(self.is_live_element(e));
            let boundary = std::mem::take(&mut self.adj[e]);
            for &i in &boundary {
                let nvi = self.nv[i];
                if nvi > 0 {
                    degme += nvi;
                    self.nv[i] = -nvi;
                    lme.push(i);
                }
            }
            self.absorb(e, me);
            self.release(e);
        }
        for &i in variables {
            let nvi = self.nv[i];
            if nvi > 0 {
                degme += nvi;
                self.nv[i] = -nvi;
                lme.push(i);
            }
        }
        self.degree[me] = degme as usize;
        let removed = lme.clone();

        self.wflg = self.clear_flag(self.wflg);

        // ---- |Le \ Lme| for every element adjacent to the boundary -----
        // w[e] - wflg ends up as the weight of e's boundary outside Lme
        for &i in &lme {
            let eln = self.elen[i];
            if eln == 0 {
                continue;
            }
            let nvi = -self.nv[i];
            let wnvi = self.wflg - nvi;
            for &e in &self.adj[i][..eln] {
                let we = self.w[e];
                if we >= self.wflg {
                    self.w[e] = we - nvi;
                } else if we != 0 {
                    self.w[e] = self.degree[e] as isize + wnvi;
                }
            }
        }

        // ---- degree update and pruning ---------------------------------
        for &i in &lme {
            let (deg, hash) = match self.prune_and_bound(i, me) {
                Some(bound) => bound,
                None => {
                    // i is only adjacent to me: eliminate it with me
                    let nvi = -self.nv[i];
                    self.parent[i] = Some(me);
                    degme -= nvi;
                    nvpiv += nvi;
                    self.nel += nvi as usize;
                    self.nv[i] = 0;
                    self.elen[i] = 0;
                    self.status[i] = NodeStatus::Merged;
                    self.adj[i] = Vec::new();
                    self.counters.mass_eliminated += 1;
                    continue;
                }
            };
            self.degree[i] = min(self.degree[i], deg);
            let hash = hash % self.n;
            self.hash_key[i] = hash;
            self.buckets[hash].push(i);
        }

        let degme = degme as usize;
        self.degree[me] = degme;
        self.lemax = self.lemax.max(degme);
        self.wflg = self.clear_flag(self.wflg + self.lemax as isize);

        // ---- supervariable detection -----------------------------------
        for &i in &lme {
            if self.nv[i] < 0 {
                let hash = self.hash_key[i];
                let bucket = std::mem::take(&mut self.buckets[hash]);
                self.detect_supervariables(bucket);
            }
        }

        // ---- finalize degrees and the new element ----------------------
        let nleft = self.n - self.nel;
        let mut boundary = Vec::with_capacity(lme.len());
        let mut updates = Vec::with_capacity(lme.len());
        for &i in &lme {
            let nvi = -self.nv[i];
            if nvi <= 0 {
                continue;
            }
            let nvi = nvi as usize;
            self.nv[i] = nvi as isize;
            let deg = min(self.degree[i] + degme - nvi, nleft - nvi);
            self.degree[i] = deg;
            updates.push((i, deg));
            boundary.push(i);
        }

        debug_assert_eq!(self.refs[me], boundary.len());
        self.nv[me] = nvpiv;
        self.fsize[me] = nvpiv as usize + degme;
        if boundary.is_empty() {
            self.w[me] = 0;
        }
        self.adj[me] = boundary;

        Pivot {
            me,
            npiv: nvpiv as usize,
            degme,
            removed,
            updates,
        }
    }

    // Rebuilds the list of boundary variable i as [me, elements, variables],
    // dropping dead elements and non-principal variables, and returns
    // the degree bound from the part outside the new element together
    // with the list hash.  None means i is adjacent to me only.
    fn prune_and_bound(&mut self, i: usize, me: usize) -> Option<(usize, usize)> {
        let eln = self.elen[i];
        let old = std::mem::take(&mut self.adj[i]);
        let mut deg: isize = 0;
        let mut hash: usize = 0;

        let mut kept_e = Vec::with_capacity(eln);
        for &e in &old[..eln] {
            let we = self.w[e];
            if we == 0 {
                self.release(e);
                continue;
            }
            let dext = we - self.wflg;
            if self.aggressive && dext <= 0 {
                // e's boundary lies inside the new element
                self.absorb(e, me);
                self.release(e);
                self.counters.aggressive += 1;
            } else {
                deg += dext;
                kept_e.push(e);
                hash = hash.wrapping_add(e);
            }
        }

        let mut kept_v = Vec::with_capacity(old.len() - eln);
        for &j in &old[eln..] {
            let nvj = self.nv[j];
            if nvj > 0 {
                deg += nvj;
                kept_v.push(j);
                hash = hash.wrapping_add(j);
            }
        }

        if kept_e.is_empty() && kept_v.is_empty() {
            return None;
        }

        // me goes in front, and the first entry of each part moves to
        // the end of that part
        let mut list = Vec::with_capacity(kept_e.len() + kept_v.len() + 1);
        list.push(me);
        list.extend_from_slice(kept_e.get(1..).unwrap_or(&[]));
        list.extend(kept_e.first());
        list.extend_from_slice(kept_v.get(1..).unwrap_or(&[]));
        list.extend(kept_v.first());

        self.elen[i] = kept_e.len() + 1;
        self.adj[i] = list;
        self.refs[me] += 1;

        debug_assert!(deg >= 0);
        Some((deg as usize, hash))
    }

    // Compares every pair of variables in a hash bucket and merges those
    // with identical lists.  The bucket is scanned most recent first.
    fn detect_supervariables(&mut self, mut bucket: Vec<usize>) {
        bucket.reverse();
        let mut a = 0;
        while a + 1 < bucket.len() {
            let i = bucket[a];
            let (ln, eln) = (self.adj[i].len(), self.elen[i]);
            for &x in &self.adj[i][1..] {
                self.w[x] = self.wflg;
            }

            let mut b = a + 1;
            while b < bucket.len() {
                let j = bucket[b];
                let same = self.adj[j].len() == ln
                    && self.elen[j] == eln
                    && self.adj[j][1..].iter().all(|&x| self.w[x] == self.wflg);
                if same {
                    self.release_list(j);
                    self.parent[j] = Some(i);
                    self.nv[i] += self.nv[j];
                    self.nv[j] = 0;
                    self.elen[j] = 0;
                    self.status[j] = NodeStatus::Merged;
                    self.counters.supervariables += 1;
                    bucket.remove(b);
                } else {
                    b += 1;
                }
            }
            self.wflg += 1;
            a += 1;
        }
    }

    /// Consumes the graph once every non-dense variable is eliminated.
    pub fn into_tree(self) -> AssemblyTree {
        assert_eq!(self.nel, self.n);
        AssemblyTree {
            parent: self.parent,
            nv: self.nv.iter().map(|&v| v.max(0) as usize).collect(),
            fsize: self.fsize,
            status: self.status,
        }
    }

    /// External degree of active variable `v` computed from the full
    /// adjacency.  Quadratic, used to check the approximation.
    #[cfg(test)]
    pub fn exact_external_degree(&self, v: usize) -> usize {
        assert_eq!(self.status[v], NodeStatus::Variable);
        let eln = self.elen[v];
        let mut seen = vec![false; self.n];
        seen[v] = true;
        let mut deg = 0;
        let mut visit = |j: usize, seen: &mut Vec<bool>| {
            if !seen[j] && self.nv[j] > 0 && self.status[j] == NodeStatus::Variable {
                seen[j] = true;
                deg += self.nv[j] as usize;
            }
        };
        for &e in &self.adj[v][..eln] {
            if self.status[e] == NodeStatus::Element {
                for &j in &self.adj[e] {
                    visit(j, &mut seen);
                }
            }
        }
        for &j in &self.adj[v][eln..] {
            visit(j, &mut seen);
        }
        deg
    }
}
