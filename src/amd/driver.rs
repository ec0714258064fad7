use super::dense::{self, DenseNodes};
use super::pattern::SymmetricPattern;
use super::quotient::{AssemblyTree, EliminationCounters, Pivot, QuotientGraph};
use super::selector::DegreeLists;

/// Phases of an elimination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Initializing,
    Eliminating,
    DenseAppend,
    Done,
}

/// Estimated size of and work for the Cholesky / LU factor, accumulated
/// one pivot at a time.  Each pivot contributes a dense front of
/// `f` pivot columns and `r` off-diagonal rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct FactorEstimate {
    pub lnz: f64,
    pub ndiv: f64,
    pub nmultsubs_ldl: f64,
    pub nmultsubs_lu: f64,
    pub dmax: f64,
}

impl FactorEstimate {
    fn add_front(&mut self, f: f64, r: f64) {
        self.dmax = self.dmax.max(f + r);
        let lnzme = f * r + (f - 1.0) * f / 2.0;
        self.lnz += lnzme;
        self.ndiv += lnzme;
        let s = f * r * r + r * (f - 1.0) * f + (f - 1.0) * f * (2.0 * f - 1.0) / 6.0;
        self.nmultsubs_lu += s;
        self.nmultsubs_ldl += (s + lnzme) / 2.0;
    }

    /// front of an ordinary pivot; the dense rows border every front
    pub fn add_pivot(&mut self, npiv: usize, degme: usize, ndense: usize) {
        self.add_front(npiv as f64, (degme + ndense) as f64);
    }

    /// the dense rows, factored last as one full block
    pub fn add_dense_block(&mut self, ndense: usize) {
        self.add_front(ndense as f64, 0.0);
    }
}

/// Everything the elimination produced
#[derive(Debug, Clone, Default)]
pub(crate) struct Elimination {
    pub tree: AssemblyTree,
    /// pivots in the order they were selected
    pub pivots: Vec<usize>,
    pub dense: DenseNodes,
    pub counters: EliminationCounters,
    pub estimate: FactorEstimate,
}

/// Minimum degree elimination loop.
///
/// Repeatedly takes a variable of least approximate degree from the
/// selector, eliminates it in the quotient graph and feeds the degree
/// changes back to the selector.
#[derive(Debug)]
pub(crate) struct EliminationDriver {
    phase: Phase,
    dense_alpha: f64,
    aggressive: bool,
    adjacency: Vec<Vec<usize>>,
    graph: QuotientGraph,
    selector: DegreeLists,
    result: Elimination,
}

impl EliminationDriver {
    pub fn new(pattern: SymmetricPattern, dense_alpha: f64, aggressive: bool) -> Self {
        EliminationDriver {
            phase: Phase::Initializing,
            dense_alpha,
            aggressive,
            adjacency: pattern.adjacency,
            graph: QuotientGraph::default(),
            selector: DegreeLists::default(),
            result: Elimination::default(),
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advances by one pivot, or by one phase transition.
    pub fn step(&mut self) -> Phase {
        self.phase = match self.phase {
            Phase::Initializing => self.initialize(),
            Phase::Eliminating => match self.selector.select_min() {
                Some(me) => {
                    let pivot = self.graph.eliminate(me);
                    self.apply(&pivot);
                    Phase::Eliminating
                }
                None => {
                    assert_eq!(self.graph.eliminated(), self.graph.n());
                    Phase::DenseAppend
                }
            },
            Phase::DenseAppend => {
                let ndense = self.result.dense.count();
                self.result.estimate.add_dense_block(ndense);
                Phase::Done
            }
            Phase::Done => Phase::Done,
        };
        self.phase
    }

    /// Runs to completion.
    pub fn run(mut self) -> Elimination {
        while self.step() != Phase::Done {}
        self.finish()
    }

    fn initialize(&mut self) -> Phase {
        let adjacency = std::mem::take(&mut self.adjacency);
        let n = adjacency.len();
        let degrees: Vec<usize> = adjacency.iter().map(|l| l.len()).collect();
        let dense = dense::classify(&degrees, self.dense_alpha);

        let (graph, initial) = QuotientGraph::new(adjacency, &dense, self.aggressive);
        let mut selector = DegreeLists::new(n);
        for (i, deg) in initial {
            selector.insert(i, deg);
        }

        self.graph = graph;
        self.selector = selector;
        self.result.dense = dense;
        if n > 0 {
            // every column of L holds at least its diagonal
            self.result.estimate.dmax = 1.0;
        }
        Phase::Eliminating
    }

    fn apply(&mut self, pivot: &Pivot) {
        for &i in &pivot.removed {
            self.selector.remove(i);
        }
        for &(i, deg) in &pivot.updates {
            self.selector.insert(i, deg);
        }
        let ndense = self.result.dense.count();
        self.result
            .estimate
            .add_pivot(pivot.npiv, pivot.degme, ndense);
        self.result.pivots.push(pivot.me);
    }

    fn finish(self) -> Elimination {
        assert_eq!(self.phase, Phase::Done);
        let mut result = self.result;
        result.counters = self.graph.counters;
        result.tree = self.graph.into_tree();
        result
    }

    #[cfg(test)]
    fn graph(&self) -> &QuotientGraph {
        &self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::CscPattern;
    use crate::amd::pattern::symmetrize;
    use crate::amd::quotient::NodeStatus;

    fn driver_for(n: usize, entries: &[(usize, usize)], alpha: f64) -> EliminationDriver {
        let a = CscPattern::from_entries(n, entries);
        EliminationDriver::new(symmetrize(&a), alpha, true)
    }

    // 5-point grid Laplacian pattern on a k x k mesh
    fn grid(k: usize) -> (usize, Vec<(usize, usize)>) {
        let mut entries = Vec::new();
        for r in 0..k {
            for c in 0..k {
                let i = r * k + c;
                entries.push((i, i));
                if c + 1 < k {
                    entries.push((i, i + 1));
                    entries.push((i + 1, i));
                }
                if r + 1 < k {
                    entries.push((i, i + k));
                    entries.push((i + k, i));
                }
            }
        }
        (k * k, entries)
    }

    #[test]
    fn test_phases() {
        let mut driver = driver_for(2, &[(0, 1), (1, 0)], 10.0);
        assert_eq!(driver.phase(), Phase::Initializing);
        assert_eq!(driver.step(), Phase::Eliminating);
        // one pivot takes both variables
        assert_eq!(driver.step(), Phase::Eliminating);
        assert_eq!(driver.step(), Phase::DenseAppend);
        assert_eq!(driver.step(), Phase::Done);
        assert_eq!(driver.step(), Phase::Done);

        let result = driver.finish();
        assert_eq!(result.pivots, vec![1]);
        assert_eq!(result.counters.mass_eliminated, 1);
        assert_eq!(result.estimate.lnz, 1.0);
        assert_eq!(result.estimate.dmax, 2.0);
    }

    #[test]
    fn test_all_dense() {
        // complete graph on 30 nodes; every degree 29 > 16
        let n = 30;
        let entries: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (0..n).map(move |j| (i, j)))
            .collect();
        let result = driver_for(n, &entries, 1.0).run();
        assert!(result.pivots.is_empty());
        assert_eq!(result.dense.nodes, (0..n).collect::<Vec<_>>());
        assert!(result.tree.status.iter().all(|&s| s == NodeStatus::Dense));
        // one dense block of 30 columns
        assert_eq!(result.estimate.lnz, 435.0);
        assert_eq!(result.estimate.dmax, 30.0);
    }

    #[test]
    fn test_degree_bound_holds_every_step() {
        let (n, entries) = grid(7);
        let mut driver = driver_for(n, &entries, 10.0);
        let mut steps = 0;
        while driver.step() == Phase::Eliminating {
            let g = driver.graph();
            for v in 0..n {
                if g.status(v) == NodeStatus::Variable {
                    assert!(g.approximate_external_degree(v) >= g.exact_external_degree(v));
                }
            }
            steps += 1;
        }
        assert!(steps > 0);
        let result = driver.run();
        assert_eq!(result.tree.nv.iter().sum::<usize>(), n);
    }

    #[test]
    fn test_counters_on_grid() {
        let (n, entries) = grid(6);
        let result = driver_for(n, &entries, 10.0).run();
        let c = result.counters;
        assert_eq!(c.elements, result.pivots.len());
        assert!(c.aggressive <= c.absorbed);
        // every pivot but the roots of the tree gets absorbed
        let roots = result
            .tree
            .parent
            .iter()
            .zip(&result.tree.nv)
            .filter(|(p, &nv)| p.is_none() && nv > 0)
            .count();
        assert_eq!(c.absorbed + roots, c.elements);
        // pivots plus merged plus mass eliminated cover every variable
        assert_eq!(
            c.elements + c.supervariables + c.mass_eliminated,
            n
        );
    }

    #[test]
    fn test_isolated_variables() {
        // no pivots are ever selected, yet each column of L keeps its diagonal
        let entries: Vec<(usize, usize)> = (0..5).map(|i| (i, i)).collect();
        let result = driver_for(5, &entries, 10.0).run();
        assert!(result.pivots.is_empty());
        assert_eq!(result.estimate.lnz, 0.0);
        assert_eq!(result.estimate.dmax, 1.0);

        let result = driver_for(0, &[], 10.0).run();
        assert_eq!(result.estimate.dmax, 0.0);
    }
}
