//! Approximate minimum degree ordering.
//!
//! Given the nonzero pattern of a square matrix, computes a permutation
//! that keeps the Cholesky (or LU) factor of the symmetrically permuted
//! `A + A'` sparse.  Only the pattern is used; values matter only in
//! deciding which entries are nonzero.
//!
//! __Example usage__ :
//! ```no_run
//! use amdorder::amd::{order, AmdSettings, Permutation};
//!
//! let a = [[1, 1, 1, 1], [1, 1, 0, 0], [1, 0, 1, 0], [1, 0, 0, 1]];
//! let ordering = order(&a, &AmdSettings::default()).unwrap();
//! assert_eq!(ordering.permutation, Permutation::Vector(vec![3, 2, 1, 0]));
//! ```

use crate::algebra::{ColumnLayout, CscPattern, ShapedMatrix, SparseFormatError};
use crate::io::PrintTarget;
use crate::timers::{timeit, Timers};
use std::borrow::Cow;

mod dense;
mod driver;
mod error_types;
mod info;
mod info_print;
mod pattern;
mod permutation;
mod postorder;
mod quotient;
mod selector;
mod settings;
pub mod symbolic;

pub use error_types::*;
pub use info::*;
pub use pattern::{EntryValue, PatternEntry};
pub use permutation::*;
pub use settings::*;

use driver::EliminationDriver;

/// Ordering engine with a configurable output stream.
///
/// Each call is independent; no state other than the settings and the
/// print target carries over between calls.
#[derive(Debug)]
pub struct AmdOrderer {
    pub settings: AmdSettings,
    stream: PrintTarget,
}

impl AmdOrderer {
    pub fn new(settings: AmdSettings) -> Self {
        AmdOrderer {
            settings,
            stream: PrintTarget::default(),
        }
    }

    /// Orders a dense square matrix given as a slice of rows.
    ///
    /// Nonzero entries are edges.  Entries that are not numbers produce
    /// a [`TypeConversionWarning`] and count as edges when non-empty.
    pub fn order<R, E>(&mut self, matrix: &[R]) -> Result<AmdOrdering, AmdError>
    where
        R: AsRef<[E]>,
        E: PatternEntry,
    {
        self.settings.validate()?;
        let mut timers = Timers::default();
        let extracted;
        timeit! {timers => "extract";
            extracted = pattern::extract_rows(matrix);
        }
        let (a, warnings) = extracted?;
        self.order_pattern(&a, AmdStatus::Ok, warnings, timers)
    }

    /// Orders a matrix given as a JSON array of equal length arrays.
    #[cfg(feature = "serde")]
    pub fn order_json(&mut self, matrix: &serde_json::Value) -> Result<AmdOrdering, AmdError> {
        self.settings.validate()?;
        let mut timers = Timers::default();
        let extracted;
        timeit! {timers => "extract";
            extracted = pattern::extract_json(matrix);
        }
        let (a, warnings) = extracted?;
        self.order_pattern(&a, AmdStatus::Ok, warnings, timers)
    }

    /// Orders a square sparse pattern.
    ///
    /// Columns may be unsorted or contain duplicates, in which case the
    /// pattern is cleaned up first and the status is
    /// [`AmdStatus::OkButJumbled`].
    pub fn order_csc(&mut self, a: &CscPattern) -> Result<AmdOrdering, AmdError> {
        self.settings.validate()?;
        if !a.is_square() {
            return Err(SparseFormatError::NotSquare(a.m, a.n).into());
        }
        let mut timers = Timers::default();
        let (a, status) = match a.check_format()? {
            ColumnLayout::Sorted => (Cow::Borrowed(a), AmdStatus::Ok),
            ColumnLayout::Jumbled => {
                let cleaned;
                timeit! {timers => "extract";
                    cleaned = a.transpose_compact();
                }
                (Cow::Owned(cleaned), AmdStatus::OkButJumbled)
            }
        };
        self.order_pattern(&a, status, Vec::new(), timers)
    }

    fn order_pattern(
        &mut self,
        a: &CscPattern,
        status: AmdStatus,
        warnings: Vec<TypeConversionWarning>,
        mut timers: Timers,
    ) -> Result<AmdOrdering, AmdError> {
        // printing failures never affect the ordering
        self.print_configuration(a.n, a.nnz()).ok();
        self.print_warnings(&warnings).ok();

        let p;
        let mut info;
        timeit! {timers => "order";
            let symmetric;
            timeit!{timers => "symmetrize"; symmetric = pattern::symmetrize(a); }

            info = AmdInfo {
                status,
                n: a.n,
                nz: symmetric.nz,
                symmetry: symmetric.symmetry,
                nzdiag: symmetric.nzdiag,
                nz_a_plus_at: symmetric.nz_a_plus_at,
                memory: workspace_bytes(a.n, symmetric.nz_a_plus_at),
                ..AmdInfo::default()
            };

            let elimination;
            timeit!{timers => "eliminate";
                elimination = EliminationDriver::new(symmetric, self.settings.dense, self.settings.aggressive).run();
            }

            info.ndense = elimination.dense.count();
            info.lnz = elimination.estimate.lnz;
            info.ndiv = elimination.estimate.ndiv;
            info.nmultsubs_ldl = elimination.estimate.nmultsubs_ldl;
            info.nmultsubs_lu = elimination.estimate.nmultsubs_lu;
            info.dmax = elimination.estimate.dmax;
            info.nsupervariables = elimination.counters.supervariables;
            info.nmass_eliminated = elimination.counters.mass_eliminated;
            info.nelements = elimination.counters.elements;
            info.nabsorbed = elimination.counters.absorbed;
            info.naggressive = elimination.counters.aggressive;

            timeit!{timers => "postorder"; p = permutation::assemble(elimination.tree); }
        }

        if a.n == 0 {
            // nothing to estimate for an empty matrix
            info = AmdInfo {
                status,
                ..AmdInfo::default()
            };
        }

        self.print_info(&info, &timers).ok();

        Ok(AmdOrdering::new(
            p,
            info,
            warnings,
            self.settings.dense_permutation,
        ))
    }
}

// adjacency arena plus the per-node arrays
fn workspace_bytes(n: usize, nz_a_plus_at: usize) -> usize {
    const PER_NODE: usize = 14;
    (nz_a_plus_at + PER_NODE * n) * std::mem::size_of::<usize>()
}

/// Orders a dense square matrix given as a slice of rows.
///
/// Verbose output, if enabled, goes to stdout.  See [`AmdOrderer`]
/// to redirect it.
pub fn order<R, E>(matrix: &[R], settings: &AmdSettings) -> Result<AmdOrdering, AmdError>
where
    R: AsRef<[E]>,
    E: PatternEntry,
{
    AmdOrderer::new(settings.clone()).order(matrix)
}

/// Orders a matrix given as a JSON array of equal length arrays.
#[cfg(feature = "serde")]
pub fn order_json(
    matrix: &serde_json::Value,
    settings: &AmdSettings,
) -> Result<AmdOrdering, AmdError> {
    AmdOrderer::new(settings.clone()).order_json(matrix)
}

/// Orders a square sparse pattern.
pub fn order_csc(a: &CscPattern, settings: &AmdSettings) -> Result<AmdOrdering, AmdError> {
    AmdOrderer::new(settings.clone()).order_csc(a)
}
