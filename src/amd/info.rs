#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of a successful ordering
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AmdStatus {
    /// ordering computed from a well formed input
    #[default]
    Ok,
    /// sparse input had unsorted or duplicate row indices and was
    /// cleaned up before ordering
    OkButJumbled,
}

impl AmdStatus {
    /// numeric status code, as stored in slot [`AMD_STATUS`]
    pub fn code(&self) -> f64 {
        match self {
            AmdStatus::Ok => 0.0,
            AmdStatus::OkButJumbled => 1.0,
        }
    }
}

impl std::fmt::Display for AmdStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmdStatus::Ok => write!(f, "OK"),
            AmdStatus::OkButJumbled => write!(f, "OK, but jumbled"),
        }
    }
}

// slots of the flat statistics array returned by AmdInfo::as_array
pub const AMD_STATUS: usize = 0;
pub const AMD_N: usize = 1;
pub const AMD_NZ: usize = 2;
pub const AMD_SYMMETRY: usize = 3;
pub const AMD_NZDIAG: usize = 4;
pub const AMD_NZ_A_PLUS_AT: usize = 5;
pub const AMD_NDENSE: usize = 6;
pub const AMD_MEMORY: usize = 7;
pub const AMD_NCMPA: usize = 8;
pub const AMD_LNZ: usize = 9;
pub const AMD_NDIV: usize = 10;
pub const AMD_NMULTSUBS_LDL: usize = 11;
pub const AMD_NMULTSUBS_LU: usize = 12;
pub const AMD_DMAX: usize = 13;
pub const AMD_INFO: usize = 20;

/// Statistics of an ordering.
///
/// The factor size and operation counts are estimates made from the
/// assembly tree; they assume no numerical pivoting and count dense
/// rows as a single trailing block.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AmdInfo {
    pub status: AmdStatus,
    /// matrix dimension
    pub n: usize,
    /// entries in the input pattern
    pub nz: usize,
    /// fraction of matched off-diagonal entries
    pub symmetry: f64,
    /// entries on the diagonal
    pub nzdiag: usize,
    /// off-diagonal entries of A + A'
    pub nz_a_plus_at: usize,
    /// rows deferred to the end as dense
    pub ndense: usize,
    /// estimated workspace, in bytes
    pub memory: usize,
    /// workspace compactions (never needed, always 0)
    pub ncmpa: usize,
    /// nonzeros in L, excluding the diagonal
    pub lnz: f64,
    /// divisions for LU or LDL'
    pub ndiv: f64,
    /// multiply-subtract pairs for LDL'
    pub nmultsubs_ldl: f64,
    /// multiply-subtract pairs for LU
    pub nmultsubs_lu: f64,
    /// largest front, including the diagonal
    pub dmax: f64,
    /// variables merged into a supervariable
    pub nsupervariables: usize,
    /// variables eliminated together with a pivot
    pub nmass_eliminated: usize,
    /// elements created
    pub nelements: usize,
    /// elements absorbed into a later element
    pub nabsorbed: usize,
    /// elements absorbed aggressively (included in `nabsorbed`)
    pub naggressive: usize,
}

impl AmdInfo {
    /// Flat statistics array with the slot layout given by the
    /// `AMD_*` index constants.  Unused slots are -1.
    pub fn as_array(&self) -> [f64; AMD_INFO] {
        let mut info = [-1.0; AMD_INFO];
        info[AMD_STATUS] = self.status.code();
        info[AMD_N] = self.n as f64;
        info[AMD_NZ] = self.nz as f64;
        info[AMD_SYMMETRY] = self.symmetry;
        info[AMD_NZDIAG] = self.nzdiag as f64;
        info[AMD_NZ_A_PLUS_AT] = self.nz_a_plus_at as f64;
        info[AMD_NDENSE] = self.ndense as f64;
        info[AMD_MEMORY] = self.memory as f64;
        info[AMD_NCMPA] = self.ncmpa as f64;
        info[AMD_LNZ] = self.lnz;
        info[AMD_NDIV] = self.ndiv;
        info[AMD_NMULTSUBS_LDL] = self.nmultsubs_ldl;
        info[AMD_NMULTSUBS_LU] = self.nmultsubs_lu;
        info[AMD_DMAX] = self.dmax;
        info
    }
}

#[test]
fn test_empty_info_array() {
    let info = AmdInfo::default().as_array();
    assert_eq!(info[AMD_STATUS], 0.0);
    assert_eq!(info[AMD_N], 0.0);
    assert_eq!(info[AMD_DMAX], 0.0);
    assert!(info[AMD_DMAX + 1..].iter().all(|&x| x == -1.0));
}
