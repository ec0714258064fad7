//! __amdorder__ computes fill reducing orderings of sparse symmetric
//! matrices with the approximate minimum degree (AMD) method.
//!
//! Eliminating the variables of a sparse symmetric matrix in a good
//! order keeps its Cholesky or LU factor sparse.  Given the nonzero
//! pattern of an n x n matrix, [`amd::order`] returns a permutation of
//! the n variables together with statistics that estimate the size of
//! the resulting factor.  The ordering follows the reference AMD
//! algorithm exactly, including its tie breaking, so results match
//! other faithful implementations entry for entry.
//!
//! ```no_run
//! use amdorder::amd::{order, AmdSettingsBuilder};
//!
//! let a = vec![
//!     vec![1.0, 0.0, 0.0, 1.0],
//!     vec![0.0, 1.0, 0.0, 0.0],
//!     vec![0.0, 0.0, 1.0, 0.0],
//!     vec![1.0, 0.0, 0.0, 1.0],
//! ];
//! let settings = AmdSettingsBuilder::default().verbose(true).build().unwrap();
//! let ordering = order(&a, &settings).unwrap();
//! println!("{:?}", ordering.permutation);
//! ```
//!
//! Sparse input is accepted as a [`algebra::CscPattern`] through
//! [`amd::order_csc`], and dynamically typed input as a JSON value
//! through `amd::order_json` (with the default `serde` feature).
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod amd;
pub mod io;
pub(crate) mod timers;
