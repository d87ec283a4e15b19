//! `vech` provides the matrix plumbing used when working with vectorized symmetric matrices in
//! multivariate statistics, built on top of [`faer`].
//!
//! # Vectorization
//!
//! For an $n \times n$ matrix $A$, $\text{vec}(A)$ stacks the columns of $A$ into a single column
//! of length $n^2$, and $\text{vech}(A)$ stacks only the lower triangular part of each column,
//! starting from the diagonal, into a column of length $n(n+1)/2$.
//!
//! The following matrices relate these vectorizations:
//! - the elimination matrix $L_n$, with $L_n \text{vec}(A) = \text{vech}(A)$,
//! - the commutation matrix $K_n$, with $K_n \text{vec}(A) = \text{vec}(A^\top)$,
//! - the duplication matrix $D_n$, with $D_n \text{vech}(A) = \text{vec}(A)$ for symmetric $A$.
//!
//! ```
//! use faer::mat;
//! use vech::{duplication, elimination, vectorize};
//!
//! let A = mat![[2.0, 1.0], [1.0, 3.0]];
//! let vec_A = vectorize::vec(A.as_ref());
//! let vech_A = vectorize::vech(A.as_ref()).unwrap();
//!
//! let L = elimination(2).unwrap();
//! assert!(L.as_ref() * vec_A.as_ref() == vech_A);
//!
//! let D = duplication(2).unwrap();
//! let back = D.as_ref() * vech_A.as_ref();
//! for i in 0..4 {
//! 	assert!((back[i] - vec_A[i]).abs() < 1e-12);
//! }
//! ```
//!
//! # Other routines
//!
//! [`stats`] contains the sign-agreement indicator and its empirical expectation, and
//! [`linalg::inverse`] contains an inverse that uses a Cholesky factorization when the input is
//! symmetric positive definite, and falls back to the Moore-Penrose pseudo-inverse otherwise.

#![allow(non_snake_case)]
#![allow(clippy::needless_range_loop)]

mod error;

pub mod linalg;
pub mod stats;
pub mod vectorize;

pub use error::{Error, Result};

pub use linalg::commutation::{commutation, commutation_rect};
pub use linalg::duplication::duplication;
pub use linalg::elimination::elimination;
pub use linalg::inverse::{
	InverseKind, SYMMETRY_TOLERANCE, SafeInverse, SafeInverseParams, is_sympd, pseudo_inverse, pseudo_inverse_with, safe_inverse, safe_inverse_with,
};
pub use stats::indicator::{NanHandling, expected_indicator, expected_indicator_with, indicator};

/// log target used by this crate
pub(crate) const LOG_TARGET: &str = "vech";
