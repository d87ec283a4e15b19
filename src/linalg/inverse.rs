//! inverse of a square matrix that degrades gracefully on singular input
//!
//! [`safe_inverse`] uses the $L L^\top$ (Cholesky) factorization when the input is symmetric
//! positive definite, and the Moore-Penrose pseudo-inverse otherwise. singular input is not an
//! error.

use crate::vectorize::check_finite;
use crate::{Error, LOG_TARGET, Result};
use faer::linalg::solvers::{DenseSolveCore, Llt, LltError, Svd};
use faer::{Mat, MatRef, Side};

/// default relative tolerance of the symmetry test of [`is_sympd`]
///
/// $A$ is considered symmetric if $|a_{ij} - a_{ji}| \leq \text{tol} \cdot \max_{k,l} |a_{kl}|$
/// for all $i, j$.
pub const SYMMETRY_TOLERANCE: f64 = 100.0 * f64::EPSILON;

/// tuning parameters of [`safe_inverse_with`]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SafeInverseParams {
	/// relative tolerance of the symmetry test, see [`SYMMETRY_TOLERANCE`]
	pub symmetry_tolerance: f64,
	/// singular values at or below this threshold are treated as zero by the pseudo-inverse.
	///
	/// `None` selects $\max(m, n) \cdot \sigma_{\max} \cdot \varepsilon$.
	pub pinv_tolerance: Option<f64>,
}

impl Default for SafeInverseParams {
	fn default() -> Self {
		Self {
			symmetry_tolerance: SYMMETRY_TOLERANCE,
			pinv_tolerance: None,
		}
	}
}

/// algorithm used to compute a [`SafeInverse`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InverseKind {
	/// the input was symmetric positive definite, and was inverted through its $L L^\top$
	/// factorization
	Cholesky,
	/// the input was not symmetric positive definite, and its Moore-Penrose pseudo-inverse was
	/// computed from its singular value decomposition
	PseudoInverse,
}

/// result of [`safe_inverse_with`]
#[derive(Clone, Debug)]
pub struct SafeInverse {
	/// the (pseudo-)inverse
	pub inverse: Mat<f64>,
	/// the branch that produced `inverse`
	pub kind: InverseKind,
}

fn check_square(A: MatRef<'_, f64>) -> Result<usize> {
	let n = A.nrows();
	if A.ncols() != n {
		return Err(Error::DimensionMismatch {
			what: "number of columns of a square matrix",
			expected: n,
			found: A.ncols(),
		});
	}
	Ok(n)
}

/// factorizes `A` if it passes the symmetric positive definite test
///
/// fails with `None` if `A` is rejected before the factorization is attempted, and with the
/// factorization error otherwise
fn sympd_llt(A: MatRef<'_, f64>, symmetry_tolerance: f64) -> core::result::Result<Llt<f64>, Option<LltError>> {
	let n = A.nrows();
	if A.ncols() != n {
		return Err(None);
	}

	let mut max_abs = 0.0f64;
	for j in 0..n {
		for i in 0..n {
			let x = A[(i, j)];
			if !x.is_finite() {
				return Err(None);
			}
			max_abs = max_abs.max(x.abs());
		}
	}

	let tol = symmetry_tolerance * max_abs;
	for j in 0..n {
		if A[(j, j)] <= 0.0 {
			return Err(None);
		}
		for i in j + 1..n {
			if (A[(i, j)] - A[(j, i)]).abs() > tol {
				return Err(None);
			}
		}
	}

	Llt::new(A, Side::Lower).map_err(Some)
}

/// checks whether `A` is symmetric positive definite
///
/// `A` passes the test if it is square, finite, symmetric up to `params.symmetry_tolerance`, has
/// a positive diagonal, and its lower triangular part admits an $L L^\top$ factorization.
pub fn is_sympd(A: MatRef<'_, f64>, params: &SafeInverseParams) -> bool {
	sympd_llt(A, params.symmetry_tolerance).is_ok()
}

/// computes the Moore-Penrose pseudo-inverse of `A`, with the default singular value cutoff
///
/// see [`pseudo_inverse_with`]
pub fn pseudo_inverse(A: MatRef<'_, f64>) -> Result<Mat<f64>> {
	pseudo_inverse_with(A, None)
}

/// computes the Moore-Penrose pseudo-inverse $A^+$ of the $m \times n$ matrix `A`
///
/// with the thin singular value decomposition $A = U \Sigma V^\top$, the pseudo-inverse is
/// $A^+ = V \Sigma^+ U^\top$, where $\Sigma^+$ inverts the singular values above `tolerance` and
/// zeroes the rest. a `tolerance` of `None` selects
/// $\max(m, n) \cdot \sigma_{\max} \cdot \varepsilon$. a negative or NaN `tolerance` is
/// clamped to zero, so that zero singular values are never inverted.
///
/// # errors
///
/// - returns [`Error::NonFiniteInput`] if `A` contains a NaN or infinite value
/// - returns [`Error::NoConvergence`] if the singular value decomposition fails
pub fn pseudo_inverse_with(A: MatRef<'_, f64>, tolerance: Option<f64>) -> Result<Mat<f64>> {
	check_finite(A)?;

	let m = A.nrows();
	let n = A.ncols();
	if m == 0 || n == 0 {
		return Ok(Mat::zeros(n, m));
	}

	let svd = Svd::new_thin(A)?;
	let U = svd.U();
	let V = svd.V();
	let S = svd.S().column_vector();
	let size = S.nrows();

	// singular values are sorted in nonincreasing order
	let tolerance = match tolerance {
		// f64::max ignores NaN
		Some(tolerance) => tolerance.max(0.0),
		None => Ord::max(m, n) as f64 * S[0] * f64::EPSILON,
	};

	let VxS = Mat::from_fn(n, size, |i, j| if S[j] > tolerance { V[(i, j)] / S[j] } else { 0.0 });

	Ok(VxS.as_ref() * U.transpose())
}

/// computes the inverse of `A`, or its pseudo-inverse if `A` is not symmetric positive definite
///
/// this is [`safe_inverse_with`] with the default parameters, keeping only the inverse.
pub fn safe_inverse(A: MatRef<'_, f64>) -> Result<Mat<f64>> {
	Ok(safe_inverse_with(A, &SafeInverseParams::default())?.inverse)
}

/// computes the inverse of the square matrix `A`
///
/// if `A` passes [`is_sympd`], the inverse is computed from its $L L^\top$ factorization.
/// otherwise, the Moore-Penrose pseudo-inverse is returned, which coincides with the inverse when
/// `A` is invertible. singular input is not an error.
///
/// # errors
///
/// - returns [`Error::DimensionMismatch`] if `A` is not square
/// - returns [`Error::NonFiniteInput`] if `A` contains a NaN or infinite value
/// - returns [`Error::NoConvergence`] if the singular value decomposition fails
pub fn safe_inverse_with(A: MatRef<'_, f64>, params: &SafeInverseParams) -> Result<SafeInverse> {
	let n = check_square(A)?;
	check_finite(A)?;

	if n == 0 {
		return Ok(SafeInverse {
			inverse: Mat::zeros(0, 0),
			kind: InverseKind::Cholesky,
		});
	}

	match sympd_llt(A, params.symmetry_tolerance) {
		Ok(llt) => {
			log::debug!(target: LOG_TARGET, "inverting {n}x{n} symmetric positive definite matrix via llt");
			return Ok(SafeInverse {
				inverse: llt.inverse(),
				kind: InverseKind::Cholesky,
			});
		},
		Err(Some(LltError::NonPositivePivot { index })) => {
			log::warn!(
				target: LOG_TARGET,
				"symmetric {n}x{n} matrix with positive diagonal is not positive definite (pivot {index}), falling back to the pseudo-inverse"
			);
		},
		Err(None) => {},
	}

	log::debug!(target: LOG_TARGET, "inverting {n}x{n} matrix via pseudo-inverse");
	Ok(SafeInverse {
		inverse: pseudo_inverse_with(A, params.pinv_tolerance)?,
		kind: InverseKind::PseudoInverse,
	})
}
