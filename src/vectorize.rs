//! column-major vectorization of matrices, and half-vectorization of symmetric matrices
//!
//! all routines follow the same index convention as the generated matrices of
//! [`crate::linalg`]: entry $(i, j)$ of an $m \times n$ matrix lives at index $i + m j$ of
//! $\text{vec}(A)$, and entry $(i, j)$ with $i \geq j$ of an $n \times n$ matrix lives at index
//! $j n - j (j - 1) / 2 + (i - j)$ of $\text{vech}(A)$.

use crate::{Error, Result};
use faer::{Col, ColRef, Mat, MatRef};

/// returns $n(n+1)/2$, the length of the half-vectorization of an $n \times n$ matrix
///
/// # errors
///
/// returns [`Error::InvalidParameter`] if `n` is zero, or if $n^2$ does not fit in a `usize`
pub fn vech_len(n: usize) -> Result<usize> {
	check_dim(n)?;
	Ok(n * (n + 1) / 2)
}

/// validates a dimension parameter and returns $n^2$
pub(crate) fn check_dim(n: usize) -> Result<usize> {
	if n == 0 {
		return Err(Error::InvalidParameter { n });
	}
	n.checked_mul(n).ok_or(Error::InvalidParameter { n })
}

/// checks that an `nrows` by `ncols` matrix of `f64` can be allocated, reporting `n` otherwise
pub(crate) fn check_alloc(nrows: usize, ncols: usize, n: usize) -> Result<()> {
	nrows
		.checked_mul(ncols)
		.and_then(|len| len.checked_mul(core::mem::size_of::<f64>()))
		.filter(|&bytes| bytes <= isize::MAX as usize)
		.map(|_| ())
		.ok_or(Error::InvalidParameter { n })
}

/// index of entry $(i, j)$, $i \geq j$, in the half-vectorization of an $n \times n$ matrix
#[inline]
pub(crate) fn vech_index(n: usize, i: usize, j: usize) -> usize {
	debug_assert!(i >= j && i < n);
	j * (2 * n - j + 1) / 2 + (i - j)
}

/// fails with the position of the first non-finite entry of `A`, in column-major order
pub(crate) fn check_finite(A: MatRef<'_, f64>) -> Result<()> {
	for j in 0..A.ncols() {
		for i in 0..A.nrows() {
			if !A[(i, j)].is_finite() {
				return Err(Error::NonFiniteInput { row: i, col: j });
			}
		}
	}
	Ok(())
}

/// stacks the columns of `A` into a single column
pub fn vec(A: MatRef<'_, f64>) -> Col<f64> {
	let m = A.nrows();
	Col::from_fn(m * A.ncols(), |k| A[(k % m, k / m)])
}

/// stacks the lower triangular part of each column of `A`, starting from the diagonal
///
/// # errors
///
/// returns [`Error::DimensionMismatch`] if `A` is not square
pub fn vech(A: MatRef<'_, f64>) -> Result<Col<f64>> {
	let n = A.nrows();
	if A.ncols() != n {
		return Err(Error::DimensionMismatch {
			what: "number of columns of a square matrix",
			expected: n,
			found: A.ncols(),
		});
	}

	let mut out = Col::zeros(n * (n + 1) / 2);
	let mut k = 0;
	for j in 0..n {
		for i in j..n {
			out[k] = A[(i, j)];
			k += 1;
		}
	}
	Ok(out)
}

/// reshapes `v` into a matrix with `nrows` rows, filling it column by column
///
/// # errors
///
/// - returns [`Error::InvalidParameter`] if `nrows` is zero
/// - returns [`Error::DimensionMismatch`] if the length of `v` is not a multiple of `nrows`
pub fn unvec(v: ColRef<'_, f64>, nrows: usize) -> Result<Mat<f64>> {
	if nrows == 0 {
		return Err(Error::InvalidParameter { n: nrows });
	}
	let len = v.nrows();
	if len % nrows != 0 {
		return Err(Error::DimensionMismatch {
			what: "length of a vectorized matrix",
			expected: len.next_multiple_of(nrows),
			found: len,
		});
	}
	Ok(Mat::from_fn(nrows, len / nrows, |i, j| v[i + nrows * j]))
}

/// rebuilds the symmetric matrix whose half-vectorization is `v`
///
/// # errors
///
/// returns [`Error::DimensionMismatch`] if the length of `v` is not of the form $n(n+1)/2$ for
/// some $n \geq 1$
pub fn unvech(v: ColRef<'_, f64>) -> Result<Mat<f64>> {
	let len = v.nrows();

	// smallest n such that n(n+1)/2 >= len
	let mut n = 0usize;
	let mut tri = 0usize;
	while tri < len {
		n += 1;
		tri += n;
	}
	if n == 0 || tri != len {
		return Err(Error::DimensionMismatch {
			what: "length of a half-vectorized matrix",
			expected: tri.max(1),
			found: len,
		});
	}

	Ok(Mat::from_fn(n, n, |i, j| {
		let (i, j) = if i >= j { (i, j) } else { (j, i) };
		v[vech_index(n, i, j)]
	}))
}
