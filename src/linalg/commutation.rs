use crate::vectorize::{check_alloc, check_dim};
use crate::{Error, Result};
use faer::Mat;

/// commutation matrix $K_n$
///
/// $K_n$ is the $n^2 \times n^2$ permutation matrix satisfying
/// $K_n \text{vec}(A) = \text{vec}(A^\top)$ for every $n \times n$ matrix $A$. it is symmetric
/// and its own inverse.
///
/// # errors
///
/// returns [`Error::InvalidParameter`] if `n` is zero, or if the matrix is too large to be allocated
///
/// # example
///
/// ```
/// use faer::mat;
/// use vech::commutation;
///
/// let K = commutation(2).unwrap();
/// assert!(
/// 	K == mat![
/// 		[1.0, 0.0, 0.0, 0.0],
/// 		[0.0, 0.0, 1.0, 0.0],
/// 		[0.0, 1.0, 0.0, 0.0],
/// 		[0.0, 0.0, 0.0, 1.0],
/// 	]
/// );
/// ```
pub fn commutation(n: usize) -> Result<Mat<f64>> {
	let n2 = check_dim(n)?;
	check_alloc(n2, n2, n)?;
	let mut K = Mat::zeros(n2, n2);

	for i in 0..n {
		for j in 0..n {
			K[(i + n * j, j + n * i)] = 1.0;
		}
	}

	Ok(K)
}

/// commutation matrix $K_{m,n}$ of a rectangular matrix
///
/// $K_{m,n}$ is the $mn \times mn$ permutation matrix satisfying
/// $K_{m,n} \text{vec}(A) = \text{vec}(A^\top)$ for every $m \times n$ matrix $A$, so that
/// $K_{n,m} K_{m,n} = I$ and $K_{n,n} = K_n$.
///
/// # errors
///
/// returns [`Error::InvalidParameter`] if either dimension is zero, or if the matrix is too large
/// to be allocated
pub fn commutation_rect(m: usize, n: usize) -> Result<Mat<f64>> {
	if m == 0 {
		return Err(Error::InvalidParameter { n: m });
	}
	if n == 0 {
		return Err(Error::InvalidParameter { n });
	}
	let mn = m.checked_mul(n).ok_or(Error::InvalidParameter { n: Ord::max(m, n) })?;
	check_alloc(mn, mn, Ord::max(m, n))?;

	let mut K = Mat::zeros(mn, mn);

	// entry (i, j) of A is at i + m j in vec(A), and at j + n i in vec(A^T)
	for j in 0..n {
		for i in 0..m {
			K[(j + n * i, i + m * j)] = 1.0;
		}
	}

	Ok(K)
}
