use crate::Result;
use crate::vectorize::{check_alloc, check_dim};
use faer::Mat;

/// elimination matrix $L_n$
///
/// $L_n$ has $n(n+1)/2$ rows and $n^2$ columns, and satisfies
/// $L_n \text{vec}(A) = \text{vech}(A)$ for every $n \times n$ matrix $A$.
///
/// every row of $L_n$ has exactly one nonzero entry, equal to $1$: row $k$ selects entry
/// $(i, j)$, $i \geq j$, of $A$, where $k$ is the position of that entry in $\text{vech}(A)$.
///
/// # errors
///
/// returns [`crate::Error::InvalidParameter`] if `n` is zero, or if the matrix is too large to be
/// allocated
///
/// # example
///
/// ```
/// use faer::mat;
/// use vech::elimination;
///
/// let L = elimination(2).unwrap();
/// assert!(L == mat![[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 0.0, 1.0]]);
/// ```
pub fn elimination(n: usize) -> Result<Mat<f64>> {
	let n2 = check_dim(n)?;
	let nrows = n * (n + 1) / 2;
	check_alloc(nrows, n2, n)?;
	let mut L = Mat::zeros(nrows, n2);

	let mut row = 0;
	for j in 0..n {
		for i in j..n {
			L[(row, i + n * j)] = 1.0;
			row += 1;
		}
	}

	Ok(L)
}
