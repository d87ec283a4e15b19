use super::commutation::commutation;
use super::elimination::elimination;
use crate::Result;
use faer::linalg::solvers::{DenseSolveCore, Llt};
use faer::{Mat, Side};

/// duplication matrix $D_n$
///
/// $D_n$ has $n^2$ rows and $n(n+1)/2$ columns, and satisfies
/// $D_n \text{vech}(A) = \text{vec}(A)$ for every symmetric $n \times n$ matrix $A$.
///
/// it is computed from the elimination matrix $L_n$ and the commutation matrix $K_n$ as
/// $$D_n = M L_n^\top (L_n M L_n^\top)^{-1},\quad M = I + K_n.$$
/// $L_n M L_n^\top$ is diagonal with entries $2$ (diagonal entries of $A$) and $1$ (off-diagonal
/// entries), so it is inverted through its $L L^\top$ factorization.
///
/// # errors
///
/// - returns [`crate::Error::InvalidParameter`] if `n` is zero, or if the generated matrices are too
///   large to be allocated
/// - returns [`crate::Error::SingularInversion`] if $L_n M L_n^\top$ can't be factorized
pub fn duplication(n: usize) -> Result<Mat<f64>> {
	let L = elimination(n)?;
	let K = commutation(n)?;
	let n2 = n * n;

	let I = Mat::<f64>::identity(n2, n2);
	let M = I.as_ref() + K.as_ref();
	let MLt = M.as_ref() * L.transpose();
	let LMLt = L.as_ref() * MLt.as_ref();

	let LMLt_inv = Llt::new(LMLt.as_ref(), Side::Lower)?.inverse();

	Ok(MLt.as_ref() * LMLt_inv.as_ref())
}
