use faer::linalg::solvers::{LltError, SvdError};

/// errors reported by the routines of this crate
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
	/// an input has a dimension inconsistent with another input, or with the requested size
	#[error("dimension mismatch for {what}: expected {expected}, found {found}")]
	DimensionMismatch {
		/// which dimension was checked
		what: &'static str,
		/// the dimension that was required
		expected: usize,
		/// the dimension that was provided
		found: usize,
	},

	/// the requested dimension is zero, or too large for the generated matrix to be indexable
	#[error("invalid dimension parameter: n = {n}")]
	InvalidParameter {
		/// the rejected dimension
		n: usize,
	},

	/// a matrix that must be invertible is numerically singular
	#[error("matrix is numerically singular (non-positive pivot at index {index})")]
	SingularInversion {
		/// index of the first pivot that failed
		index: usize,
	},

	/// the input contains a NaN or infinite value
	#[error("non-finite input value at ({row}, {col})")]
	NonFiniteInput {
		/// row of the first non-finite entry
		row: usize,
		/// column of the first non-finite entry
		col: usize,
	},

	/// the singular value decomposition did not converge
	#[error("singular value decomposition did not converge")]
	NoConvergence,
}

/// result type of the routines of this crate
pub type Result<T> = core::result::Result<T, Error>;

impl From<LltError> for Error {
	fn from(err: LltError) -> Self {
		match err {
			LltError::NonPositivePivot { index } => Error::SingularInversion { index },
		}
	}
}

impl From<SvdError> for Error {
	fn from(err: SvdError) -> Self {
		match err {
			SvdError::NoConvergence => Error::NoConvergence,
		}
	}
}
