use crate::{Error, Result};
use faer::{MatRef, RowRef};

/// specifies how missing values are handled by [`expected_indicator_with`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NanHandling {
	/// NaNs are passed as-is to the sign test. since a comparison with NaN is always false, a NaN
	/// entry never causes a sign disagreement.
	#[default]
	Propagate,
	/// rows containing a NaN are skipped, and not included in the total count of rows.
	Ignore,
}

fn check_len(r: RowRef<'_, f64>, signs: RowRef<'_, f64>) -> Result<()> {
	if r.ncols() != signs.ncols() {
		return Err(Error::DimensionMismatch {
			what: "length of the observation",
			expected: signs.ncols(),
			found: r.ncols(),
		});
	}
	Ok(())
}

#[inline]
fn agrees(r: RowRef<'_, f64>, signs: RowRef<'_, f64>) -> bool {
	!(0..r.ncols()).any(|i| signs[i] * r[i] < 0.0)
}

/// sign-agreement indicator of the observation `r`
///
/// returns $1$ if $s_i r_i \geq 0$ for every index $i$, and $0$ as soon as some index has
/// $s_i r_i < 0$. a zero entry in either vector agrees with any sign.
///
/// # errors
///
/// returns [`Error::DimensionMismatch`] if `r` and `signs` have different lengths
///
/// # example
///
/// ```
/// use faer::RowRef;
/// use vech::indicator;
///
/// let signs = RowRef::from_slice(&[1.0, 1.0, 1.0]);
/// assert_eq!(indicator(RowRef::from_slice(&[1.0, 2.0, 3.0]), signs), Ok(1));
/// assert_eq!(indicator(RowRef::from_slice(&[1.0, 2.0, -3.0]), signs), Ok(0));
/// ```
pub fn indicator(r: RowRef<'_, f64>, signs: RowRef<'_, f64>) -> Result<u8> {
	check_len(r, signs)?;
	Ok(agrees(r, signs) as u8)
}

/// mean of the [`indicator`] of each row of `R` against `signs`
///
/// this is [`expected_indicator_with`] with [`NanHandling::Propagate`].
pub fn expected_indicator(R: MatRef<'_, f64>, signs: RowRef<'_, f64>) -> Result<f64> {
	expected_indicator_with(R, signs, NanHandling::Propagate)
}

/// mean of the [`indicator`] of each row of `R` against `signs`
///
/// if `R` has no rows, or every row is skipped by [`NanHandling::Ignore`], the mean is undefined
/// and `f64::NAN` is returned.
///
/// # errors
///
/// returns [`Error::DimensionMismatch`] if the number of columns of `R` differs from the length
/// of `signs`
pub fn expected_indicator_with(R: MatRef<'_, f64>, signs: RowRef<'_, f64>, nan: NanHandling) -> Result<f64> {
	if R.ncols() != signs.ncols() {
		return Err(Error::DimensionMismatch {
			what: "number of columns of the observations",
			expected: signs.ncols(),
			found: R.ncols(),
		});
	}

	let mut count = 0usize;
	let mut hits = 0usize;
	for i in 0..R.nrows() {
		let r = R.row(i);
		if nan == NanHandling::Ignore && (0..r.ncols()).any(|j| r[j].is_nan()) {
			continue;
		}
		count += 1;
		hits += agrees(r, signs) as usize;
	}

	if count == 0 {
		return Ok(f64::NAN);
	}
	Ok(hits as f64 / count as f64)
}
