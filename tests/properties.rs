#![allow(non_snake_case)]

use equator::assert;
use faer::{Mat, MatRef, RowRef};
use rand::prelude::*;
use rand_distr::StandardNormal;
use vech::vectorize::{unvech, vec, vech};
use vech::*;

fn random_symmetric(rng: &mut StdRng, n: usize) -> Mat<f64> {
	let B = Mat::<f64>::from_fn(n, n, |_, _| rng.sample(StandardNormal));
	B.as_ref() + B.transpose()
}

fn max_abs_diff(A: MatRef<'_, f64>, B: MatRef<'_, f64>) -> f64 {
	assert!(all(A.nrows() == B.nrows(), A.ncols() == B.ncols()));
	let mut diff = 0.0f64;
	for j in 0..A.ncols() {
		for i in 0..A.nrows() {
			diff = diff.max((A[(i, j)] - B[(i, j)]).abs());
		}
	}
	diff
}

#[test]
fn elimination_extracts_vech() {
	let rng = &mut StdRng::seed_from_u64(0);
	for n in 1..=5 {
		let A = random_symmetric(rng, n);
		let L = elimination(n).unwrap();
		assert!(L.as_ref() * vec(A.as_ref()).as_ref() == vech(A.as_ref()).unwrap());
	}
}

#[test]
fn commutation_is_involution() {
	for n in 1..=5 {
		let K = commutation(n).unwrap();
		assert!(K.as_ref() * K.as_ref() == Mat::<f64>::identity(n * n, n * n));
	}
}

#[test]
fn duplication_restores_vec() {
	let rng = &mut StdRng::seed_from_u64(1);
	for n in 1..=5 {
		let A = random_symmetric(rng, n);
		let D = duplication(n).unwrap();
		let L = elimination(n).unwrap();

		let vec_A = vec(A.as_ref());
		let DL = D.as_ref() * L.as_ref();
		let restored = DL.as_ref() * vec_A.as_ref();
		assert!(max_abs_diff(restored.as_ref().as_mat(), vec_A.as_ref().as_mat()) < 1e-12);

		let from_vech = D.as_ref() * vech(A.as_ref()).unwrap().as_ref();
		assert!(max_abs_diff(from_vech.as_ref().as_mat(), vec_A.as_ref().as_mat()) < 1e-12);
	}
}

#[test]
fn size_one() {
	let one = Mat::<f64>::identity(1, 1);
	assert!(elimination(1).unwrap() == one);
	assert!(commutation(1).unwrap() == one);
	assert!(max_abs_diff(duplication(1).unwrap().as_ref(), one.as_ref()) < 1e-15);
}

#[test]
fn zero_dimension_is_rejected() {
	assert!(elimination(0).unwrap_err() == Error::InvalidParameter { n: 0 });
	assert!(commutation(0).unwrap_err() == Error::InvalidParameter { n: 0 });
	assert!(duplication(0).unwrap_err() == Error::InvalidParameter { n: 0 });
}

#[test]
fn oversized_dimension_is_rejected() {
	let n = 1 << 16;
	assert!(elimination(n).unwrap_err() == Error::InvalidParameter { n });
	assert!(commutation(n).unwrap_err() == Error::InvalidParameter { n });
	assert!(duplication(n).unwrap_err() == Error::InvalidParameter { n });
}

#[test]
fn unvech_inverts_vech() {
	let rng = &mut StdRng::seed_from_u64(2);
	let n = 4;
	let A = random_symmetric(rng, n);
	let v = vech(A.as_ref()).unwrap();
	assert!(unvech(v.as_ref()).unwrap() == A);
}

#[test]
fn indicator_examples() {
	let signs = RowRef::from_slice(&[1.0, 1.0, 1.0]);
	assert!(indicator(RowRef::from_slice(&[1.0, 2.0, -3.0]), signs).unwrap() == 0);
	assert!(indicator(RowRef::from_slice(&[1.0, 2.0, 3.0]), signs).unwrap() == 1);
}

#[test]
fn expected_indicator_is_row_mean() {
	let rng = &mut StdRng::seed_from_u64(3);
	let R = Mat::<f64>::from_fn(50, 4, |_, _| rng.sample(StandardNormal));
	let signs = RowRef::from_slice(&[1.0, 1.0, -1.0, 0.0]);

	let hits: u32 = (0..R.nrows()).map(|i| indicator(R.row(i), signs).unwrap() as u32).sum();
	let mean = expected_indicator(R.as_ref(), signs).unwrap();
	assert!((mean - hits as f64 / 50.0).abs() < 1e-15);

	let empty = Mat::<f64>::zeros(0, 4);
	assert!(expected_indicator(empty.as_ref(), signs).unwrap().is_nan());
}

#[test]
fn safe_inverse_properties() {
	let rng = &mut StdRng::seed_from_u64(4);
	let n = 6;

	let I = Mat::<f64>::identity(n, n);
	assert!(max_abs_diff(safe_inverse(I.as_ref()).unwrap().as_ref(), I.as_ref()) < 1e-14);

	let B = Mat::<f64>::from_fn(n, n, |_, _| rng.sample(StandardNormal));
	let BBt = B.as_ref() * B.transpose();
	let A = BBt.as_ref() + I.as_ref();
	let inv = safe_inverse(A.as_ref()).unwrap();
	let pinv = pseudo_inverse(A.as_ref()).unwrap();
	assert!(max_abs_diff(inv.as_ref(), pinv.as_ref()) < 1e-10);

	// rank 2, not symmetric
	let C = Mat::<f64>::from_fn(n, 2, |_, _| rng.sample(StandardNormal));
	let D = Mat::<f64>::from_fn(2, n, |_, _| rng.sample(StandardNormal));
	let S = C.as_ref() * D.as_ref();
	let out = safe_inverse_with(S.as_ref(), &SafeInverseParams::default()).unwrap();
	assert!(out.kind == InverseKind::PseudoInverse);

	let SP = S.as_ref() * out.inverse.as_ref();
	let SPS = SP.as_ref() * S.as_ref();
	assert!(max_abs_diff(SPS.as_ref(), S.as_ref()) < 1e-10);

	// rank 2, symmetric with positive diagonal: the second pivot of the llt factorization is
	// exactly zero
	let S = faer::mat![[4.0, 2.0, 0.0], [2.0, 1.0, 0.0], [0.0, 0.0, 9.0]];
	let out = safe_inverse_with(S.as_ref(), &SafeInverseParams::default()).unwrap();
	assert!(out.kind == InverseKind::PseudoInverse);

	let SP = S.as_ref() * out.inverse.as_ref();
	let SPS = SP.as_ref() * S.as_ref();
	assert!(max_abs_diff(SPS.as_ref(), S.as_ref()) < 1e-12);
}

#[test]
fn safe_inverse_rejects_bad_input() {
	let A = Mat::<f64>::zeros(3, 2);
	assert!(matches!(safe_inverse(A.as_ref()), Err(Error::DimensionMismatch { .. })));

	let A = Mat::<f64>::from_fn(2, 2, |i, j| if i == j { f64::INFINITY } else { 0.0 });
	assert!(matches!(safe_inverse(A.as_ref()), Err(Error::NonFiniteInput { row: 0, col: 0 })));
}
