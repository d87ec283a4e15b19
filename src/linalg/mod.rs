//! generators for the matrices relating $\text{vec}$ and $\text{vech}$, and a safe inverse
//!
//! the generated matrices are dense [`faer::Mat<f64>`] whose entries are all $0$ or $1$, except
//! for the duplication matrix which is obtained through an inversion and is therefore only exact
//! up to rounding

pub mod commutation;
pub mod duplication;
pub mod elimination;
pub mod inverse;
