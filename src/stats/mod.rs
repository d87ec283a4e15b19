//! statistics over the rows of a matrix

pub mod indicator;
