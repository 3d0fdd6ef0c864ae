//! Test support: a fixture encoder and captured payload fixtures.

pub mod fixture;
pub mod writer;
