//! Choice probabilities for multinomial discrete-choice (logit) models.
//! Evaluates a set of linear-in-parameters utility functions over observed covariates and
//! derives, for every observation, the probability of each alternative being chosen.

pub mod csv;
pub mod data;
pub mod display;
pub mod engine;
pub mod error;
pub mod file;
pub mod linear;
pub mod params;
pub mod print;
pub mod probs;
pub mod scenario;
pub mod utility;

#[cfg(test)]
pub(crate) mod testing;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
