//! Deterministic utility functions, one per alternative.

use crate::data::CovariateLookup;
use crate::error::{ComputeError, ShapeMismatch};
use crate::params::ParameterLookup;
use crate::probs::SliceExt;

/// Evaluates the utility of a single alternative for every observation in `data`.
pub trait Utility {
    fn evaluate(&self, params: &dyn ParameterLookup, data: &dyn CovariateLookup) -> Result<Vec<f64>, ComputeError>;
}

impl<U: Utility + ?Sized> Utility for &U {
    fn evaluate(&self, params: &dyn ParameterLookup, data: &dyn CovariateLookup) -> Result<Vec<f64>, ComputeError> {
        (**self).evaluate(params, data)
    }
}

impl<U: Utility + ?Sized> Utility for Box<U> {
    fn evaluate(&self, params: &dyn ParameterLookup, data: &dyn CovariateLookup) -> Result<Vec<f64>, ComputeError> {
        (**self).evaluate(params, data)
    }
}

/// A [Utility] backed by a closure. See [from_fn].
pub struct FnUtility<F>(F);

impl<F> Utility for FnUtility<F>
where
    F: Fn(&dyn ParameterLookup, &dyn CovariateLookup) -> Result<Vec<f64>, ComputeError>,
{
    fn evaluate(&self, params: &dyn ParameterLookup, data: &dyn CovariateLookup) -> Result<Vec<f64>, ComputeError> {
        (self.0)(params, data)
    }
}

/// Wraps an arbitrary closure as a [Utility].
pub fn from_fn<F>(f: F) -> FnUtility<F>
where
    F: Fn(&dyn ParameterLookup, &dyn CovariateLookup) -> Result<Vec<f64>, ComputeError>,
{
    FnUtility(f)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coefficient: String,
    pub covariate: String,
}

/// A utility that is linear in its parameters: `intercept + β₁·x₁ + β₂·x₂ + ...`, evaluated
/// left to right. A covariate may appear in more than one term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearUtility {
    pub intercept: Option<String>,
    pub terms: Vec<Term>,
}
impl LinearUtility {
    pub fn with_intercept(mut self, coefficient: impl Into<String>) -> Self {
        self.intercept = Some(coefficient.into());
        self
    }

    pub fn with_term(mut self, coefficient: impl Into<String>, covariate: impl Into<String>) -> Self {
        self.terms.push(Term {
            coefficient: coefficient.into(),
            covariate: covariate.into(),
        });
        self
    }
}

impl Utility for LinearUtility {
    fn evaluate(&self, params: &dyn ParameterLookup, data: &dyn CovariateLookup) -> Result<Vec<f64>, ComputeError> {
        let intercept = match &self.intercept {
            None => 0.0,
            Some(coefficient) => params.require(coefficient)?,
        };
        let observations = match self.terms.first() {
            None => data.observations(),
            Some(term) => data.require(&term.covariate)?.len(),
        };

        let mut utilities = vec![intercept; observations];
        for term in &self.terms {
            let coefficient = params.require(&term.coefficient)?;
            let covariate = data.require(&term.covariate)?;
            ShapeMismatch::check(
                || format!("covariate '{}'", term.covariate),
                observations,
                covariate.len(),
            )?;
            utilities.add_scaled(coefficient, covariate);
        }
        Ok(utilities)
    }
}
