//! The probability engine. Evaluates one utility function per alternative, exponentiates the
//! utilities and divides by a per-observation denominator to arrive at choice probabilities.
//!
//! The default denominator is the sum of the _raw_ utilities across alternatives, not the sum of
//! their exponentials. The resulting values are therefore not a proper softmax and may be
//! negative or exceed one; they do not, in general, sum to one across alternatives. The textbook
//! logit denominator is available via [Normalisation::SummedExponentials].

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString};

use crate::data::CovariateLookup;
use crate::error::{ComputeError, ShapeMismatch};
use crate::linear::Matrix;
use crate::params::ParameterLookup;
use crate::probs::SliceExt;
use crate::utility::Utility;


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Normalisation {
    /// `D[n] = Σᵢ U[i][n]`.
    #[default]
    SummedUtilities,

    /// `D[n] = Σᵢ exp(U[i][n])`.
    SummedExponentials,
}

#[derive(Debug, Clone, Default)]
pub struct ProbabilityEngine {
    normalisation: Normalisation,
}
impl ProbabilityEngine {
    pub fn with_normalisation(mut self, normalisation: Normalisation) -> Self {
        self.normalisation = normalisation;
        self
    }

    pub fn normalisation(&self) -> Normalisation {
        self.normalisation
    }

    pub fn compute<U: Utility>(
        &self,
        params: &dyn ParameterLookup,
        data: &dyn CovariateLookup,
        utilities: &[U],
    ) -> Result<Probabilities, ComputeError> {
        let Some((first, rest)) = utilities.split_first() else {
            return Err(ComputeError::EmptyInput);
        };

        let first = first.evaluate(params, data)?;
        let observations = first.len();
        let mut values = Matrix::allocate(utilities.len(), observations);
        values.row_slice_mut(0).copy_from_slice(&first);
        for (index, utility) in rest.iter().enumerate() {
            let alternative = index + 1;
            let evaluated = utility.evaluate(params, data)?;
            ShapeMismatch::check(
                || format!("utility of {}", label(alternative)),
                observations,
                evaluated.len(),
            )?;
            values.row_slice_mut(alternative).copy_from_slice(&evaluated);
        }

        let summed_utilities = match self.normalisation {
            Normalisation::SummedUtilities => Some(values.sum_rows()),
            Normalisation::SummedExponentials => None,
        };
        for alternative in 0..values.rows() {
            values.row_slice_mut(alternative).exp();
        }
        let denominators = summed_utilities.unwrap_or_else(|| values.sum_rows());
        for alternative in 0..values.rows() {
            values.row_slice_mut(alternative).divide(&denominators);
        }

        let labels = (0..values.rows()).map(label).collect();
        Ok(Probabilities { labels, values })
    }
}

/// Computes choice probabilities using the default [ProbabilityEngine].
pub fn compute<U: Utility>(
    params: &dyn ParameterLookup,
    data: &dyn CovariateLookup,
    utilities: &[U],
) -> Result<Probabilities, ComputeError> {
    ProbabilityEngine::default().compute(params, data, utilities)
}

/// The label of the alternative at the given zero-based `index`: `P1`, `P2`, etc.
pub fn label(index: usize) -> String {
    format!("P{}", index + 1)
}

/// Choice probabilities, one row per alternative (in the order the utilities were supplied) and
/// one column per observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Probabilities {
    labels: Vec<String>,
    values: Matrix,
}
impl Probabilities {
    pub fn alternatives(&self) -> usize {
        self.values.rows()
    }

    pub fn observations(&self) -> usize {
        self.values.cols()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, label: &str) -> Option<&[f64]> {
        self.labels
            .iter()
            .position(|existing| existing == label)
            .map(|alternative| self.values.row_slice(alternative))
    }

    pub fn alternative(&self, index: usize) -> &[f64] {
        self.values.row_slice(index)
    }

    /// The probabilities of all alternatives for a single observation.
    pub fn observation(&self, index: usize) -> Vec<f64> {
        self.values.col(index).collect()
    }

    /// The per-observation sum of probabilities across alternatives.
    pub fn totals(&self) -> Vec<f64> {
        self.values.sum_rows()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.labels
            .iter()
            .enumerate()
            .map(|(alternative, label)| (label.as_str(), self.values.row_slice(alternative)))
    }

    pub fn matrix(&self) -> &Matrix {
        &self.values
    }
}

impl Serialize for Probabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.alternatives()))?;
        for (label, probs) in self.iter() {
            map.serialize_entry(label, probs)?;
        }
        map.end()
    }
}
