//! A small reference scenario: three alternatives observed over ten individuals.
//!
//! The first two alternatives carry an alternative-specific constant, one alternative-specific
//! attribute (`X1` or `X2`) and a shared socio-economic covariate `S1` with alternative-specific
//! coefficients. The third alternative is the base, with a zero constant and a zero-valued
//! covariate `Sero`. Availability indicators `AV1`..`AV3` are carried in the data but not used by
//! any of the utilities.

use crate::data::Dataset;
use crate::error::{NonFiniteParameter, ShapeMismatch};
use crate::params::Parameters;
use crate::utility::LinearUtility;

pub fn parameters() -> Result<Parameters, NonFiniteParameter> {
    Parameters::try_from([
        ("beta01", 0.1),
        ("beta1", -0.5),
        ("beta2", -0.4),
        ("beta02", 1.0),
        ("beta03", 0.0),
        ("betaS113", 0.33),
        ("betaS123", 0.58),
    ])
}

pub fn data() -> Result<Dataset, ShapeMismatch> {
    Dataset::try_from([
        ("X1", vec![2., 1., 3., 4., 2., 1., 8., 7., 3., 2.]),
        ("X2", vec![8., 7., 4., 1., 4., 7., 2., 2., 3., 1.]),
        ("Sero", vec![0.; 10]),
        ("S1", vec![3., 8., 4., 7., 1., 6., 5., 9., 2., 3.]),
        ("AV1", vec![1., 1., 1., 1., 1., 0., 0., 1., 1., 0.]),
        ("AV2", vec![1., 1., 1., 0., 0., 1., 1., 1., 0., 1.]),
        ("AV3", vec![1., 1., 0., 0., 1., 1., 1., 1., 1., 1.]),
    ])
}

pub fn utilities() -> Vec<LinearUtility> {
    vec![
        LinearUtility::default()
            .with_intercept("beta01")
            .with_term("beta1", "X1")
            .with_term("betaS113", "S1"),
        LinearUtility::default()
            .with_intercept("beta02")
            .with_term("beta2", "X2")
            .with_term("betaS123", "S1"),
        LinearUtility::default()
            .with_intercept("beta03")
            .with_term("beta1", "Sero")
            .with_term("beta2", "Sero"),
    ]
}
