//! Observed covariates, one column per variable and one row per observation.

use std::collections::HashMap;
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;

use crate::error::{MissingKey, ShapeMismatch};

/// Named numeric vector lookup, as seen by a utility function.
pub trait CovariateLookup {
    fn get(&self, name: &str) -> Option<&[f64]>;

    /// The number of observations. For lookups that do not enforce a common column length,
    /// this is the length of the longest column.
    fn observations(&self) -> usize;

    fn require(&self, name: &str) -> Result<&[f64], MissingKey> {
        self.get(name).ok_or_else(|| MissingKey::covariate(name))
    }
}

impl<S: BuildHasher> CovariateLookup for HashMap<String, Vec<f64>, S> {
    fn get(&self, name: &str) -> Option<&[f64]> {
        HashMap::get(self, name).map(Vec::as_slice)
    }

    fn observations(&self) -> usize {
        self.values().map(Vec::len).max().unwrap_or(0)
    }
}

/// A set of equal-length covariate columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: FxHashMap<String, Vec<f64>>,
    names: Vec<String>,
    observations: usize,
}
impl Dataset {
    /// Inserts or replaces a column. The first column fixes the number of observations; every
    /// subsequent column must match it.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<(), ShapeMismatch> {
        let name = name.into();
        if self.names.is_empty() {
            self.observations = values.len();
        } else {
            ShapeMismatch::check(|| format!("covariate '{name}'"), self.observations, values.len())?;
        }
        if self.columns.insert(name.clone(), values).is_none() {
            self.names.push(name);
        }
        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.names
            .iter()
            .map(|name| (name.as_str(), self.columns[name].as_slice()))
    }
}

impl CovariateLookup for Dataset {
    fn get(&self, name: &str) -> Option<&[f64]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    fn observations(&self) -> usize {
        self.observations
    }
}

impl<S: Into<String>, const N: usize> TryFrom<[(S, Vec<f64>); N]> for Dataset {
    type Error = ShapeMismatch;

    fn try_from(columns: [(S, Vec<f64>); N]) -> Result<Self, Self::Error> {
        let mut dataset = Dataset::default();
        for (name, values) in columns {
            dataset.insert(name, values)?;
        }
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let dataset = Dataset::try_from([("X1", vec![2.0, 1.0, 3.0]), ("X2", vec![8.0, 7.0, 4.0])]).unwrap();
        assert_eq!(3, dataset.observations());
        assert_eq!(2, dataset.len());
        assert_eq!(&["X1".to_string(), "X2".to_string()], dataset.names());
        assert_eq!(Some(&[8.0, 7.0, 4.0][..]), dataset.get("X2"));
        assert_eq!(Err(MissingKey::covariate("S1")), dataset.require("S1"));
    }

    #[test]
    fn mismatched_column_rejected() {
        let err = Dataset::try_from([("X1", vec![2.0, 1.0, 3.0]), ("X2", vec![8.0, 7.0])]).unwrap_err();
        assert_eq!(
            ShapeMismatch {
                context: "covariate 'X2'".into(),
                expected: 3,
                actual: 2,
            },
            err
        );
    }

    #[test]
    fn replace_column() {
        let mut dataset = Dataset::try_from([("X1", vec![2.0, 1.0])]).unwrap();
        dataset.insert("X1", vec![5.0, 6.0]).unwrap();
        assert_eq!(1, dataset.len());
        assert_eq!(vec![("X1", &[5.0, 6.0][..])], dataset.iter().collect::<Vec<_>>());
        assert!(dataset.insert("X1", vec![5.0]).is_err());
    }

    #[test]
    fn empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert_eq!(0, dataset.observations());
    }

    #[test]
    fn hash_map_lookup_tolerates_ragged_columns() {
        let map: HashMap<String, Vec<f64>> = [
            ("X1".to_string(), vec![1.0, 2.0, 3.0]),
            ("X2".to_string(), vec![1.0, 2.0]),
        ]
        .into_iter()
        .collect();
        assert_eq!(3, map.observations());
        assert_eq!(Ok(&[1.0, 2.0][..]), map.require("X2"));
    }
}
