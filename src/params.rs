//! Model parameters: named scalar coefficients.

use std::collections::HashMap;
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;

use crate::error::{MissingKey, NonFiniteParameter};

/// Named scalar lookup, as seen by a utility function.
pub trait ParameterLookup {
    fn get(&self, name: &str) -> Option<f64>;

    fn require(&self, name: &str) -> Result<f64, MissingKey> {
        self.get(name).ok_or_else(|| MissingKey::parameter(name))
    }
}

impl<S: BuildHasher> ParameterLookup for HashMap<String, f64, S> {
    fn get(&self, name: &str) -> Option<f64> {
        HashMap::get(self, name).copied()
    }
}

/// Coefficient values keyed by name. All values are finite; names are iterated in the order
/// they were first inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    values: FxHashMap<String, f64>,
    names: Vec<String>,
}
impl Parameters {
    /// Inserts or replaces a coefficient, returning the previous value if one existed.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Result<Option<f64>, NonFiniteParameter> {
        let name = name.into();
        if !value.is_finite() {
            return Err(NonFiniteParameter { name, value });
        }
        let existing = self.values.insert(name.clone(), value);
        if existing.is_none() {
            self.names.push(name);
        }
        Ok(existing)
    }

    /// Overlays every coefficient in `other` on top of this set.
    pub fn merge(&mut self, other: &Parameters) {
        for (name, value) in other.iter() {
            if self.values.insert(name.to_string(), value).is_none() {
                self.names.push(name.to_string());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(|name| (name.as_str(), self.values[name]))
    }
}

impl ParameterLookup for Parameters {
    fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }
}

impl<S: Into<String>, const N: usize> TryFrom<[(S, f64); N]> for Parameters {
    type Error = NonFiniteParameter;

    fn try_from(entries: [(S, f64); N]) -> Result<Self, Self::Error> {
        let mut params = Parameters::default();
        for (name, value) in entries {
            params.insert(name, value)?;
        }
        Ok(params)
    }
}

impl<H: BuildHasher> TryFrom<HashMap<String, f64, H>> for Parameters {
    type Error = NonFiniteParameter;

    fn try_from(map: HashMap<String, f64, H>) -> Result<Self, Self::Error> {
        let mut entries: Vec<_> = map.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        let mut params = Parameters::default();
        for (name, value) in entries {
            params.insert(name, value)?;
        }
        Ok(params)
    }
}
