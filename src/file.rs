//! File utilities.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::from_reader;
use tracing::debug;

use crate::params::Parameters;

/// Reads a JSON-encoded type from a given file `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, anyhow::Error> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let decoded = from_reader(BufReader::new(file))
        .with_context(|| format!("cannot decode {}", path.display()))?;
    Ok(decoded)
}

pub trait FromJsonFile: Sized {
    fn from_json_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error>;
}

/// Parameters are stored as a flat JSON object of coefficient names to values, e.g.,
/// `{"beta01": 0.1, "beta1": -0.5}`.
impl FromJsonFile for Parameters {
    fn from_json_file(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let map: HashMap<String, f64> = read_json(&path)?;
        debug!("read {} parameters from {}", map.len(), path.as_ref().display());
        Ok(Parameters::try_from(map)?)
    }
}
