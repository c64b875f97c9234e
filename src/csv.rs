//! Utilities for working with CSV files.

use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use tracing::debug;

use crate::data::{CovariateLookup, Dataset};
use crate::engine::Probabilities;

pub struct CsvWriter<W: Write> {
    writer: BufWriter<W>,
}
impl CsvWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let file = File::create(path)?;
        Ok(Self::wrap(file))
    }
}
impl<W: Write> CsvWriter<W> {
    pub fn wrap(inner: W) -> Self {
        Self {
            writer: BufWriter::new(inner),
        }
    }

    pub fn append<R>(&mut self, record: R) -> Result<(), io::Error>
    where
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        for (index, datum) in record.into_iter().enumerate() {
            if index != 0 {
                self.writer.write_all(b",")?;
            }
            self.writer.write_all(datum.as_ref().as_bytes())?;
        }
        self.writer.write_all(b"\n")
    }

    /// Writes a header of `observation,P1,...,PK` followed by one record per observation.
    pub fn append_probabilities(&mut self, probs: &Probabilities) -> Result<(), io::Error> {
        self.append(
            ["observation"]
                .into_iter()
                .chain(probs.labels().iter().map(String::as_str)),
        )?;
        for observation in 0..probs.observations() {
            self.append(
                [(observation + 1).to_string()]
                    .into_iter()
                    .chain(probs.observation(observation).iter().map(f64::to_string)),
            )?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), io::Error> {
        self.writer.flush()
    }

    pub fn into_inner(self) -> Result<W, io::Error> {
        self.writer.into_inner().map_err(|err| err.into_error())
    }
}

pub struct CsvReader<R: BufRead> {
    lines: Lines<R>,
}
impl CsvReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let file = File::open(path)?;
        Ok(Self::wrap(BufReader::new(file)))
    }
}
impl<R: BufRead> CsvReader<R> {
    pub fn wrap(inner: R) -> Self {
        Self {
            lines: inner.lines(),
        }
    }

    pub fn read(&mut self) -> Option<Result<Vec<String>, io::Error>> {
        self.lines.next().map(|line| {
            line.map(|line| line.split(',').map(|datum| datum.trim().to_string()).collect())
        })
    }

    /// Reads a covariate table: a header of column names followed by one numeric record per
    /// observation. Blank lines are skipped.
    pub fn read_dataset(&mut self) -> Result<Dataset, anyhow::Error> {
        let header = self.read().ok_or(anyhow!("missing header record"))??;
        let mut columns: Vec<Vec<f64>> = vec![vec![]; header.len()];
        let mut line = 1;
        for record in self {
            line += 1;
            let record = record?;
            if record.len() == 1 && record[0].is_empty() {
                continue;
            }
            if record.len() != header.len() {
                bail!("record on line {line} has {} fields, expected {}", record.len(), header.len());
            }
            for (column, datum) in columns.iter_mut().zip(record) {
                let value = datum
                    .parse::<f64>()
                    .with_context(|| format!("invalid number '{datum}' on line {line}"))?;
                column.push(value);
            }
        }

        let mut dataset = Dataset::default();
        for (name, values) in header.into_iter().zip(columns) {
            dataset.insert(name, values)?;
        }
        debug!("read {} covariates over {} observations", dataset.len(), dataset.observations());
        Ok(dataset)
    }
}

impl<R: BufRead> Iterator for CsvReader<R> {
    type Item = Result<Vec<String>, io::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::engine::compute;
    use crate::params::Parameters;
    use crate::utility::LinearUtility;

    use super::*;

    #[test]
    fn read_dataset() {
        let input = "X1, S1\n2,3\n1,8\n\n3,4\n";
        let dataset = CsvReader::wrap(Cursor::new(input)).read_dataset().unwrap();
        assert_eq!(&["X1".to_string(), "S1".to_string()], dataset.names());
        assert_eq!(3, dataset.observations());
        assert_eq!(Some(&[3.0, 8.0, 4.0][..]), dataset.get("S1"));
    }

    #[test]
    fn read_dataset_ragged_record() {
        let input = "X1,S1\n2,3\n1\n";
        let err = CsvReader::wrap(Cursor::new(input)).read_dataset().unwrap_err();
        assert_eq!("record on line 3 has 1 fields, expected 2", err.to_string());
    }

    #[test]
    fn read_dataset_invalid_number() {
        let input = "X1\nfoo\n";
        let err = CsvReader::wrap(Cursor::new(input)).read_dataset().unwrap_err();
        assert_eq!("invalid number 'foo' on line 2", err.to_string());
    }

    #[test]
    fn read_dataset_empty() {
        let err = CsvReader::wrap(Cursor::new("")).read_dataset().unwrap_err();
        assert_eq!("missing header record", err.to_string());
    }

    #[test]
    fn write_probabilities() {
        let params = Parameters::try_from([("b", 1.0)]).unwrap();
        let data = Dataset::try_from([("X", vec![1.0, 2.0])]).unwrap();
        let utilities = vec![LinearUtility::default().with_intercept("b")];
        let probs = compute(&params, &data, &utilities).unwrap();

        let mut writer = CsvWriter::wrap(vec![]);
        writer.append_probabilities(&probs).unwrap();
        let output = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        let e = 1f64.exp();
        assert_eq!(format!("observation,P1\n1,{e}\n2,{e}\n"), output);
    }
}
