use std::env;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::bail;
use clap::Parser;
use stanza::renderer::console::Console;
use stanza::renderer::Renderer;
use tracing::{debug, info};

use choicemodel::csv::{CsvReader, CsvWriter};
use choicemodel::display::DisplaySlice;
use choicemodel::engine::{Normalisation, Probabilities, ProbabilityEngine};
use choicemodel::file::FromJsonFile;
use choicemodel::params::Parameters;
use choicemodel::{print, scenario};

#[derive(Debug, clap::Parser, Clone)]
struct Args {
    /// JSON file of coefficients, overriding the reference parameters
    #[clap(short = 'p', long)]
    params: Option<PathBuf>,

    /// CSV file of covariates, replacing the reference data
    #[clap(short = 'd', long)]
    data: Option<PathBuf>,

    /// file to write the probabilities to, one line per alternative
    #[clap(short = 'o', long, default_value = "probabilities.txt")]
    output: PathBuf,

    /// also write the probabilities as CSV, one record per observation
    #[clap(long)]
    csv: Option<PathBuf>,

    /// denominator: summed-utilities or summed-exponentials
    #[clap(short = 'n', long, default_value_t = Normalisation::default())]
    normalisation: Normalisation,
}
impl Args {
    fn validate(&self) -> anyhow::Result<()> {
        if let Some(csv) = &self.csv {
            if csv == &self.output {
                bail!("the CSV and text outputs must be written to different files");
            }
        }
        Ok(())
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    if env::var("RUST_BACKTRACE").is_err() {
        env::set_var("RUST_BACKTRACE", "full")
    }
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info")
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    args.validate()?;
    debug!("args: {args:?}");

    let mut params = scenario::parameters()?;
    if let Some(path) = &args.params {
        let overrides = Parameters::from_json_file(path)?;
        info!("overriding {} parameters from {}", overrides.len(), path.display());
        params.merge(&overrides);
    }
    let data = match &args.data {
        None => scenario::data()?,
        Some(path) => CsvReader::open(path)?.read_dataset()?,
    };
    let utilities = scenario::utilities();

    let engine = ProbabilityEngine::default().with_normalisation(args.normalisation);
    let probs = engine.compute(&params, &data, &utilities)?;
    info!(
        "computed {} alternatives over {} observations ({} normalisation)",
        probs.alternatives(),
        probs.observations(),
        engine.normalisation()
    );
    info!("\n{}", Console::default().render(&print::tabulate(&probs)));

    write_text(&probs, &args.output)?;
    info!("wrote {}", args.output.display());
    if let Some(path) = &args.csv {
        let mut csv = CsvWriter::create(path)?;
        csv.append_probabilities(&probs)?;
        csv.flush()?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn write_text(probs: &Probabilities, path: &Path) -> Result<(), std::io::Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    for (label, values) in probs.iter() {
        writeln!(writer, "{label}: {}", DisplaySlice::from(values))?;
    }
    writer.flush()
}
