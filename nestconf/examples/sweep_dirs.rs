//! Example CLI deriving per-run output directories from hyperparameters.
//!
//! Flags become keyword arguments; `--from` loads a previously written
//! `config.json` as the record they are merged with. The run directory is
//! printed and, with `--write`, created and populated with the record.

use std::io::{self, Write};

use camino::Utf8PathBuf;
use clap::Parser;
use nestconf::{Configurable, HasConfig, Kwargs, Record, RecordType};

/// Optimiser settings nested inside a training run.
#[derive(Debug, Configurable)]
struct Optimizer {
    #[nestconf(default = "sgd".to_owned())]
    kind: Option<String>,
    #[nestconf(default = 0.01)]
    lr: Option<f64>,
}

impl Optimizer {
    fn baseline() -> Self {
        Self::from_config(OptimizerConfig::default())
    }
}

/// One training run of the sweep.
#[derive(Debug, Configurable)]
struct Training {
    model: Option<String>,
    #[nestconf(default = 10)]
    epochs: Option<u32>,
    batch_size: Option<u32>,
    #[nestconf(nested, default_factory = Optimizer::baseline)]
    optimizer: Option<Optimizer>,
}

#[derive(Parser, Debug)]
#[command(name = "sweep-dirs", about = "Derives run directories from hyperparameters")]
struct Cli {
    /// Directory holding all runs.
    #[arg(long, default_value = "runs")]
    root: Utf8PathBuf,
    /// Existing `config.json` to start from.
    #[arg(long)]
    from: Option<Utf8PathBuf>,
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    epochs: Option<u32>,
    #[arg(long)]
    batch_size: Option<u32>,
    /// Optimiser name, for example `adam`.
    #[arg(long)]
    optimizer: Option<String>,
    #[arg(long)]
    lr: Option<f64>,
    /// Stop the directory name at the first unset field.
    #[arg(long)]
    stop_at_none: bool,
    /// Create the run directory and write `config.json` into it.
    #[arg(long)]
    write: bool,
}

impl Cli {
    fn kwargs(&self) -> Result<Kwargs, String> {
        let mut kwargs = Kwargs::new();
        if let Some(model) = &self.model {
            kwargs.insert("model", model.as_str());
        }
        if let Some(epochs) = self.epochs {
            kwargs.insert("epochs", epochs);
        }
        if let Some(batch_size) = self.batch_size {
            kwargs.insert("batch_size", batch_size);
        }
        if self.optimizer.is_some() || self.lr.is_some() {
            let mut optimizer = Kwargs::new();
            if let Some(kind) = &self.optimizer {
                optimizer.insert("kind", kind.as_str());
            }
            if let Some(lr) = self.lr {
                optimizer.insert("lr", lr);
            }
            let record =
                OptimizerConfig::from_kwargs(optimizer).map_err(|err| err.to_string())?;
            kwargs.insert("optimizer", serde_json::Value::Object(record.to_mapping()));
        }
        Ok(kwargs)
    }

    fn base_record(&self) -> Result<Option<TrainingConfig>, String> {
        let Some(path) = &self.from else {
            return Ok(None);
        };
        let text = std::fs::read_to_string(path).map_err(|err| format!("{path}: {err}"))?;
        TrainingConfig::from_json_str(&text)
            .map(Some)
            .map_err(|err| err.to_string())
    }
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();
    let training = Training::construct(cli.base_record()?, cli.kwargs()?)
        .map_err(|err| err.to_string())?;
    let record = training.config();
    let run_dir = record.to_path(&cli.root, cli.stop_at_none);

    if cli.write {
        std::fs::create_dir_all(&run_dir).map_err(|err| format!("{run_dir}: {err}"))?;
        record
            .write_json(&run_dir.join("config.json"))
            .map_err(|err| err.to_string())?;
    }

    let mut stdout = io::stdout().lock();
    write_line(&mut stdout, run_dir.as_str())
}

fn write_line(writer: &mut dyn Write, message: &str) -> Result<(), String> {
    writer
        .write_all(message.as_bytes())
        .map_err(|err| err.to_string())?;
    writer.write_all(b"\n").map_err(|err| err.to_string())
}
