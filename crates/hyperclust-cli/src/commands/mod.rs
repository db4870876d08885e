use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use hyperclust_cli::OutputFormat;

pub mod clustering;
pub mod fill;
pub mod summary;

/// Dataset selection shared by every command.
#[derive(Args, Debug)]
pub struct DatasetArgs {
    /// Directory holding `<name>-nverts.txt` and `<name>-simplices.txt`.
    #[arg(long)]
    pub dataset: PathBuf,
    /// File prefix inside the dataset directory (defaults to the directory name).
    #[arg(long)]
    pub name: Option<String>,
    /// Optional YAML analysis configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Report destination shared by the analysis commands.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output file; stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Report format (overrides the configuration file).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, Box<dyn Error>> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            Ok(Box::new(io::BufWriter::new(fs::File::create(path)?)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
