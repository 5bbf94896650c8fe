// file: src/output/sink.rs
// description: console printing and wordlist file persistence
// reference: plain text output, one path per line

use crate::error::{JeloxError, Result};
use crate::models::PathCollection;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_OUTPUT: &str = "wordlist.txt";
pub const NO_FILES_NOTICE: &str = "No files found.";

pub struct OutputSink {
    output: Option<PathBuf>,
}

impl OutputSink {
    /// An empty path disables persisting.
    pub fn new(output: Option<PathBuf>) -> Self {
        Self {
            output: output.filter(|p| !p.as_os_str().is_empty()),
        }
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    /// Print, then persist. Returns the number of lines written to the file.
    pub fn emit(&self, files: &PathCollection) -> Result<Option<usize>> {
        self.print(files)?;
        self.persist(files)
    }

    pub fn print(&self, files: &PathCollection) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        print_to(files, &mut out)?;
        out.flush()?;
        Ok(())
    }

    pub fn persist(&self, files: &PathCollection) -> Result<Option<usize>> {
        let Some(path) = &self.output else {
            return Ok(None);
        };

        let file = File::create(path).map_err(|source| JeloxError::OutputCreate {
            path: path.clone(),
            source,
        })?;

        let mut writer = BufWriter::new(file);
        let written = write_lines(files, &mut writer)?;
        writer.flush()?;

        info!("Wrote {} paths to {}", written, path.display());
        Ok(Some(written))
    }
}

pub fn print_to<W: Write>(files: &PathCollection, out: &mut W) -> io::Result<()> {
    if files.is_empty() {
        writeln!(out, "{}", NO_FILES_NOTICE)?;
        return Ok(());
    }

    write_lines(files, out)?;
    Ok(())
}

fn write_lines<W: Write>(files: &PathCollection, out: &mut W) -> io::Result<usize> {
    let mut written = 0;
    for file in files.iter() {
        writeln!(out, "{}", file)?;
        written += 1;
    }
    Ok(written)
}
