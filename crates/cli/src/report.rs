//! Batch runs over a directory of input files.

use crate::parser::{DocumentParser, ParseError};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use u_loading::{Output, Packer};

/// Result of one input file.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    /// Input file name.
    pub filename: String,
    /// Volume rate of the first container, in percent (0 if none was used).
    pub volume_rate: f64,
    /// Containers used.
    pub containers: usize,
    /// Boxes left unpacked.
    pub unpacked: usize,
    /// Parse plus solve time in seconds.
    pub duration: f64,
}

impl ReportEntry {
    /// Builds an entry from a finished run.
    pub fn new(filename: impl Into<String>, output: &Output, duration: f64) -> Self {
        Self {
            filename: filename.into(),
            volume_rate: output
                .containers
                .first()
                .map_or(0.0, |c| c.volume_rate * 100.0),
            containers: output.containers.len(),
            unpacked: output.unpacked_boxes.len(),
            duration,
        }
    }
}

/// Collected results of a batch run.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

impl Report {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `packer` on every `*.json` file in `dir`, in file name order.
    ///
    /// Files that fail to parse are logged and skipped. Logging is muted
    /// while a file is solved.
    pub fn run_dir(dir: impl AsRef<Path>, packer: &Packer) -> Result<Self, ParseError> {
        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut report = Self::new();
        let level = log::max_level();
        for path in paths {
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            log::set_max_level(log::LevelFilter::Off);
            let start = Instant::now();
            let result = DocumentParser::new()
                .parse_file(&path)
                .and_then(|input| packer.pack(input).map_err(ParseError::from));
            let duration = start.elapsed().as_secs_f64();
            log::set_max_level(level);

            match result {
                Ok(output) => {
                    let entry = ReportEntry::new(filename, &output, duration);
                    log::info!(
                        "{} - rate: {:.2}%, containers: {}, unpacked: {}, duration: {:.3} s",
                        entry.filename,
                        entry.volume_rate,
                        entry.containers,
                        entry.unpacked,
                        entry.duration
                    );
                    report.entries.push(entry);
                }
                Err(e) => log::error!("Skipping \"{}\": {}", path.display(), e),
            }
        }

        Ok(report)
    }

    /// Mean first-container volume rate in percent.
    pub fn mean_volume_rate(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.entries.iter().map(|e| e.volume_rate).sum::<f64>() / self.entries.len() as f64
    }

    /// Writes the report as CSV.
    pub fn write_csv(&self, mut writer: impl Write) -> io::Result<()> {
        writeln!(writer, "filename,volume_rate(%),containers,unpacked,duration(s)")?;
        for entry in &self.entries {
            writeln!(
                writer,
                "{},{:.2},{},{},{:.3}",
                entry.filename, entry.volume_rate, entry.containers, entry.unpacked, entry.duration
            )?;
        }
        Ok(())
    }

    /// Saves the report as a CSV file.
    pub fn save_csv(&self, path: impl AsRef<Path>) -> io::Result<()> {
        self.write_csv(io::BufWriter::new(fs::File::create(path)?))
    }
}
