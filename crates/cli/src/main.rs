//! U-Loading command-line runner

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use u_loading::{Config, Packer};
use u_loading_cli::{default_output_path, DocumentParser, Report};

#[derive(Parser)]
#[command(name = "u-loading")]
#[command(about = "Greedy extreme-point 3D container loading")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack a single input file
    Pack {
        /// Path to the JSON input file
        input: PathBuf,

        /// Output file (defaults to result/result-<input file name>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        solver: SolverArgs,
    },

    /// Pack every JSON file in a directory and write a CSV report
    Report {
        /// Directory of JSON input files
        dir: PathBuf,

        /// Output file for CSV results
        #[arg(long, default_value = "report.csv")]
        csv: PathBuf,

        #[command(flatten)]
        solver: SolverArgs,
    },
}

#[derive(Args)]
struct SolverArgs {
    /// Share of a box's footprint that must rest on boxes below (0, 1]
    #[arg(long, default_value_t = 1.0)]
    support_ratio: f64,

    /// Scan candidate points in parallel
    #[arg(long)]
    parallel: bool,
}

impl SolverArgs {
    fn packer(&self) -> anyhow::Result<Packer> {
        let config = Config::new()
            .with_support_ratio(self.support_ratio)
            .with_parallel(self.parallel);
        config.validate()?;
        Ok(Packer::new(config))
    }
}

fn main() -> anyhow::Result<()> {
    colog::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack {
            input,
            output,
            solver,
        } => {
            let packer = solver.packer()?;
            let parser = DocumentParser::new();
            let problem = parser.parse_file(&input)?;

            let result = packer.pack(problem)?;
            let summary = result.summary();
            log::info!(
                "Packed {}/{} boxes into {} containers ({:?})",
                summary.packed_boxes,
                summary.total_boxes,
                summary.containers_used,
                summary.termination
            );

            let path = output.unwrap_or_else(|| default_output_path(&input));
            parser.write_file(&result, &path)?;
            log::info!("Results written to \"{}\"", path.display());
        }

        Commands::Report { dir, csv, solver } => {
            let packer = solver.packer()?;
            let report = Report::run_dir(&dir, &packer)?;
            log::info!(
                "{} files, mean volume rate {:.2}%",
                report.entries.len(),
                report.mean_volume_rate()
            );

            report.save_csv(&csv)?;
            log::info!("CSV saved to \"{}\"", csv.display());
        }
    }

    Ok(())
}
