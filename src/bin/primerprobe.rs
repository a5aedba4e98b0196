use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use primerprobe::params::{AMPLICON_LENGTH_RANGE, PRIMER_LENGTH_RANGE, PROBE_LENGTH_RANGE};
use primerprobe::run::{run_design, run_stats, DesignOpts, OutputTarget};
use primerprobe::{Validation, WindowParameters};

/// primerprobe CLI
#[derive(Parser)]
#[command(name = "primerprobe")]
#[command(version)]
#[command(about = "Gene primer and probe candidate generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Input FASTA file (.fna/.fasta/.fa, optionally gzipped)
    file: PathBuf,
    /// Process every record instead of only the first
    #[arg(long)]
    all_records: bool,
    /// Uppercase the sequence first (GC counting is case-sensitive otherwise)
    #[arg(long)]
    uppercase: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate (forward primer, probe, reverse primer) triplets as CSV
    Design {
        #[command(flatten)]
        input: InputArgs,
        /// Primer length in bp
        #[arg(long, default_value_t = WindowParameters::DEFAULT.primer_length as u64,
              value_parser = clap::value_parser!(u64).range(*PRIMER_LENGTH_RANGE.start() as u64..=*PRIMER_LENGTH_RANGE.end() as u64))]
        primer_length: u64,
        /// Probe length in bp
        #[arg(long, default_value_t = WindowParameters::DEFAULT.probe_length as u64,
              value_parser = clap::value_parser!(u64).range(*PROBE_LENGTH_RANGE.start() as u64..=*PROBE_LENGTH_RANGE.end() as u64))]
        probe_length: u64,
        /// Amplicon length in bp
        #[arg(long, default_value_t = WindowParameters::DEFAULT.amplicon_length as u64,
              value_parser = clap::value_parser!(u64).range(*AMPLICON_LENGTH_RANGE.start() as u64..=*AMPLICON_LENGTH_RANGE.end() as u64))]
        amplicon_length: u64,
        /// Output CSV path (single record only; default: <id>_primers_probes.csv)
        #[arg(long, short, conflicts_with_all = ["stdout", "output_dir"])]
        output: Option<PathBuf>,
        /// Directory for per-record CSV files
        #[arg(long, conflicts_with = "stdout")]
        output_dir: Option<PathBuf>,
        /// Write CSV to stdout (single record only)
        #[arg(long)]
        stdout: bool,
        /// Omit the parameter block before the table
        #[arg(long)]
        no_header: bool,
        /// Do not reject layouts where 2*primer + probe exceeds the amplicon (segments get truncated)
        #[arg(long)]
        lenient: bool,
        /// Threads (0/None = all)
        #[arg(long)]
        threads: Option<usize>,
    },

    /// Print length and GC content of the input sequence(s)
    Stats {
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Design {
            input,
            primer_length,
            probe_length,
            amplicon_length,
            output,
            output_dir,
            stdout,
            no_header,
            lenient,
            threads,
        } => {
            let target = match (stdout, output, output_dir) {
                (true, _, _) => OutputTarget::Stdout,
                (false, Some(p), _) => OutputTarget::File(p),
                (false, None, Some(dir)) => OutputTarget::Dir(dir),
                (false, None, None) => OutputTarget::default(),
            };
            let opts = DesignOpts {
                file: input.file,
                all_records: input.all_records,
                uppercase: input.uppercase,
                params: WindowParameters::new(primer_length as usize, probe_length as usize, amplicon_length as usize),
                validation: if lenient { Validation::Lenient } else { Validation::Strict },
                threads,
                target,
                header: !no_header,
            };
            run_design(&opts, std::io::stdout().lock())?;
        }

        Commands::Stats { input } => {
            run_stats(&input.file, input.all_records, input.uppercase, std::io::stdout().lock())?;
        }
    }

    Ok(())
}
