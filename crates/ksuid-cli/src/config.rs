use anyhow::bail;
use clap::{Args, Parser, Subcommand};

use crate::prefix::validate_prefix;

const EXAMPLES: &str = "\
Examples:
  ksuid generate                    # Generate a single KSUID
  ksuid generate -c 5               # Generate 5 KSUIDs
  ksuid generate -v                 # Generate with verbose output
  ksuid generate -p user            # Generate user_2StGMtcWzRJ8qZqQjbJjGdTkVfv
  ksuid generate --token -p sk      # Generate a timestamp-free secret key
  ksuid inspect 0ujtsYcgvSTl8PAuAdqWYSMnLOv
  ksuid compare <KSUID> <KSUID>
  ksuid benchmark -c 100000         # Benchmark generation";

/// Command-line arguments for the `ksuid` binary.
///
/// Values can also come from environment variables (or a `.env` file) where
/// noted.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ksuid",
    version,
    about = "Generate and inspect K-Sortable Unique Identifiers",
    after_help = EXAMPLES
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate KSUIDs (or secure tokens)
    Generate(GenerateArgs),

    /// Show the components of a KSUID
    Inspect {
        /// KSUID as base62, base36 or `prefix_<ksuid>`
        id: String,
    },

    /// Compare the age of two KSUIDs
    Compare {
        /// First KSUID
        first: String,
        /// Second KSUID
        second: String,
    },

    /// Measure generation throughput and check uniqueness
    Benchmark(BenchmarkArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Number of ids to generate.
    ///
    /// Environment variable: `KSUID_COUNT`
    #[arg(short, long, env = "KSUID_COUNT", default_value_t = 1)]
    pub count: usize,

    /// Show the datetime and unix timestamp of each KSUID.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Prefix each id as `<prefix>_<id>` (e.g. user, pi, cus).
    ///
    /// Environment variable: `KSUID_PREFIX`
    #[arg(short, long, env = "KSUID_PREFIX")]
    pub prefix: Option<String>,

    /// Use the 31-character lowercase base36 encoding.
    #[arg(long, default_value_t = false)]
    pub lowercase: bool,

    /// Generate secure tokens (160 random bits, no timestamp) instead.
    #[arg(long, default_value_t = false)]
    pub token: bool,
}

#[derive(Args, Debug, Clone)]
pub struct BenchmarkArgs {
    /// Number of KSUIDs to generate.
    #[arg(short, long, default_value_t = 10_000)]
    pub count: usize,

    /// Worker threads. Defaults to the number of logical CPUs.
    ///
    /// Environment variable: `KSUID_BENCH_THREADS`
    #[arg(short, long, env = "KSUID_BENCH_THREADS")]
    pub threads: Option<usize>,
}

/// Text encoding for generated ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Base62,
    Base36,
}

/// What `generate` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Ksuid,
    Token,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    pub count: usize,
    pub verbose: bool,
    pub prefix: Option<String>,
    pub encoding: Encoding,
    pub kind: IdKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub count: usize,
    pub threads: usize,
}

/// Validated configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Config {
    Generate(GenerateConfig),
    Inspect { id: String },
    Compare { first: String, second: String },
    Benchmark(BenchmarkConfig),
}

impl TryFrom<CliArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        Ok(match args.command {
            Command::Generate(args) => Self::Generate(GenerateConfig::try_from(args)?),
            Command::Inspect { id } => Self::Inspect { id },
            Command::Compare { first, second } => Self::Compare { first, second },
            Command::Benchmark(args) => Self::Benchmark(BenchmarkConfig::try_from(args)?),
        })
    }
}

impl TryFrom<GenerateArgs> for GenerateConfig {
    type Error = anyhow::Error;

    fn try_from(args: GenerateArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("KSUID_COUNT must be greater than 0");
        }

        // an empty KSUID_PREFIX in the environment means "no prefix"
        let prefix = args.prefix.filter(|p| !p.is_empty());
        if let Some(prefix) = &prefix {
            validate_prefix(prefix)?;
        }

        Ok(Self {
            count: args.count,
            verbose: args.verbose,
            prefix,
            encoding: if args.lowercase {
                Encoding::Base36
            } else {
                Encoding::Base62
            },
            kind: if args.token { IdKind::Token } else { IdKind::Ksuid },
        })
    }
}

impl TryFrom<BenchmarkArgs> for BenchmarkConfig {
    type Error = anyhow::Error;

    fn try_from(args: BenchmarkArgs) -> Result<Self, Self::Error> {
        if args.count == 0 {
            bail!("benchmark count must be greater than 0");
        }

        let threads = args.threads.unwrap_or_else(num_cpus::get);
        if threads == 0 {
            bail!("KSUID_BENCH_THREADS must be greater than 0");
        }

        Ok(Self {
            count: args.count,
            // no point spawning threads with nothing to do
            threads: threads.min(args.count),
        })
    }
}
