use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Budget-aware PC build recommendation engine
#[derive(Parser, Debug)]
#[command(
    name = "rigsmith",
    about = "Budget-aware PC build recommendation engine",
    version,
    author,
    long_about = "rigsmith splits a budget across component categories according to the \
                  intended usage, enumerates compatible CPU/motherboard/RAM kits, and \
                  greedily assembles a complete, internally-compatible build within a \
                  bounded search."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Verbose output (debug logging)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Recommend a complete build from a catalog",
        long_about = "Runs one recommendation against a catalog snapshot.\n\n\
                      Examples:\n  \
                      rigsmith recommend catalog.json --usage gaming --detail \"heavy games\" --budget high\n  \
                      rigsmith recommend catalog.json --usage work --detail \"video editing\" --format json"
    )]
    Recommend(RecommendArgs),

    #[command(
        about = "Summarize a catalog file",
        long_about = "Loads a catalog snapshot and prints entry counts and price ranges \
                      per component category.\n\n\
                      Examples:\n  \
                      rigsmith inspect catalog.json\n  \
                      rigsmith inspect catalog.json --format json"
    )]
    Inspect(InspectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct RecommendArgs {
    #[arg(value_name = "CATALOG", help = "Path to the catalog JSON snapshot")]
    pub catalog: PathBuf,

    #[arg(
        short = 'u',
        long,
        default_value = "other",
        help = "Intended usage (gaming, studies, work; anything else is generic)"
    )]
    pub usage: String,

    #[arg(
        short = 'd',
        long,
        default_value = "",
        help = "Free-text detail qualifier (e.g. \"heavy games\", \"video editing\")"
    )]
    pub detail: String,

    #[arg(
        short = 'b',
        long,
        default_value = "intermediate",
        help = "Budget tier (economic, intermediate, high, extreme)"
    )]
    pub budget: String,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        help = "Write output to file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct InspectArgs {
    #[arg(value_name = "CATALOG", help = "Path to the catalog JSON snapshot")]
    pub catalog: PathBuf,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}
