use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "timesheet",
    bin_name = "timesheet",
    version,
    args_conflicts_with_subcommands = true
)]
#[command(
    about = "Rewrite terse IT-support notes into client-facing timesheet entries",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the implicit `rewrite` command
    #[command(flatten)]
    pub rewrite: RewriteArgs,

    /// Print diagnostics to stderr (filter with RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrite notes into timesheet sentences (default)
    #[command(alias = "r")]
    Rewrite(RewriteArgs),

    /// Show the category and client detected for each line
    #[command(alias = "c")]
    Classify {
        #[command(flatten)]
        input: InputArgs,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Tag every unannotated line with a client code
    #[command(alias = "b")]
    Backfill {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Client code or alias (defaults to the configured default-client)
        #[arg(long)]
        client: Option<String>,
    },

    /// List known client codes and their aliases
    Clients,

    /// Get or set configuration values
    Config {
        /// Configuration key (e.g. default-client, llm-model)
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Notes file to read ("-" for stdin)
    pub input: Option<PathBuf>,

    /// Read notes from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Read notes from the clipboard
    #[arg(long)]
    pub paste: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct OutputArgs {
    /// Also write the result to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also copy the result to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Don't print the result to stdout
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Args, Debug, Default, Clone)]
pub struct RewriteArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Tag unannotated lines with this client code
    #[arg(long)]
    pub client: Option<String>,

    /// Ask the remote model first, falling back to local rules
    #[arg(long, conflicts_with = "no_llm")]
    pub llm: bool,

    /// Use local rules even if llm-enabled is set
    #[arg(long)]
    pub no_llm: bool,

    /// Style prompt for the remote model
    #[arg(long)]
    pub style: Option<String>,
}
