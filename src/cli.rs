use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chlog")]
#[command(
    author,
    version,
    about = "Turns a markdown changelog into structured version trees"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// TOML file with a [changelog] table of default options
    #[clap(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a changelog and print its version trees as JSON
    Parse {
        /// Path to the changelog file
        #[clap(default_value = "CHANGELOG.md")]
        file: PathBuf,

        /// Stop after this many version sections
        #[clap(short = 'n', long)]
        limit: Option<usize>,

        /// Only print the tree of this version
        #[clap(long = "release")]
        version: Option<String>,

        /// Print the raw line groups instead of trees
        #[clap(long, default_value_t = false)]
        blocks: bool,
    },

    /// Print the tree of the newest release as JSON
    Latest {
        /// Path to the changelog file
        #[clap(default_value = "CHANGELOG.md")]
        file: PathBuf,
    },
}
