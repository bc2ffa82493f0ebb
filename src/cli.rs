use crate::config::{ColorChoice, Settings};
use crate::stats::FailurePolicy;
use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "localheat")]
#[command(about = "Contribution heatmap for the git repositories on this machine")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(
        long,
        global = true,
        env = "LOCALHEAT_REGISTRY",
        help = "Path to the repository list (default: ~/.gogitlocalstats)"
    )]
    pub registry: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto, help = "When to color the grid")]
    pub color: ColorChoice,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "More log output on stderr (repeatable)")]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find git repositories under a folder and remember them
    Scan {
        #[arg(help = "Folder to search recursively")]
        root: PathBuf,
    },
    /// Render the last six months of commits by one author
    Stats {
        #[arg(long, help = "Author email to count commits for")]
        email: String,

        #[arg(long, help = "Warn about unreadable repositories instead of aborting")]
        keep_going: bool,
    },
    /// Print the remembered repositories
    List,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let settings = Settings::resolve(&self.common)?;
        settings.color.apply();
        match self.command {
            Commands::Scan { root } => crate::scan::exec(&settings, &root),
            Commands::Stats { email, keep_going } => {
                let policy = if keep_going {
                    FailurePolicy::SkipAndWarn
                } else {
                    FailurePolicy::FailFast
                };
                crate::stats::exec(&settings, &email, policy)
            }
            Commands::List => crate::registry::list(&settings),
        }
    }
}
