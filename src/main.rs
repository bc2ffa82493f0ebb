use anyhow::Result;
use localheat::cli::Cli;
use localheat::config::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.common.verbose);
    cli.execute()
}
