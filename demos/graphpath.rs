use anyhow::Result;
use clap::Parser;
use graphpath_demos::{cli, logging};

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    let _logger = logging::init(args.verbose, args.quiet)?;
    let stdout = std::io::stdout();
    cli::run(args, &mut stdout.lock())
}
