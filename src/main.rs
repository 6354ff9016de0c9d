use std::io;
use std::process;

use anyhow::Result;
use scvmm_clone::{cli, init_logging, run_compile, run_completions, run_validate};
use tracing::error;

fn main() -> Result<()> {
    let args = cli::parse_args()?;

    let log_level = match &args.command {
        cli::Commands::Compile(opts) => opts.log_level,
        cli::Commands::Validate(opts) => opts.log_level,
        cli::Commands::Completions(_) => cli::LogLevel::Warn,
    };
    init_logging(log_level)?;

    let result = match &args.command {
        cli::Commands::Compile(opts) => run_compile(opts, &mut io::stdout().lock()),
        cli::Commands::Validate(opts) => run_validate(opts),
        cli::Commands::Completions(opts) => {
            run_completions(opts, &mut io::stdout().lock());
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{:#}", e);
        process::exit(1);
    }

    Ok(())
}
