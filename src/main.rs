use clap::Parser;
use tracing::error;

use miseq_hashr::cli::{self, Cli};
use miseq_hashr::hashing::HashError;
use miseq_hashr::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbosity);

    if let Err(err) = cli::hash::run(&cli.folder, cli.format) {
        // A run without FASTQ files is not a partial success
        if let Some(hash_err) = err.downcast_ref::<HashError>() {
            if hash_err.is_fatal() {
                error!("{hash_err}");
                std::process::exit(1);
            }
        }
        return Err(err);
    }

    Ok(())
}
