//! # `stylemigrate`
//!
//! Command-line front end for the `stylemigrate` library: resolve named
//! styles, check configuration files and migrate them between schema
//! versions.
//!
//! ```sh
//! stylemigrate migrate --from 3.6 --to 16 --input .clang-format
//! stylemigrate batch --manifest stylemigrate.yaml
//! ```

use clap::Parser as _;
use stylemigrate::cli::{Args, Command};
use stylemigrate::error::StyleError;
use stylemigrate::system::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let system = RealSystem::new();
    let result = match &args.command {
        Command::Migrate(migrate) => stylemigrate::run_migrate(&system, migrate),
        Command::Check(check) => stylemigrate::run_check(&system, check),
        Command::Resolve(resolve) => stylemigrate::run_resolve(resolve),
        Command::Compatible(compatible) => stylemigrate::run_compatible(&system, compatible),
        Command::Styles(styles) => stylemigrate::run_styles(styles),
        Command::Batch(batch) => stylemigrate::run_batch(&system, batch),
    };

    if let Err(err) = result {
        error!("{:#}", err);
        std::process::exit(
            err.downcast_ref::<StyleError>()
                .map_or(1, StyleError::exit_code),
        );
    }
}
