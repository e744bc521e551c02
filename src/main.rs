use std::process::ExitCode;

use clap::Parser;
use finance_tracker::{
    app,
    config::{CliArgs, Config},
};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match Config::load(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if let Err(e) = app::run(args.screen, &config) {
        log::debug!("{e:?}");
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
