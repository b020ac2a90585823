use std::process::ExitCode;

use ft_itoa_cli::{app, config::FtConfig, constants::USAGE, error::Error};
use log::info;

#[cfg(feature = "memalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[cfg(all(
    feature = "jemalloc",
    not(feature = "memalloc"),
    not(target_env = "msvc")
))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> ExitCode {
    let config = match FtConfig::new() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", Error::from(err));
            return ExitCode::FAILURE;
        }
    };

    env_logger::Builder::new()
        .parse_filters(config.log_level())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    }

    info!("Converting {} value(s)", args.len());

    match app::run(&config, &args) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
