use crate::core::dispatcher;
use crate::model::args::LaunchRequest;
use crate::model::error::Error;
use crate::utils::logging::Logging;
use std::env;
use std::process::ExitCode;

mod core;
mod model;
mod platform;
mod utils;

fn main() -> ExitCode {
    Logging::initialize();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.log();
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    crate::platform::version::ensure_supported()?;
    let request = LaunchRequest::parse(env::args().skip(1))?;
    if request.debug {
        println!("{request}");
    }
    request.validate()?;
    dispatcher::dispatch(request)
}
