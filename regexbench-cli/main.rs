use std::{env, io::Write};

mod args;
mod cmd;
mod logger;
mod util;

fn main() -> anyhow::Result<()> {
    let rustlog = env::var("RUST_LOG").unwrap_or_default();
    logger::Logger::init()?;
    log::set_max_level(logger::max_level(&rustlog)?);

    let err = match cmd::run(&mut lexopt::Parser::from_env()) {
        Ok(()) => return Ok(()),
        Err(err) => err,
    };
    // Usage text and failed checks both end up here. A backtrace is only
    // useful when debugging the tool itself.
    let backtrace = env::var("RUST_BACKTRACE").map_or(false, |v| v == "1");
    let mut stderr = std::io::stderr().lock();
    if backtrace {
        writeln!(stderr, "{:?}", err)?;
    } else {
        writeln!(stderr, "{:#}", err)?;
    }
    std::process::exit(1);
}
