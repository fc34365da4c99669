#![deny(unsafe_code)]

#[path = "cli.rs"]
mod cli;

use std::{env, io, process::ExitCode};

use logging::{ConsoleSink, Sink};

fn main() -> ExitCode {
    let mut stdout = io::stdout();
    let mut stderr = io::stderr().lock();
    cli::run_with(
        env::args_os(),
        |name| env::var(name).ok(),
        |color| Box::new(ConsoleSink::stdout().with_color_mode(color)) as Box<dyn Sink>,
        &mut stdout,
        &mut stderr,
    )
}
