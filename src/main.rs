//! `fixturegen` - synthetic fixture generator for templating tools

use clap::Parser;

use fixturegen::cli::args::Cli;
use fixturegen::cli::run;
use fixturegen::error::ExitCode;
use fixturegen::observability::init_from_cli;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(ExitCode::USAGE_ERROR);
        }
        Err(e) => e.exit(),
    };

    init_from_cli(&cli);

    match run::run(&cli) {
        Ok(_) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
