use clap::Parser;
use headerfier::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    match headerfier::run(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
