use clap::Parser;
use flaggen::args::Args;
use flaggen::commands;
use flaggen::visuals;
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match commands::run(&args) {
        Ok(stats) => {
            if args.output.stats {
                visuals::print_detailed(&stats);
            } else if !args.output.quiet {
                visuals::print_summary(&stats);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
