mod blame;
mod classify;
mod cli;
mod config;
mod error;
mod exclude;
mod git;
mod report;
mod report_helpers;
mod serve;
mod stats;

#[cfg(test)]
mod test_support;

use std::io;

use clap::{CommandFactory, Parser};

use cli::{AnalysisArgs, Cli, Commands};
use config::Config;
use error::Result;
use report::Snapshot;

fn analyse(args: &AnalysisArgs) -> Result<Snapshot> {
    let config = Config::from_args(args)?;
    report::analyse(&config)
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Report { analysis, json } => {
            let snapshot = analyse(&analysis)?;
            if json {
                report::json::print_json(&snapshot)?;
            } else {
                report::text::print_report(&snapshot)?;
            }
            Ok(())
        }
        Commands::Export {
            analysis,
            output_dir,
            force,
        } => {
            let snapshot = analyse(&analysis)?;
            let written = report::export(&snapshot, &output_dir, force)?;
            for path in written {
                println!("{}", path.display());
            }
            Ok(())
        }
        Commands::Serve {
            analysis,
            port,
            host,
        } => {
            let snapshot = analyse(&analysis)?;
            serve::serve(snapshot, &host, port)
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "contribs", &mut io::stdout());
            Ok(())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
