/// CLI argument definitions for the `contribs` command.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::blame::{BlameKind, DEFAULT_REV};
use crate::classify::ClassifierKind;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "contribs",
    version,
    about = "Who owns the code that is still there, per language and per person"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments shared by every command that analyses a repository.
#[derive(Args, Debug)]
pub struct AnalysisArgs {
    /// Repository to analyze (default: current directory)
    pub path: Option<PathBuf>,

    /// Collapse per-language contributors with fewer than LINES lines (default: 15)
    #[arg(long, value_name = "LINES")]
    pub threshold: Option<usize>,

    /// How files are grouped by language
    #[arg(long, value_enum, default_value = "builtin")]
    pub classifier: ClassifierKind,

    /// How lines are attributed to authors
    #[arg(long, value_enum, default_value = "libgit2")]
    pub blame: BlameKind,

    /// Revision to attribute lines against
    #[arg(long, default_value = DEFAULT_REV)]
    pub rev: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the contribution report to stdout
    Report {
        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the HTML and JSON report into a directory
    Export {
        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Directory to write index.html and report.json into
        #[arg(short, long, default_value = "contribs-report")]
        output_dir: PathBuf,

        /// Overwrite the output directory if it is not empty
        #[arg(short, long)]
        force: bool,
    },

    /// Analyze once, then serve the HTML report over HTTP
    Serve {
        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Port to listen on
        #[arg(short, long, default_value = "8888")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["contribs", "serve"]).unwrap();
        match cli.command {
            Commands::Serve {
                analysis,
                port,
                host,
            } => {
                assert_eq!(port, 8888);
                assert_eq!(host, "0.0.0.0");
                assert!(analysis.path.is_none());
                assert_eq!(analysis.threshold, None);
                assert_eq!(analysis.rev, "HEAD");
                assert_eq!(analysis.blame, BlameKind::Libgit2);
                assert_eq!(analysis.classifier, ClassifierKind::Builtin);
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn export_flags() {
        let cli = Cli::try_parse_from([
            "contribs", "export", "../repo", "-o", "out", "-f", "--threshold", "40", "--blame",
            "git",
        ])
        .unwrap();
        match cli.command {
            Commands::Export {
                analysis,
                output_dir,
                force,
            } => {
                assert_eq!(analysis.path, Some(PathBuf::from("../repo")));
                assert_eq!(analysis.threshold, Some(40));
                assert_eq!(analysis.blame, BlameKind::Git);
                assert_eq!(output_dir, PathBuf::from("out"));
                assert!(force);
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn rejects_unknown_classifier() {
        assert!(Cli::try_parse_from(["contribs", "report", "--classifier", "magic"]).is_err());
    }
}
