use clap::{Args, Parser, Subcommand};
use mdprep::engine::replication::Replication;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "mdprep - prepare atomic structures for molecular-dynamics input: basis indices, initial velocities, and basis-aware supercells.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assign basis indices and velocities, then optionally build a supercell.
    Prepare(PrepareArgs),
    /// Print a summary of a structure file and its annotations.
    Inspect(InspectArgs),
}

/// Arguments for the `prepare` subcommand.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Path to the input structure file (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the prepared output structure file (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to a preprocessing configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the replication factors: one integer or three (e.g. '2' or '2,2,1').
    #[arg(short, long, value_name = "FACTORS")]
    pub repeat: Option<Replication>,

    /// Treat the whole input as the unit cell, ignoring any basis in the config file.
    #[arg(long)]
    pub implicit_basis: bool,
}

/// Arguments for the `inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to the structure file (TOML).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn prepare_parses_replication_override() {
        let cli = Cli::try_parse_from([
            "mdprep", "prepare", "-i", "in.toml", "-o", "out.toml", "--repeat", "2,2,1",
        ])
        .unwrap();

        let Commands::Prepare(args) = cli.command else {
            panic!("expected the prepare subcommand");
        };
        assert_eq!(args.repeat.unwrap().factors(), [2, 2, 1]);
        assert!(args.config.is_none());
        assert!(!args.implicit_basis);
    }

    #[test]
    fn invalid_replication_is_rejected_by_the_parser() {
        let result = Cli::try_parse_from([
            "mdprep", "prepare", "-i", "in.toml", "-o", "out.toml", "--repeat", "2,2",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_apply_to_subcommands() {
        let cli = Cli::try_parse_from(["mdprep", "inspect", "-i", "in.toml", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["mdprep", "-q", "-v", "inspect", "-i", "in.toml"]);
        assert!(result.is_err());
    }
}
