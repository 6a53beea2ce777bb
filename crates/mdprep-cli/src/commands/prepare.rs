use crate::cli::PrepareArgs;
use crate::config::build_config;
use crate::error::{CliError, Result};
use mdprep::{
    core::io::{toml_file::TomlStructureFile, traits::StructureFile},
    engine::progress::{Progress, ProgressCallback, ProgressReporter},
    workflows,
};
use tracing::{debug, info};

pub fn run(args: PrepareArgs) -> Result<()> {
    info!("Building preprocessing configuration...");
    let config = build_config(&args)?;
    debug!("Final configuration: {:?}", &config);

    info!("Loading input structure from {:?}", &args.input);
    let structure =
        TomlStructureFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;

    let reporter = ProgressReporter::with_callback(log_progress());

    println!("Preparing {} atoms...", structure.len());
    let prepared = workflows::prepare::run(&structure, &config, &reporter)?;

    info!("Writing prepared structure to {:?}", &args.output);
    TomlStructureFile::write_to_path(&prepared, &args.output).map_err(|e| {
        CliError::FileParsing {
            path: args.output.clone(),
            source: e.into(),
        }
    })?;

    println!(
        "Prepared structure ({} atoms, unit cell of {}) written to: {}",
        prepared.len(),
        prepared.unitcell().map_or(0, <[usize]>::len),
        args.output.display()
    );
    Ok(())
}

/// Forwards workflow progress events to the log.
fn log_progress() -> ProgressCallback<'static> {
    Box::new(|progress: Progress| match progress {
        Progress::PhaseStart { name } => info!(phase = name, "Phase started."),
        Progress::PhaseFinish => debug!("Phase finished."),
        Progress::Message(msg) => info!("{}", msg),
    })
}
