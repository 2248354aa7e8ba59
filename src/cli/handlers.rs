//! Command handlers
//!
//! Each handler runs one subcommand end to end and returns a process exit
//! code: 0 on success, 1 for a typed engine failure (with the failure's
//! help text on stderr), 2 for catalog or configuration problems.

use crate::catalog::loader::load_catalog;
use crate::cli::commands::{InspectArgs, RecommendArgs};
use crate::cli::output::{CatalogSummary, OutputFormatter};
use crate::config::RigsmithConfig;
use crate::engine::request::BuildRequest;
use crate::engine::search::Engine;
use std::fs;
use tracing::{debug, error};

/// Handles `rigsmith recommend`.
pub fn handle_recommend(args: &RecommendArgs, quiet: bool) -> i32 {
    let config = RigsmithConfig::default();
    if let Err(err) = config.validate() {
        error!(error = %err, "Invalid configuration");
        eprintln!("Error: {}", err);
        return 2;
    }

    let catalog = match load_catalog(&args.catalog) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(error = %err, "Failed to load catalog");
            eprintln!("Error: {}", err);
            return 2;
        }
    };

    let request = BuildRequest::from_raw(&args.usage, &args.detail, &args.budget);
    debug!(?request, "Parsed request");

    let engine = Engine::new(config);
    let build = match engine.recommend(&catalog, &request) {
        Ok(build) => build,
        Err(err) => {
            if !quiet {
                eprintln!("{}", err.help_message());
            } else {
                eprintln!("Error: {}", err);
            }
            return 1;
        }
    };

    let formatter = OutputFormatter::new(args.format.into());
    let rendered = match formatter.format_build(&build) {
        Ok(rendered) => rendered,
        Err(err) => {
            error!(error = %err, "Failed to format output");
            eprintln!("Error: {}", err);
            return 2;
        }
    };

    write_output(&rendered, args.output.as_deref())
}

/// Handles `rigsmith inspect`.
pub fn handle_inspect(args: &InspectArgs) -> i32 {
    let catalog = match load_catalog(&args.catalog) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!(error = %err, "Failed to load catalog");
            eprintln!("Error: {}", err);
            return 2;
        }
    };

    let summary = CatalogSummary::from_catalog(&catalog);
    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_summary(&summary) {
        Ok(rendered) => write_output(&rendered, None),
        Err(err) => {
            eprintln!("Error: {}", err);
            2
        }
    }
}

fn write_output(rendered: &str, target: Option<&std::path::Path>) -> i32 {
    match target {
        Some(path) => match fs::write(path, rendered) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("Error: failed to write {}: {}", path.display(), err);
                2
            }
        },
        None => {
            println!("{}", rendered);
            0
        }
    }
}
