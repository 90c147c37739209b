//! Destroy command - deletes a path and prints the remaining tree.

use arbor::Store;

use crate::cli::DestroyArgs;
use crate::output::{OutputFormat, print_json};

/// Run the destroy command
pub fn run(
    store: &Store,
    args: &DestroyArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    store.destroy(&args.path)?;
    tracing::info!("Destroyed '{}'", args.path);
    print_json(&store.to_json(), format)?;
    Ok(())
}
