//! Get command - reads a value by path as a live reference or a copy.

use arbor::Store;

use crate::cli::GetArgs;
use crate::output::{OutputFormat, print_json};

/// Run the get command
pub fn run(
    store: &Store,
    args: &GetArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = if args.deep {
        store.get_deep_copy(&args.path)
    } else if args.copy {
        store.get_copy(&args.path)
    } else {
        store.get(&args.path)
    };

    match value {
        Some(value) => print_json(&value.to_json(), format)?,
        None => match format {
            OutputFormat::Human => println!("Nothing at '{}'.", args.path),
            OutputFormat::Json => println!("null"),
        },
    }

    Ok(())
}
