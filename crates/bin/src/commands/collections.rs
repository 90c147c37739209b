//! Collections command - lists collections, document counts and factories.

use arbor::Store;

use crate::output::{OutputFormat, print_table};

/// Run the collections command
pub fn run(store: &Store, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let collections: Vec<_> = store
        .collection_names()
        .iter()
        .filter_map(|name| store.get_collection(name))
        .collect();

    match format {
        OutputFormat::Human => {
            if collections.is_empty() {
                println!("No collections found.");
                return Ok(());
            }
            let rows: Vec<Vec<String>> = collections
                .iter()
                .map(|c| vec![c.name().to_string(), c.size().to_string(), c.kind().to_string()])
                .collect();
            print_table(&["NAME", "DOCS", "KIND"], &rows);
        }
        OutputFormat::Json => {
            let items: Vec<serde_json::Value> = collections
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "name": c.name(),
                        "docs": c.size(),
                        "kind": c.kind(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string(&items)?);
        }
    }

    Ok(())
}
