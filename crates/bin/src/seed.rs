//! Building the store the commands run against.

use std::path::Path;

use arbor::Store;

/// Creates a store, seeded from the JSON file at `seed` if one is given
pub fn open_store(seed: Option<&Path>) -> Result<Store, Box<dyn std::error::Error>> {
    let store = Store::new();
    let Some(path) = seed else {
        tracing::info!("No seed file given, starting with an empty store");
        return Ok(store);
    };

    let contents = std::fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let count = store.seed(&json)?;
    tracing::info!("Seeded {count} documents from {}", path.display());
    Ok(store)
}
