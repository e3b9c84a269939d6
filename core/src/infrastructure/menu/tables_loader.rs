use std::{fs, path::Path, sync::Arc};

use tracing::info;

use crate::domain::{
    common::{MenuConfig, entities::app_errors::CoreError},
    menu::tables::ClassificationTables,
};

/// Reads classification tables from a JSON document.
pub fn load_tables(path: &Path) -> Result<ClassificationTables, CoreError> {
    let content = fs::read_to_string(path).map_err(|e| {
        tracing::error!("Failed to read tables file {}: {}", path.display(), e);
        CoreError::TablesLoadError(format!("{}: {}", path.display(), e))
    })?;

    let tables: ClassificationTables = serde_json::from_str(&content).map_err(|e| {
        tracing::error!("Failed to parse tables file {}: {}", path.display(), e);
        CoreError::TablesLoadError(format!("{}: {}", path.display(), e))
    })?;

    if tables.is_empty() {
        return Err(CoreError::TablesLoadError(format!(
            "{}: no entries",
            path.display()
        )));
    }

    info!(
        "Loaded {} classification entries from {}",
        tables.len(),
        path.display()
    );

    Ok(tables)
}

/// Tables for this process: the configured file, or the built-in Korean tables.
pub fn resolve_tables(config: &MenuConfig) -> Result<Arc<ClassificationTables>, CoreError> {
    let tables = match &config.tables_path {
        Some(path) => load_tables(path)?,
        None => {
            info!("Using built-in classification tables");
            ClassificationTables::korean()
        }
    };

    Ok(Arc::new(tables))
}
