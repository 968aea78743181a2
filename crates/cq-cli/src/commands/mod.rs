pub mod export;
pub mod map;
pub mod play;
pub mod roster;
pub mod script;

use std::path::Path;
use std::sync::Arc;

use cq_core::{Templates, data};

/// Load templates from a JSON file, or the built-in ChronoQuest set.
fn load_templates(path: Option<&Path>) -> Result<Arc<Templates>, String> {
    let templates = match path {
        None => data::chronoquest(),
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Templates::from_json(&json).map_err(|e| format!("{}: {e}", path.display()))?
        }
    };
    log::debug!(
        "loaded {} monsters on a {}x{} map",
        templates.roster().len(),
        templates.map().grid().width(),
        templates.map().grid().height()
    );
    Ok(Arc::new(templates))
}
