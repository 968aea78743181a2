use std::path::Path;

pub fn run(templates: Option<&Path>, output: Option<&Path>) -> Result<(), String> {
    let templates = super::load_templates(templates)?;
    let json = templates.to_json().map_err(|e| e.to_string())?;

    match output {
        Some(path) => {
            std::fs::write(path, json + "\n")
                .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            println!("  Wrote templates to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
