use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(templates: Option<&Path>) -> Result<(), String> {
    let templates = super::load_templates(templates)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Sprite", "HP", "ATK", "DEF", "XP"]);

    for monster in templates.roster().iter() {
        let name = if templates.is_boss(monster) {
            format!("{} (boss)", monster.name)
        } else {
            monster.name.clone()
        };
        table.add_row(vec![
            monster.id.clone(),
            name,
            monster.sprite.clone(),
            monster.hp.to_string(),
            monster.attack.to_string(),
            monster.defense.to_string(),
            monster.xp.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} monsters", templates.roster().len());

    Ok(())
}
