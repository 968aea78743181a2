use std::path::Path;

use cq_core::render;

pub fn run(templates: Option<&Path>) -> Result<(), String> {
    let templates = super::load_templates(templates)?;
    let grid = templates.map().grid();

    println!(
        "{}",
        render::ascii(&templates, grid, Some(templates.start()))
    );
    println!();
    println!(
        "  {}x{} | {} start | {} wall | {} floor | {} monster | {} boss",
        grid.width(),
        grid.height(),
        render::PLAYER,
        render::WALL,
        render::FLOOR,
        render::MONSTER,
        render::BOSS,
    );
    println!("  {} monsters placed", grid.markers().count());

    Ok(())
}
