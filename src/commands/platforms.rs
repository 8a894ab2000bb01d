//! Platform listing commands: platforms, aliases.

use serde::Serialize;

use crate::engine::Engine;
use crate::output::OutputControls;
use anyhow::Result;

#[derive(Serialize)]
struct PlatformRow<'a> {
    folder: &'a str,
    entries: usize,
}

#[derive(Serialize)]
struct AliasRow<'a> {
    alias: &'a str,
    folder: &'a str,
}

/// List platform folders present in the cache.
pub fn list(engine: &Engine, output: &OutputControls) -> Result<()> {
    let rows: Vec<PlatformRow> = engine
        .catalog()
        .platform_counts()
        .into_iter()
        .map(|(folder, entries)| PlatformRow { folder, entries })
        .collect();

    if output.json {
        output.print(&rows);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No platforms found.");
        println!("Is the box art cache built? Pass --catalog or set MISTER_BOXART_CACHE.");
        return Ok(());
    }

    println!("Platforms ({}):", rows.len());
    println!("{}", "-".repeat(50));
    for row in &rows {
        println!("{:>6}  {}", row.entries, row.folder);
    }
    Ok(())
}

/// List the alias map derived from the cache's folders.
pub fn aliases(engine: &Engine, output: &OutputControls) -> Result<()> {
    let rows: Vec<AliasRow> = engine
        .resolver()
        .aliases()
        .iter()
        .map(|(alias, folder)| AliasRow { alias, folder })
        .collect();

    if output.json {
        output.print(&rows);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No aliases (no platform folders loaded).");
        return Ok(());
    }

    println!("Aliases ({}):", rows.len());
    println!("{}", "-".repeat(50));
    for row in &rows {
        println!("{} -> {}", row.alias, row.folder);
    }
    Ok(())
}
