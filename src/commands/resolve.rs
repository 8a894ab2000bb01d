//! Resolve command: map a platform hint to a cache folder.

use serde::Serialize;

use crate::engine::Engine;
use crate::output::OutputControls;
use crate::platform::{Resolution, Strategy};
use anyhow::Result;

const SUGGESTION_COUNT: usize = 3;

#[derive(Serialize)]
struct Suggestion<'a> {
    folder: &'a str,
    similarity: f64,
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    hint: &'a str,
    resolution: Option<Resolution>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<Suggestion<'a>>,
}

pub fn run(engine: &Engine, hint: &str, output: &OutputControls) -> Result<()> {
    let resolver = engine.resolver();
    let resolution = resolver.resolve(hint);
    let suggestions = if resolution.is_none() {
        resolver
            .suggest(hint, SUGGESTION_COUNT)
            .into_iter()
            .map(|(folder, similarity)| Suggestion { folder, similarity })
            .collect()
    } else {
        Vec::new()
    };

    if output.json {
        output.print(&ResolveReport {
            hint,
            resolution,
            suggestions,
        });
        return Ok(());
    }

    match resolution {
        Some(r) => {
            let via = match r.strategy {
                Strategy::Static => "static map".to_string(),
                Strategy::Alias => "alias".to_string(),
                Strategy::FolderExact => "folder name".to_string(),
                Strategy::Fuzzy => match r.score {
                    Some(score) => format!("fuzzy {:.2}", score),
                    None => "fuzzy".to_string(),
                },
            };
            println!("{} -> {} ({})", hint, r.folder, via);
            if !engine.catalog().has_platform(&r.folder) {
                println!("  (folder not present in the box art cache)");
            }
        }
        None => {
            println!("Unrecognized platform: {}", hint);
            if !suggestions.is_empty() {
                println!("Did you mean:");
                for s in &suggestions {
                    println!("  {} ({:.2})", s.folder, s.similarity);
                }
            }
        }
    }

    Ok(())
}
