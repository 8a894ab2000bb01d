//! Find command: look up box art for one game title.
//!
//! CHANGELOG:
//! - 10/16/2026 - Show the rejected best candidate on no-match
//! - 10/16/2026 - Initial implementation

use serde::Serialize;

use crate::engine::{Engine, MatchKind, MatchOutcome, NoMatchReason, Scope};
use crate::output::OutputControls;
use anyhow::Result;

#[derive(Serialize)]
struct FindReport<'a> {
    title: &'a str,
    platform: Option<&'a str>,
    #[serde(flatten)]
    outcome: MatchOutcome<'a>,
}

/// Look up `title`, optionally scoped by a platform hint.
pub fn run(engine: &Engine, title: &str, platform: Option<&str>, output: &OutputControls) -> Result<()> {
    let outcome = engine.find_match(platform, title);

    if output.json {
        output.print(&FindReport {
            title,
            platform,
            outcome,
        });
        return Ok(());
    }

    match &outcome {
        MatchOutcome::Match {
            entry,
            score,
            kind,
            scope,
        } => {
            let how = match (kind, score) {
                (MatchKind::ExactStem, _) => "exact".to_string(),
                (MatchKind::Scored, Some(score)) => format!("score {}", score),
                (MatchKind::Scored, None) => "scored".to_string(),
            };
            println!("{} [{}] ({})", entry.filename, entry.platform_folder, how);
            println!("  primary:   {}", entry.primary_url);
            println!("  secondary: {}", entry.secondary_url);
            if let Some(path) = &entry.absolute_path {
                println!("  path:      {}", path);
            }
            print_scope(scope);
        }
        MatchOutcome::NoMatch { reason, best, scope } => {
            println!("No match: {}", describe(*reason));
            if let Some(best) = best {
                println!(
                    "  best candidate: {} [{}] (score {})",
                    best.entry.filename, best.entry.platform_folder, best.score
                );
            }
            print_scope(scope);
        }
    }

    Ok(())
}

fn print_scope(scope: &Scope) {
    if let Some(resolution) = &scope.resolution {
        let searched = if scope.scoped { "scoped" } else { "whole catalog" };
        println!("  platform:  {} ({})", resolution.folder, searched);
    }
}

fn describe(reason: NoMatchReason) -> &'static str {
    match reason {
        NoMatchReason::EmptyCatalog => "box art cache is empty or missing",
        NoMatchReason::EmptyTitle => "title has no searchable characters",
        NoMatchReason::NoCandidates => "no candidates",
        NoMatchReason::LowConfidence => "best candidate below confidence threshold",
        NoMatchReason::PlatformMismatch => "best candidate is on a different platform",
    }
}
