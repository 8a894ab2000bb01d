//! Presence command: turn now-playing snapshots into presence payloads.
//!
//! Input is a stream of MiSTer now-playing JSON objects (one per line or
//! pretty-printed), read from a file or stdin. The session start carries
//! over while the game is unchanged.
//!
//! CHANGELOG:
//! - 10/16/2026 - Accept a stream of snapshots
//! - 10/16/2026 - Initial implementation

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use chrono::Utc;

use crate::config::PresenceConfig;
use crate::engine::Engine;
use crate::output::OutputControls;
use crate::presence::{format_elapsed, NowPlaying, PresenceBuilder, PresenceTracker};
use anyhow::{Context, Result};

pub fn run(
    engine: &Engine,
    config: &PresenceConfig,
    input: Option<&Path>,
    output: &OutputControls,
) -> Result<()> {
    let snapshots = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open now-playing input: {:?}", path))?;
            read_snapshots(BufReader::new(file))?
        }
        None => read_snapshots(io::stdin().lock())?,
    };

    let builder = PresenceBuilder::new(engine, config);
    let mut tracker = PresenceTracker::new(Utc::now());

    for now_playing in &snapshots {
        let now = Utc::now();
        tracker.observe(now_playing, now);
        let payload = builder.build(now_playing, tracker.start());

        if output.json {
            output.print(&payload);
            continue;
        }

        println!("{} | {}", payload.details, payload.state);
        println!("  large: {} ({})", payload.large_image, payload.large_text);
        println!("  small: {} ({})", payload.small_image, payload.small_text);
        for button in &payload.buttons {
            println!("  button: {} -> {}", button.label, button.url);
        }
        println!("  playing {}", format_elapsed(tracker.start(), now));
    }

    Ok(())
}

/// Parse a whitespace-separated stream of now-playing objects.
pub fn read_snapshots<R: Read>(reader: R) -> Result<Vec<NowPlaying>> {
    serde_json::Deserializer::from_reader(reader)
        .into_iter::<NowPlaying>()
        .map(|snapshot| snapshot.context("Invalid now-playing JSON"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_snapshots_stream() {
        let input = "{\"core\":\"SNES\",\"systemName\":\"SNES\",\"gameName\":\"Super Metroid\"}\n\
                     \n\
                     {\"core\":\"MENU\"}\n";
        let snapshots = read_snapshots(input.as_bytes()).unwrap();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].game_name, "Super Metroid");
        assert!(snapshots[1].in_menu());
    }

    #[test]
    fn test_read_snapshots_reports_line() {
        let err = read_snapshots("{}\nnot json\n".as_bytes()).unwrap_err();
        assert!(format!("{:#}", err).contains("line 2"));
    }
}
