//! Presence payloads: decorate the console's now-playing state with box art.
//!
//! Polling the console and talking to the presence service happen elsewhere;
//! this module only turns one now-playing snapshot into a payload.
//!
//! CHANGELOG:
//! - 10/16/2026 - Session tracking and elapsed-time formatting
//! - 10/16/2026 - Initial implementation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::PresenceConfig;
use crate::engine::Engine;

const DEFAULT_STATE: &str = "MiSTer FPGA";
const MENU_DETAILS: &str = "In Menu";
const UNKNOWN_GAME: &str = "Unknown";
const BOX_ART_LABEL: &str = "Box Art";

/// Now-playing snapshot as reported by the MiSTer API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NowPlaying {
    pub core: String,
    pub system_name: String,
    pub game_name: String,
}

impl NowPlaying {
    pub fn in_menu(&self) -> bool {
        self.system_name.is_empty() && self.game_name.is_empty()
    }

    /// Session identity used for change detection.
    pub fn session_key(&self) -> String {
        format!("{}/{}", self.system_name, self.game_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Button {
    pub label: String,
    pub url: String,
}

/// Presence update payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresencePayload {
    pub details: String,
    pub state: String,
    /// Session start, unix seconds.
    pub start: i64,
    pub large_image: String,
    pub large_text: String,
    pub small_image: String,
    pub small_text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

/// Builds payloads from snapshots using a loaded engine.
pub struct PresenceBuilder<'a> {
    engine: &'a Engine,
    config: &'a PresenceConfig,
}

impl<'a> PresenceBuilder<'a> {
    pub fn new(engine: &'a Engine, config: &'a PresenceConfig) -> Self {
        Self { engine, config }
    }

    pub fn build(&self, now_playing: &NowPlaying, start: DateTime<Utc>) -> PresencePayload {
        let fallback = self.config.fallback_image.clone();

        if now_playing.in_menu() {
            return PresencePayload {
                details: MENU_DETAILS.to_string(),
                state: DEFAULT_STATE.to_string(),
                start: start.timestamp(),
                large_image: fallback.clone(),
                large_text: MENU_DETAILS.to_string(),
                small_image: fallback,
                small_text: DEFAULT_STATE.to_string(),
                buttons: Vec::new(),
            };
        }

        let details = non_empty(&now_playing.game_name).unwrap_or(UNKNOWN_GAME).to_string();
        let state = non_empty(&now_playing.system_name)
            .or_else(|| non_empty(&now_playing.core))
            .unwrap_or(DEFAULT_STATE)
            .to_string();

        let hint = non_empty(&now_playing.system_name).or_else(|| non_empty(&now_playing.core));
        let small_image = match hint.and_then(|h| self.config.assets.get(h)) {
            Some(asset) => {
                debug!(asset = %asset, hint = ?hint, "Using small image asset");
                asset.clone()
            }
            None => fallback.clone(),
        };

        let (raw_url, blob_url) = self
            .engine
            .find(non_empty(&now_playing.system_name), &now_playing.game_name);
        match &raw_url {
            Some(url) => info!(url = %url, "Using box art"),
            None => info!(fallback = %fallback, "No box art match; using fallback image"),
        }

        let buttons = blob_url
            .map(|url| {
                vec![Button {
                    label: BOX_ART_LABEL.to_string(),
                    url,
                }]
            })
            .unwrap_or_default();

        PresencePayload {
            large_text: details.clone(),
            small_text: state.clone(),
            details,
            state,
            start: start.timestamp(),
            large_image: raw_url.unwrap_or(fallback),
            small_image,
            buttons,
        }
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

/// Tracks the start time of the current play session.
#[derive(Debug, Clone)]
pub struct PresenceTracker {
    start: DateTime<Utc>,
    last_session: Option<String>,
}

impl PresenceTracker {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            start: now,
            last_session: None,
        }
    }

    /// Record a snapshot; resets the start time when the session changed.
    ///
    /// Returns true on a change.
    pub fn observe(&mut self, now_playing: &NowPlaying, now: DateTime<Utc>) -> bool {
        let session = now_playing.session_key();
        if self.last_session.as_deref() == Some(session.as_str()) {
            return false;
        }
        info!(
            game = %now_playing.game_name,
            core = %now_playing.core,
            "Detected change"
        );
        self.start = now;
        self.last_session = Some(session);
        true
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }
}

/// Human-readable session length: `for 1d 2h 3m`, `for 2h 3m`, or `for 3m`.
pub fn format_elapsed(start: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - start).num_seconds().max(0);
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    if days > 0 {
        format!("for {}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("for {}h {}m", hours, minutes)
    } else {
        format!("for {}m", minutes)
    }
}
