//! Match selection: one query in, at most one artwork entry out.
//!
//! Flow: scope the pool by platform hint (falling back to the full catalog
//! when the hinted folder is empty), accept an exact filename-stem match
//! outright, otherwise score and rank every candidate, then apply the
//! confidence gate and the cross-platform veto.
//!
//! CHANGELOG:
//! - 10/16/2026 - Report the best rejected candidate on no-match
//! - 10/16/2026 - Initial implementation

use serde::Serialize;
use tracing::debug;

use crate::catalog::{ArtworkEntry, CatalogIndex};
use crate::config::{MatchConfig, MatchThresholds};
use crate::matching::scorer::{CandidateScorer, QueryProfile};
use crate::platform::{PlatformResolver, Resolution};

/// Why a lookup produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchReason {
    EmptyCatalog,
    EmptyTitle,
    NoCandidates,
    LowConfidence,
    PlatformMismatch,
}

/// How an accepted match was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    ExactStem,
    Scored,
}

/// A scored candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate<'a> {
    pub entry: &'a ArtworkEntry,
    pub score: i32,
}

/// Platform scoping applied to a query.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scope {
    /// The resolved platform hint, if any.
    pub resolution: Option<Resolution>,
    /// True when the candidate pool was restricted to the resolved folder.
    pub scoped: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MatchOutcome<'a> {
    Match {
        entry: &'a ArtworkEntry,
        /// Absent for exact-stem matches, which bypass scoring.
        score: Option<i32>,
        kind: MatchKind,
        scope: Scope,
    },
    NoMatch {
        reason: NoMatchReason,
        /// Top-ranked candidate that was rejected, for diagnostics.
        best: Option<Candidate<'a>>,
        scope: Scope,
    },
}

impl<'a> MatchOutcome<'a> {
    pub fn entry(&self) -> Option<&'a ArtworkEntry> {
        match self {
            MatchOutcome::Match { entry, .. } => Some(*entry),
            MatchOutcome::NoMatch { .. } => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Match { .. })
    }

    pub fn reason(&self) -> Option<NoMatchReason> {
        match self {
            MatchOutcome::Match { .. } => None,
            MatchOutcome::NoMatch { reason, .. } => Some(*reason),
        }
    }

    fn no_match(reason: NoMatchReason, best: Option<Candidate<'a>>, scope: Scope) -> Self {
        MatchOutcome::NoMatch {
            reason,
            best,
            scope,
        }
    }
}

/// Box art lookup engine over one loaded catalog. Read-only once built.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: CatalogIndex,
    resolver: PlatformResolver,
    scorer: CandidateScorer,
    thresholds: MatchThresholds,
}

impl Engine {
    /// Build the engine, deriving the platform alias map from `catalog`.
    pub fn build(catalog: CatalogIndex, config: &MatchConfig) -> Self {
        let resolver = PlatformResolver::build(
            catalog.platforms(),
            config.thresholds.alias_threshold,
            config.thresholds.platform_threshold,
        );
        debug!(
            entries = catalog.len(),
            aliases = resolver.aliases().len(),
            "Built box art engine"
        );
        Self {
            catalog,
            resolver,
            scorer: CandidateScorer::new(config.weights.clone()),
            thresholds: config.thresholds.clone(),
        }
    }

    pub fn catalog(&self) -> &CatalogIndex {
        &self.catalog
    }

    pub fn resolver(&self) -> &PlatformResolver {
        &self.resolver
    }

    /// Box art locators `(primary_url, secondary_url)` for a game, or a
    /// pair of `None` when nothing acceptable matches.
    pub fn find(&self, platform_hint: Option<&str>, title: &str) -> (Option<String>, Option<String>) {
        match self.find_match(platform_hint, title).entry() {
            Some(entry) => (
                Some(entry.primary_url.clone()),
                Some(entry.secondary_url.clone()),
            ),
            None => (None, None),
        }
    }

    /// Full lookup with the decision details.
    pub fn find_match(&self, platform_hint: Option<&str>, title: &str) -> MatchOutcome<'_> {
        let mut scope = Scope::default();

        if self.catalog.is_empty() {
            debug!(title, "Box art cache empty; no lookup");
            return MatchOutcome::no_match(NoMatchReason::EmptyCatalog, None, scope);
        }

        let title = title.trim();
        let query = QueryProfile::new(title, self.scorer.weights());
        if query.key.is_empty() {
            return MatchOutcome::no_match(NoMatchReason::EmptyTitle, None, scope);
        }

        scope.resolution = platform_hint.and_then(|hint| self.resolver.resolve(hint));
        let mut pool: Vec<&ArtworkEntry> = match &scope.resolution {
            Some(resolution) => self.catalog.entries_for(&resolution.folder),
            None => Vec::new(),
        };
        scope.scoped = !pool.is_empty();
        if pool.is_empty() {
            pool.extend(self.catalog.entries());
        }

        let title_lower = title.to_lowercase();
        if let Some(entry) = pool
            .iter()
            .copied()
            .find(|e| e.stem().to_lowercase() == title_lower)
        {
            // An exact title on another platform still loses to the hint.
            if vetoed(&scope, entry) {
                debug!(
                    found = %entry.platform_folder,
                    filename = %entry.filename,
                    "Exact stem match rejected: platform mismatch"
                );
                let best = Candidate {
                    entry,
                    score: self.scorer.score(entry.stem(), &entry.normalized_key, &query),
                };
                return MatchOutcome::no_match(NoMatchReason::PlatformMismatch, Some(best), scope);
            }
            debug!(
                platform = %entry.platform_folder,
                filename = %entry.filename,
                "Box art match (exact stem)"
            );
            return MatchOutcome::Match {
                entry,
                score: None,
                kind: MatchKind::ExactStem,
                scope,
            };
        }

        let mut ranked: Vec<Candidate<'_>> = pool
            .into_iter()
            .map(|entry| Candidate {
                entry,
                score: self.scorer.score(entry.stem(), &entry.normalized_key, &query),
            })
            .collect();
        rank(&mut ranked);

        let Some(top) = ranked.into_iter().next() else {
            debug!(title, "No box art candidates");
            return MatchOutcome::no_match(NoMatchReason::NoCandidates, None, scope);
        };

        let threshold = if scope.scoped {
            self.thresholds.scoped_threshold
        } else {
            self.thresholds.unscoped_threshold
        };
        if top.score < threshold {
            debug!(
                score = top.score,
                threshold,
                filename = %top.entry.filename,
                "Box art candidate below confidence gate"
            );
            return MatchOutcome::no_match(NoMatchReason::LowConfidence, Some(top), scope);
        }

        if vetoed(&scope, top.entry) {
            debug!(
                found = %top.entry.platform_folder,
                filename = %top.entry.filename,
                "Box art candidate rejected: platform mismatch"
            );
            return MatchOutcome::no_match(NoMatchReason::PlatformMismatch, Some(top), scope);
        }

        debug!(
            score = top.score,
            platform = %top.entry.platform_folder,
            filename = %top.entry.filename,
            "Box art match (scored)"
        );
        MatchOutcome::Match {
            entry: top.entry,
            score: Some(top.score),
            kind: MatchKind::Scored,
            scope,
        }
    }
}

/// True when a platform was resolved and `entry` lives in another folder.
fn vetoed(scope: &Scope, entry: &ArtworkEntry) -> bool {
    scope
        .resolution
        .as_ref()
        .is_some_and(|r| entry.platform_folder != r.folder)
}

/// Highest score first; ties go to the shorter filename, then name order.
fn rank(candidates: &mut [Candidate<'_>]) {
    candidates.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| {
                let a_len = a.entry.filename.chars().count();
                a_len.cmp(&b.entry.filename.chars().count())
            })
            .then_with(|| a.entry.filename.cmp(&b.entry.filename))
            .then_with(|| a.entry.platform_folder.cmp(&b.entry.platform_folder))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    const NES: &str = "Nintendo - Nintendo Entertainment System";
    const SNES: &str = "Nintendo - Super Nintendo Entertainment System";
    const GB: &str = "Nintendo - Game Boy";
    const PSX: &str = "Sony - PlayStation";

    fn entry(folder: &str, filename: &str) -> ArtworkEntry {
        ArtworkEntry::new(
            folder,
            filename,
            format!("raw/{}/{}", folder, filename),
            format!("blob/{}/{}", folder, filename),
        )
    }

    fn engine(entries: Vec<ArtworkEntry>) -> Engine {
        Engine::build(CatalogIndex::from_entries(entries), &MatchConfig::default())
    }

    #[test]
    fn test_empty_catalog_never_matches() {
        let engine = engine(Vec::new());
        let outcome = engine.find_match(Some("SNES"), "Chrono Trigger");
        assert_eq!(outcome.reason(), Some(NoMatchReason::EmptyCatalog));
        assert_eq!(engine.find(None, "anything"), (None, None));
        assert_eq!(engine.find(None, ""), (None, None));
    }

    #[test]
    fn test_exact_stem_bypasses_gate() {
        // Scored, this would be far below the unscoped gate after penalties
        let engine = engine(vec![
            entry(PSX, "Chrono Trigger (Demo) (Beta) (Sample).png"),
            entry(SNES, "Earthbound.png"),
        ]);
        let outcome = engine.find_match(None, "CHRONO TRIGGER (demo) (beta) (sample)");
        match outcome {
            MatchOutcome::Match { entry, kind, score, .. } => {
                assert_eq!(kind, MatchKind::ExactStem);
                assert_eq!(score, None);
                assert_eq!(entry.filename, "Chrono Trigger (Demo) (Beta) (Sample).png");
            }
            other => panic!("expected match, got {:?}", other),
        }
    }

    #[test]
    fn test_exact_stem_any_casing() {
        let engine = engine(vec![entry(SNES, "Chrono Trigger.png")]);
        let (raw, blob) = engine.find(Some("SNES"), "chrono trigger");
        assert_eq!(raw, Some(format!("raw/{}/Chrono Trigger.png", SNES)));
        assert!(blob.is_some());
    }

    #[test]
    fn test_clean_entry_beats_demo() {
        let engine = engine(vec![
            entry(SNES, "Super Mario World (Demo).png"),
            entry(SNES, "Super Mario World (USA).png"),
        ]);
        let outcome = engine.find_match(Some("SNES"), "Super Mario World");
        assert_eq!(
            outcome.entry().map(|e| e.filename.as_str()),
            Some("Super Mario World (USA).png")
        );
    }

    #[test]
    fn test_unrelated_title_below_gate() {
        let engine = engine(vec![entry(SNES, "Final Fantasy Tactics (USA).png")]);
        let outcome = engine.find_match(None, "Final Fantasy VII");
        assert_eq!(outcome.reason(), Some(NoMatchReason::LowConfidence));
        match outcome {
            MatchOutcome::NoMatch { best: Some(best), .. } => assert!(best.score < 80),
            other => panic!("expected rejected candidate, got {:?}", other),
        }
    }

    #[test]
    fn test_scoped_threshold_accepts_what_unscoped_rejects() {
        // Scores 85: prefix 96, rev -5, extra annotation -3, length -3
        let engine = engine(vec![
            entry(SNES, "Super Metroid (USA) (Rev 1) (Virtual Console).png"),
            entry(NES, "Metroid (USA).png"),
        ]);

        let scoped = engine.find_match(Some("SNES"), "Super Metroid");
        match &scoped {
            MatchOutcome::Match { score, scope, .. } => {
                assert_eq!(*score, Some(85));
                assert!(scope.scoped);
            }
            other => panic!("expected scoped match, got {:?}", other),
        }

        let unscoped = engine.find_match(None, "Super Metroid");
        assert_eq!(unscoped.reason(), Some(NoMatchReason::LowConfidence));
        match unscoped {
            MatchOutcome::NoMatch { best: Some(best), scope, .. } => {
                assert_eq!(best.score, 85);
                assert!(!scope.scoped);
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_hint_searches_unscoped() {
        let engine = engine(vec![entry(SNES, "Super Metroid (USA).png")]);
        let outcome = engine.find_match(Some("Totally Unknown Console"), "Super Metroid");
        match outcome {
            MatchOutcome::Match { score, scope, .. } => {
                assert_eq!(score, Some(96));
                assert!(scope.resolution.is_none());
                assert!(!scope.scoped);
            }
            other => panic!("expected match, got {:?}", other),
        }
    }

    #[test]
    fn test_platform_mismatch_veto() {
        // NES resolves through the static map, but the cache has no NES folder,
        // so the lookup falls back to every platform.
        let engine = engine(vec![entry(GB, "Tetris (World).png")]);
        let outcome = engine.find_match(Some("NES"), "Tetris");
        assert_eq!(outcome.reason(), Some(NoMatchReason::PlatformMismatch));
        match outcome {
            MatchOutcome::NoMatch { best: Some(best), scope, .. } => {
                assert!(best.score >= 90, "score {} should clear the unscoped gate", best.score);
                assert_eq!(scope.resolution.map(|r| r.folder).as_deref(), Some(NES));
                assert!(!scope.scoped);
            }
            other => panic!("expected veto, got {:?}", other),
        }

        // Without the hint the same candidate is accepted
        assert!(engine.find_match(None, "Tetris").is_match());
    }

    #[test]
    fn test_exact_stem_on_other_platform_is_vetoed() {
        let engine = engine(vec![entry(GB, "Tetris.png")]);
        let outcome = engine.find_match(Some("NES"), "Tetris");
        assert_eq!(outcome.reason(), Some(NoMatchReason::PlatformMismatch));
        match outcome {
            MatchOutcome::NoMatch { best: Some(best), scope, .. } => {
                assert_eq!(best.entry.platform_folder, GB);
                assert_eq!(best.score, 100);
                assert!(!scope.scoped);
            }
            other => panic!("expected veto, got {:?}", other),
        }
        assert_eq!(engine.find(Some("NES"), "Tetris"), (None, None));

        // Same title with a matching or absent hint is still an exact hit
        for hint in [None, Some("Game Boy")] {
            match engine.find_match(hint, "Tetris") {
                MatchOutcome::Match { kind, .. } => assert_eq!(kind, MatchKind::ExactStem),
                other => panic!("expected exact match for {:?}, got {:?}", hint, other),
            }
        }
    }

    #[test]
    fn test_scoping_prefers_hinted_platform() {
        let engine = engine(vec![
            entry(NES, "Tetris (USA).png"),
            entry(GB, "Tetris (World) (Rev 1).png"),
        ]);
        let outcome = engine.find_match(Some("Game Boy"), "Tetris");
        assert_eq!(outcome.entry().map(|e| e.platform_folder.as_str()), Some(GB));
    }

    #[test]
    fn test_tie_prefers_shorter_filename() {
        let engine = engine(vec![
            entry(SNES, "Tetris Attack (USA).png"),
            entry(SNES, "Tetris Attack (Europe).png"),
        ]);
        let outcome = engine.find_match(Some("SNES"), "Tetris Attack");
        assert_eq!(
            outcome.entry().map(|e| e.filename.as_str()),
            Some("Tetris Attack (USA).png")
        );
    }

    #[test]
    fn test_region_hint_breaks_tie() {
        // Both region-free and Europe stems are prefixes of the query key (96);
        // the region bonus outweighs the shorter-filename tiebreak.
        let engine = engine(vec![
            entry(SNES, "Tetris Attack (USA).png"),
            entry(SNES, "Tetris Attack.png"),
            entry(SNES, "Tetris Attack (Europe).png"),
        ]);
        match engine.find_match(Some("SNES"), "Tetris Attack (Europe, Australia)") {
            MatchOutcome::Match {
                entry, score, kind, ..
            } => {
                assert_eq!(kind, MatchKind::Scored);
                assert_eq!(entry.filename, "Tetris Attack (Europe).png");
                assert_eq!(score, Some(101));
            }
            other => panic!("expected scored match, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_title() {
        let engine = engine(vec![entry(SNES, "Tetris Attack (USA).png")]);
        let outcome = engine.find_match(Some("SNES"), "  --  ");
        assert_eq!(outcome.reason(), Some(NoMatchReason::EmptyTitle));
    }
}
