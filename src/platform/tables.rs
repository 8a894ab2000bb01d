//! Curated platform-name tables.
//!
//! Folder names follow the libretro-thumbnails repository layout
//! (`<Vendor> - <System>`).

/// Platform names as the MiSTer API reports them, mapped straight to cache
/// folders.
pub const STATIC_SYSTEM_MAP: &[(&str, &str)] = &[
    ("NES", "Nintendo - Nintendo Entertainment System"),
    ("SNES", "Nintendo - Super Nintendo Entertainment System"),
    ("Game Boy", "Nintendo - Game Boy"),
    ("Game Boy Color", "Nintendo - Game Boy Color"),
    ("Game Boy Advance", "Nintendo - Game Boy Advance"),
    ("Genesis", "Sega - Mega Drive - Genesis"),
    ("Master System", "Sega - Master System - Mark III"),
    ("SMS", "Sega - Master System - Mark III"),
    ("PlayStation", "Sony - PlayStation"),
    ("PS2", "Sony - PlayStation 2"),
    ("PS3", "Sony - PlayStation 3"),
    ("PS4", "Sony - PlayStation 4"),
    ("Xbox", "Microsoft - Xbox"),
    ("Xbox 360", "Microsoft - Xbox 360"),
];

/// Human-friendly platform names, fuzzily matched against the cache folders
/// to build the derived alias map.
pub const PRETTY_PLATFORM_NAMES: &[&str] = &[
    "Nintendo Entertainment System",
    "Super Nintendo Entertainment System",
    "Nintendo 64",
    "Nintendo Game Boy",
    "Nintendo Game Boy Color",
    "Nintendo Game Boy Advance",
    "Nintendo Virtual Boy",
    "Nintendo Famicom Disk System",
    "Sega Genesis",
    "Sega Master System",
    "Sega Game Gear",
    "Sega CD",
    "Sega 32X",
    "Sega Saturn",
    "Sega SG-1000",
    "Sony PlayStation",
    "PC Engine TurboGrafx 16",
    "PC Engine CD TurboGrafx-CD",
    "SNK Neo Geo",
    "Neo Geo Pocket Color",
    "Atari 2600",
    "Atari 5200",
    "Atari 7800",
    "Atari Lynx",
    "Atari Jaguar",
    "Bandai WonderSwan",
    "Bandai WonderSwan Color",
    "ColecoVision",
    "Mattel Intellivision",
    "GCE Vectrex",
    "Commodore 64",
    "Commodore Amiga",
    "Microsoft MSX",
    "Sinclair ZX Spectrum",
    "Amstrad CPC",
    "Magnavox Odyssey2",
    "Fairchild Channel F",
    "Watara Supervision",
];

/// Abbreviations and regional/generational synonyms, each pointing at a
/// `PRETTY_PLATFORM_NAMES` entry.
pub const ABBREVIATION_OVERRIDES: &[(&str, &str)] = &[
    ("NES", "Nintendo Entertainment System"),
    ("Famicom", "Nintendo Entertainment System"),
    ("FC", "Nintendo Entertainment System"),
    ("SNES", "Super Nintendo Entertainment System"),
    ("Super Famicom", "Super Nintendo Entertainment System"),
    ("SFC", "Super Nintendo Entertainment System"),
    ("N64", "Nintendo 64"),
    ("GB", "Nintendo Game Boy"),
    ("GBC", "Nintendo Game Boy Color"),
    ("GBA", "Nintendo Game Boy Advance"),
    ("VB", "Nintendo Virtual Boy"),
    ("FDS", "Nintendo Famicom Disk System"),
    ("Mega Drive", "Sega Genesis"),
    ("MD", "Sega Genesis"),
    ("Mark III", "Sega Master System"),
    ("GG", "Sega Game Gear"),
    ("Mega CD", "Sega CD"),
    ("MegaCD", "Sega CD"),
    ("S32X", "Sega 32X"),
    ("PSX", "Sony PlayStation"),
    ("PS1", "Sony PlayStation"),
    ("TG16", "PC Engine TurboGrafx 16"),
    ("PCE", "PC Engine TurboGrafx 16"),
    ("TurboGrafx", "PC Engine TurboGrafx 16"),
    ("PCECD", "PC Engine CD TurboGrafx-CD"),
    ("NeoGeo", "SNK Neo Geo"),
    ("NGPC", "Neo Geo Pocket Color"),
    ("WSC", "Bandai WonderSwan Color"),
    ("C64", "Commodore 64"),
    ("Odyssey 2", "Magnavox Odyssey2"),
    ("ChannelF", "Fairchild Channel F"),
];

/// Direct lookup in `STATIC_SYSTEM_MAP` (exact, case-sensitive).
pub fn static_folder(hint: &str) -> Option<&'static str> {
    STATIC_SYSTEM_MAP
        .iter()
        .find(|(name, _)| *name == hint)
        .map(|(_, folder)| *folder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_folder_is_exact() {
        assert_eq!(
            static_folder("SNES"),
            Some("Nintendo - Super Nintendo Entertainment System")
        );
        assert_eq!(static_folder("snes"), None);
    }

    #[test]
    fn test_overrides_point_at_curated_names() {
        for (abbr, pretty) in ABBREVIATION_OVERRIDES {
            assert!(
                PRETTY_PLATFORM_NAMES.contains(pretty),
                "override {} -> {} has no curated name",
                abbr,
                pretty
            );
        }
    }
}
