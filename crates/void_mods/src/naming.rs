//! Display names for mod catalogs
//!
//! Names are persisted by hosts (menus, save files), so the derivation must
//! stay stable: strip the extension, turn underscores into spaces, lower-case
//! everything, then capitalise the first letter of every word.

use std::path::Path;

/// Derive a display name from a file stem.
///
/// `rare_sword_pack` becomes `Rare Sword Pack`. Whitespace is kept as-is.
pub fn display_name(stem: &str) -> String {
    let lowered = stem.replace('_', " ").to_lowercase();
    let mut name = String::with_capacity(lowered.len());
    let mut word_start = true;

    for c in lowered.chars() {
        if c.is_whitespace() {
            word_start = true;
            name.push(c);
        } else if word_start {
            name.extend(c.to_uppercase());
            word_start = false;
        } else {
            name.push(c);
        }
    }

    name
}

/// Derive a display name from a catalog path
pub fn display_name_for_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    Some(display_name(stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("rare_sword_pack"), "Rare Sword Pack");
        assert_eq!(display_name("HD_TEXTURES"), "Hd Textures");
        assert_eq!(display_name("single"), "Single");
        assert_eq!(display_name(""), "");
        assert_eq!(display_name("2ND_edition"), "2nd Edition");
    }

    #[test]
    fn test_display_name_keeps_spacing() {
        assert_eq!(display_name("double__underscore"), "Double  Underscore");
        assert_eq!(display_name("_leading"), " Leading");
        assert_eq!(display_name("mixed_case Words"), "Mixed Case Words");
    }

    #[test]
    fn test_display_name_for_path() {
        let name = display_name_for_path(Path::new("/games/mods/rare_sword_pack.json"));
        assert_eq!(name.as_deref(), Some("Rare Sword Pack"));

        let name = display_name_for_path(Path::new("mods/knights_v2.JSON"));
        assert_eq!(name.as_deref(), Some("Knights V2"));

        assert!(display_name_for_path(Path::new("/")).is_none());
    }
}
