//! Compiled-in color palettes.
//!
//! Every palette is WCAG AA compliant for `text` on `secondary`. The catalog is
//! fixed at build time and never mutated.

use serde::Serialize;

/// Palette used when a document names a scheme the catalog does not know.
pub const DEFAULT_SCHEME: &str = "forest_dawn";

/// A named, immutable four-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    /// Catalog key stored in `color_scheme`.
    pub key: &'static str,
    /// Human-readable name shown in the editor.
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
}

const fn palette(
    key: &'static str,
    name: &'static str,
    primary: &'static str,
    secondary: &'static str,
    accent: &'static str,
    text: &'static str,
) -> ColorPalette {
    ColorPalette { key, name, primary, secondary, accent, text }
}

/// The full catalog, in display order.
pub static PALETTES: [ColorPalette; 10] = [
    palette("forest_dawn", "Forest Dawn", "#2D5A3D", "#F4F1E8", "#8B9D77", "#1a1a1a"),
    palette("solar_noon", "Solar Noon", "#E8A924", "#1A1A2E", "#F5E6C3", "#F4F1E8"),
    palette("ocean_depths", "Ocean Depths", "#1B4965", "#F0F4F5", "#5FA8D3", "#1a1a1a"),
    palette("terracotta", "Terracotta", "#C04000", "#FFF8F0", "#E07A5F", "#1a1a1a"),
    palette("midnight_moss", "Midnight Moss", "#4A7C59", "#1A1A1A", "#6B8F71", "#E8E8E8"),
    palette("sunrise_blush", "Sunrise Blush", "#9B6B6B", "#FFFFFF", "#D4A5A5", "#1a1a1a"),
    palette("slate_sage", "Slate & Sage", "#4A5568", "#F7FAFC", "#68D391", "#1a1a1a"),
    palette("dusk_purple", "Dusk Purple", "#44337A", "#FAF5FF", "#9F7AEA", "#1a1a1a"),
    palette("desert_sand", "Desert Sand", "#8B7355", "#FFFEF7", "#C4A77D", "#1a1a1a"),
    palette("classic_mono", "Classic Mono", "#333333", "#FFFFFF", "#666666", "#1a1a1a"),
];

/// Look up a palette by key.
pub fn find(key: &str) -> Option<&'static ColorPalette> {
    PALETTES.iter().find(|p| p.key == key)
}

/// Resolve a scheme name, falling back to [`DEFAULT_SCHEME`] for unknown keys.
pub fn resolve(key: &str) -> &'static ColorPalette {
    find(key).unwrap_or(&PALETTES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_palette_is_first_entry() {
        assert_eq!(PALETTES[0].key, DEFAULT_SCHEME);
    }

    #[test]
    fn keys_are_unique() {
        for (i, a) in PALETTES.iter().enumerate() {
            for b in &PALETTES[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn resolves_known_scheme() {
        let p = resolve("midnight_moss");
        assert_eq!(p.name, "Midnight Moss");
        assert_eq!(p.text, "#E8E8E8");
    }

    #[test]
    fn unknown_scheme_falls_back_to_default() {
        assert_eq!(resolve("neon_vaporwave").key, DEFAULT_SCHEME);
        assert_eq!(resolve("").key, DEFAULT_SCHEME);
        assert!(find("Forest Dawn").is_none());
    }

    proptest! {
        #[test]
        fn resolve_never_fails(name in ".*") {
            let p = resolve(&name);
            if find(&name).is_none() {
                prop_assert_eq!(p.key, DEFAULT_SCHEME);
            } else {
                prop_assert_eq!(p.key, name.as_str());
            }
        }
    }
}
