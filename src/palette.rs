use egui::Color32;

/// Preset swatches shown under the controls, in display order
pub const PALETTE_HEX: [&str; 20] = [
    "#000000", "#ffffff", "#ff0000", "#00ff00", "#0000ff",
    "#ffff00", "#00ffff", "#ff00ff", "#ff9900", "#9900ff",
    "#0099ff", "#ff0099", "#99ff00", "#00ff99", "#ff6600",
    "#6600ff", "#0066ff", "#ff0066", "#66ff00", "#00ff66",
];

/// Parse `#rrggbb` (leading `#` optional, case-insensitive)
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Lowercase `#rrggbb`; alpha is ignored
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}

/// The preset colors
pub fn colors() -> impl Iterator<Item = Color32> {
    PALETTE_HEX.iter().filter_map(|hex| parse_hex(hex))
}

/// Index of the swatch matching `color`, if it is a preset
pub fn active_swatch(color: Color32) -> Option<usize> {
    colors().position(|c| c == color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_parse() {
        assert_eq!(colors().count(), PALETTE_HEX.len());
        for hex in PALETTE_HEX {
            let color = parse_hex(hex).unwrap();
            assert_eq!(to_hex(color), hex);
        }
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!(parse_hex("FF9900"), Some(Color32::from_rgb(255, 153, 0)));
        assert_eq!(parse_hex("#ff9900"), Some(Color32::from_rgb(255, 153, 0)));
        assert_eq!(parse_hex("#ff990"), None);
        assert_eq!(parse_hex("#gg0000"), None);
        assert_eq!(parse_hex("#ÿÿÿ"), None);
    }

    #[test]
    fn test_active_swatch() {
        assert_eq!(active_swatch(Color32::BLACK), Some(0));
        assert_eq!(active_swatch(Color32::from_rgb(0, 255, 102)), Some(19));
        assert_eq!(active_swatch(Color32::from_rgb(1, 2, 3)), None);
    }
}
