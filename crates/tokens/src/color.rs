//! Hex color arithmetic.
//!
//! Invalid input is returned unchanged so a producer-supplied color name
//! (`"navy"`) survives instead of failing the run.

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.trim().trim_start_matches('#');
    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(expanded.get(i..i + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn format_hex(rgb: [i64; 3]) -> String {
    let [r, g, b] = rgb.map(|c| c.clamp(0, 255));
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Scale each channel by `percent` of itself: negative darkens, positive
/// lightens. Accepts 3- and 6-digit hex.
pub fn adjust_color(hex: &str, percent: i32) -> String {
    let Some(rgb) = parse_hex(hex) else {
        return hex.to_string();
    };
    let pct = f64::from(percent) / 100.0;
    format_hex(rgb.map(|c| {
        let c = f64::from(c);
        (c + c * pct).clamp(0.0, 255.0) as i64
    }))
}

/// Subtract `percent` of full scale from every channel.
pub fn darken(hex: &str, percent: u32) -> String {
    let Some(rgb) = parse_hex(hex) else {
        return hex.to_string();
    };
    let step = (255 * i64::from(percent)) / 100;
    format_hex(rgb.map(|c| i64::from(c) - step))
}

/// Move every channel `percent` of the way toward white.
pub fn lighten(hex: &str, percent: u32) -> String {
    let Some(rgb) = parse_hex(hex) else {
        return hex.to_string();
    };
    let factor = f64::from(percent) / 100.0;
    format_hex(rgb.map(|c| {
        let c = f64::from(c);
        (c + (255.0 - c) * factor) as i64
    }))
}
