/// Parse a `#rrggbb` (or `rrggbb`) tag into linear RGB.
pub fn parse_hex_color(tag: &str) -> Option<[f32; 3]> {
    let hex = tag.strip_prefix('#').unwrap_or(tag);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|c| srgb_to_linear(c as f32 / 255.0))
    };

    Some([channel(0)?, channel(2)?, channel(4)?])
}

pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
