use iced::Color;

/// Pixels per `rem` unit.
const REM_PX: f32 = 16.0;

/// Parse a CSS color string.
///
/// Supports `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(..)`, `rgba(..)`
/// and `transparent`. Returns `None` for anything else.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("transparent") {
        return Some(Color::TRANSPARENT);
    }

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = value.to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    parse_rgb_args(args)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let digits: Vec<u8> = match hex.len() {
        3 | 4 => hex
            .chars()
            .map(|c| {
                let v = c.to_digit(16).unwrap_or(0) as u8;
                v << 4 | v
            })
            .collect(),
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
            .collect::<Option<Vec<u8>>>()?,
        _ => return None,
    };

    let alpha = digits.get(3).map_or(1.0, |a| f32::from(*a) / 255.0);
    Some(Color::from_rgba8(digits[0], digits[1], digits[2], alpha))
}

fn parse_rgb_args(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args
        .split([',', '/', ' '])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if !(3..=4).contains(&parts.len()) {
        return None;
    }

    let mut channels = [0u8; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let value = match part.strip_suffix('%') {
            Some(percent) => percent.parse::<f32>().ok()? / 100.0 * 255.0,
            None => part.parse::<f32>().ok()?,
        };
        *slot = value.round().clamp(0.0, 255.0) as u8;
    }

    let alpha = match parts.get(3) {
        Some(part) => match part.strip_suffix('%') {
            Some(percent) => percent.parse::<f32>().ok()? / 100.0,
            None => part.parse::<f32>().ok()?,
        },
        None => 1.0,
    };

    Some(Color::from_rgba8(
        channels[0],
        channels[1],
        channels[2],
        alpha.clamp(0.0, 1.0),
    ))
}

/// Resolve a CSS border radius against a square box of side `extent`.
///
/// Percentages are relative to the box side, `px`/unitless values are taken
/// as pixels, `rem` uses 16px and `em` uses `font_size`. Results are capped at
/// half the side, where the corners meet. Unparseable values yield `None`.
pub fn parse_radius(value: &str, extent: f32, font_size: f32) -> Option<f32> {
    let value = value.trim();
    let (number, multiplier, divisor) = if let Some(n) = value.strip_suffix('%') {
        (n, extent, 100.0)
    } else if let Some(n) = value.strip_suffix("px") {
        (n, 1.0, 1.0)
    } else if let Some(n) = value.strip_suffix("rem") {
        (n, REM_PX, 1.0)
    } else if let Some(n) = value.strip_suffix("em") {
        (n, font_size, 1.0)
    } else {
        (value, 1.0, 1.0)
    };

    let number = number.trim().parse::<f32>().ok()?;
    if !number.is_finite() || number < 0.0 {
        return None;
    }

    Some((number * multiplier / divisor).min(extent / 2.0))
}

/// Linear interpolation between two colors.
pub(crate) fn mix(from: Color, to: Color, t: f32) -> Color {
    Color {
        r: lerp(from.r, to.r, t),
        g: lerp(from.g, to.g, t),
        b: lerp(from.b, to.b, t),
        a: lerp(from.a, to.a, t),
    }
}

pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
