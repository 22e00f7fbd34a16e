//! Color normalization per [CSS Color Module Level 4](https://www.w3.org/TR/css-color-4/).
//!
//! Every CSS color value funnels into one [`Rgba`] form. Normalization
//! never fails: unrecognized input falls back to opaque black, matching
//! how browsers treat invalid color declarations on a best-effort
//! converter.

use std::fmt;

/// An sRGB color with alpha.
///
/// [§ 4.1](https://www.w3.org/TR/css-color-4/#numeric-srgb) "The RGB
/// cube... with each channel ranging from 0 to 255."
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel, 0-255.
    pub r: u8,
    /// Green channel, 0-255.
    pub g: u8,
    /// Blue channel, 0-255.
    pub b: u8,
    /// Alpha, 0.0-1.0, rounded to two decimal places.
    pub a: f32,
}

impl Rgba {
    /// Opaque black, the fallback for unrecognized input.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };

    /// Create a color, clamping alpha to `[0, 1]` and rounding it to two
    /// decimal places.
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r,
            g,
            b,
            a: round_alpha(a.clamp(0.0, 1.0)),
        }
    }

    /// Whether the color is fully transparent.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.a == 0.0
    }

    /// Render as a CSS `rgba()` function, e.g. `rgba(255, 0, 0, 1)`.
    ///
    /// Normalizing this output yields the same color back.
    #[must_use]
    pub fn to_css_string(&self) -> String {
        format!("rgba({self})")
    }
}

impl fmt::Display for Rgba {
    /// The comma-separated argument form, e.g. `255, 0, 0, 0.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.r, self.g, self.b, format_alpha(self.a))
    }
}

fn round_alpha(a: f32) -> f32 {
    (a * 100.0).round() / 100.0
}

/// Whole alphas print bare (`0`, `1`); fractional alphas keep two decimal
/// places (`0.50`).
fn format_alpha(a: f32) -> String {
    if a.fract() == 0.0 {
        (a as i64).to_string()
    } else {
        format!("{a:.2}")
    }
}

/// [§ 4 Representing Colors](https://www.w3.org/TR/css-color-4/#color-syntax)
///
/// Normalize a CSS color value to [`Rgba`]. Handles hex notation (3, 6,
/// and 8 digits), `rgb()`/`rgba()` functions, and named colors. Anything
/// else is opaque black.
#[must_use]
pub fn normalize(value: &str) -> Rgba {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return from_hex(hex).unwrap_or(Rgba::BLACK);
    }

    let lower = value.to_ascii_lowercase();
    if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
        return from_rgb_function(&lower).unwrap_or(Rgba::BLACK);
    }

    from_name(&lower).unwrap_or(Rgba::BLACK)
}

/// [§ 5 Hex notation](https://www.w3.org/TR/css-color-4/#hex-notation)
///
/// "The three-digit notation is converted to the six-digit form by
/// replicating digits."
fn from_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_string(),
        _ => return None,
    };

    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();

    let r = byte(0)?;
    let g = byte(2)?;
    let b = byte(4)?;
    let a = if expanded.len() == 8 {
        f32::from(byte(6)?) / 255.0
    } else {
        1.0
    };

    Some(Rgba::new(r, g, b, a))
}

/// [§ 4.1 `rgb()` and `rgba()`](https://www.w3.org/TR/css-color-4/#rgb-functions)
///
/// "`rgba()` is an alias of `rgb()`." Accepts the comma-separated legacy
/// syntax with an optional alpha argument.
fn from_rgb_function(value: &str) -> Option<Rgba> {
    let inner = value
        .split_once('(')?
        .1
        .strip_suffix(')')?;

    let args: Vec<&str> = inner.split(',').map(str::trim).collect();
    if args.len() != 3 && args.len() != 4 {
        return None;
    }

    let r = parse_channel(args[0])?;
    let g = parse_channel(args[1])?;
    let b = parse_channel(args[2])?;
    let a = if args.len() == 4 {
        parse_alpha(args[3])?
    } else {
        1.0
    };

    Some(Rgba::new(r, g, b, a))
}

/// "Values outside these ranges are not invalid, but are clamped."
fn parse_channel(arg: &str) -> Option<u8> {
    let value = if let Some(percent) = arg.strip_suffix('%') {
        percent.trim().parse::<f32>().ok()? * 255.0 / 100.0
    } else {
        arg.parse::<f32>().ok()?
    };
    Some(value.clamp(0.0, 255.0).round() as u8)
}

fn parse_alpha(arg: &str) -> Option<f32> {
    let value = if let Some(percent) = arg.strip_suffix('%') {
        percent.trim().parse::<f32>().ok()? / 100.0
    } else {
        arg.parse::<f32>().ok()?
    };
    Some(value.clamp(0.0, 1.0))
}

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
fn from_name(name: &str) -> Option<Rgba> {
    let (r, g, b, a) = match name {
        "transparent" => (0, 0, 0, 0.0),
        "black" => (0, 0, 0, 1.0),
        "silver" => (192, 192, 192, 1.0),
        "gray" | "grey" => (128, 128, 128, 1.0),
        "white" => (255, 255, 255, 1.0),
        "maroon" => (128, 0, 0, 1.0),
        "red" => (255, 0, 0, 1.0),
        "purple" => (128, 0, 128, 1.0),
        "fuchsia" | "magenta" => (255, 0, 255, 1.0),
        "green" => (0, 128, 0, 1.0),
        "lime" => (0, 255, 0, 1.0),
        "olive" => (128, 128, 0, 1.0),
        "yellow" => (255, 255, 0, 1.0),
        "navy" => (0, 0, 128, 1.0),
        "blue" => (0, 0, 255, 1.0),
        "teal" => (0, 128, 128, 1.0),
        "aqua" | "cyan" => (0, 255, 255, 1.0),
        "orange" => (255, 165, 0, 1.0),
        "aliceblue" => (240, 248, 255, 1.0),
        "beige" => (245, 245, 220, 1.0),
        "brown" => (165, 42, 42, 1.0),
        "coral" => (255, 127, 80, 1.0),
        "crimson" => (220, 20, 60, 1.0),
        "darkblue" => (0, 0, 139, 1.0),
        "darkgray" | "darkgrey" => (169, 169, 169, 1.0),
        "darkgreen" => (0, 100, 0, 1.0),
        "darkorange" => (255, 140, 0, 1.0),
        "darkred" => (139, 0, 0, 1.0),
        "gold" => (255, 215, 0, 1.0),
        "hotpink" => (255, 105, 180, 1.0),
        "indigo" => (75, 0, 130, 1.0),
        "ivory" => (255, 255, 240, 1.0),
        "khaki" => (240, 230, 140, 1.0),
        "lavender" => (230, 230, 250, 1.0),
        "lightblue" => (173, 216, 230, 1.0),
        "lightgray" | "lightgrey" => (211, 211, 211, 1.0),
        "lightgreen" => (144, 238, 144, 1.0),
        "lightyellow" => (255, 255, 224, 1.0),
        "pink" => (255, 192, 203, 1.0),
        "plum" => (221, 160, 221, 1.0),
        "salmon" => (250, 128, 114, 1.0),
        "skyblue" => (135, 206, 235, 1.0),
        "slategray" | "slategrey" => (112, 128, 144, 1.0),
        "tan" => (210, 180, 140, 1.0),
        "tomato" => (255, 99, 71, 1.0),
        "turquoise" => (64, 224, 208, 1.0),
        "violet" => (238, 130, 238, 1.0),
        "wheat" => (245, 222, 179, 1.0),
        _ => return None,
    };
    Some(Rgba::new(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_hex() {
        assert_eq!(normalize("#ff0000"), Rgba::new(255, 0, 0, 1.0));
    }

    #[test]
    fn three_digit_hex_replicates_digits() {
        assert_eq!(normalize("#f0a"), Rgba::new(255, 0, 170, 1.0));
    }

    #[test]
    fn eight_digit_hex_carries_alpha() {
        let color = normalize("#ff000080");
        assert_eq!((color.r, color.g, color.b), (255, 0, 0));
        assert_eq!(color.a, 0.5);
    }

    #[test]
    fn rgb_function() {
        assert_eq!(normalize("rgb(1, 2, 3)"), Rgba::new(1, 2, 3, 1.0));
    }

    #[test]
    fn rgba_function_with_alpha() {
        assert_eq!(normalize("rgba(0, 0, 0, 0.25)"), Rgba::new(0, 0, 0, 0.25));
    }

    #[test]
    fn channels_clamp() {
        assert_eq!(normalize("rgb(300, -5, 0)"), Rgba::new(255, 0, 0, 1.0));
    }

    #[test]
    fn named_colors() {
        assert_eq!(normalize("red"), Rgba::new(255, 0, 0, 1.0));
        assert_eq!(normalize("RED"), Rgba::new(255, 0, 0, 1.0));
        assert!(normalize("transparent").is_transparent());
    }

    #[test]
    fn invalid_input_falls_back_to_black() {
        assert_eq!(normalize("not-a-color"), Rgba::BLACK);
        assert_eq!(normalize("#zzz"), Rgba::BLACK);
        assert_eq!(normalize("#ff00"), Rgba::BLACK);
        assert_eq!(normalize("rgb(1, 2)"), Rgba::BLACK);
        assert_eq!(normalize(""), Rgba::BLACK);
    }

    #[test]
    fn display_formats_alpha() {
        assert_eq!(Rgba::new(255, 0, 0, 1.0).to_string(), "255, 0, 0, 1");
        assert_eq!(Rgba::new(0, 0, 0, 0.5).to_string(), "0, 0, 0, 0.50");
        assert_eq!(Rgba::new(0, 0, 0, 0.0).to_string(), "0, 0, 0, 0");
    }

    #[test]
    fn css_round_trip_is_stable() {
        for input in ["#336699", "rgba(10, 20, 30, 0.75)", "teal", "nonsense"] {
            let once = normalize(input);
            let twice = normalize(&once.to_css_string());
            assert_eq!(once, twice, "{input}");
        }
    }
}
