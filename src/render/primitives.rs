use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Parses `#rrggbb` series colors as found in chart metadata.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let [red, green, blue] = parse_hex_channels(hex)?;
        Ok(Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        ))
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Converts a `#rrggbb` color plus optional alpha into a CSS color string.
///
/// `("#3DC23F", None) -> "rgb(61, 194, 63)"`,
/// `("#3DC23F", Some(0.5)) -> "rgba(61, 194, 63, 0.5)"`. A non-finite alpha is
/// ignored. Returns `None` for an empty or malformed color.
#[must_use]
pub fn hex_to_css(hex: &str, alpha: Option<f64>) -> Option<String> {
    let [red, green, blue] = parse_hex_channels(hex).ok()?;
    match alpha.filter(|alpha| alpha.is_finite()) {
        Some(alpha) => Some(format!("rgba({red}, {green}, {blue}, {alpha})")),
        None => Some(format!("rgb({red}, {green}, {blue})")),
    }
}

fn parse_hex_channels(hex: &str) -> ChartResult<[u8; 3]> {
    let digits = hex
        .strip_prefix('#')
        .filter(|digits| digits.len() == 6 && digits.is_ascii())
        .ok_or_else(|| ChartError::InvalidData(format!("color must be `#rrggbb`, got `{hex}`")))?;

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| ChartError::InvalidData(format!("invalid color `{hex}`: {e}")))
    };
    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
