//! CSS-like style mappings and the parsers that turn them into layout values.
//!
//! Components describe their look as plain `property: value` pairs. The host
//! resolves a [`StyleMap`] into a [`BoxStyle`] once per node; properties it
//! cannot understand come back as [`StyleError`]s next to the resolved value
//! so a single bad entry never blanks a frame.

use iced_core::{Color, Length, Padding};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    #[error("invalid length: {0}")]
    InvalidLength(String),

    #[error("invalid padding: {0}")]
    InvalidPadding(String),

    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("unknown typography variant: {0}")]
    UnknownVariant(String),

    #[error("unsupported value for {property}: {value}")]
    Unsupported { property: String, value: String },
}

/// Ordered `property -> value` map. Setting an existing property replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleMap {
    entries: Vec<(String, String)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &str, value: &str) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: &str, value: &str) {
        match self.entries.iter_mut().find(|(key, _)| key == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .entries
                .push((property.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut map = StyleMap::new();
        for (property, value) in iter {
            map.set(property, value);
        }
        map
    }
}

impl Serialize for StyleMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl fmt::Display for StyleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (property, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{property}: {value}")?;
        }
        Ok(())
    }
}

/// Parses a pixel amount. Unitless numbers are accepted as pixels.
pub fn parse_px(value: &str) -> Result<f32, StyleError> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
    number
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|px| px.is_finite() && *px >= 0.0)
        .ok_or_else(|| StyleError::InvalidLength(value.to_string()))
}

/// Parses a `width`/`height` value. Only full-extent percentages map to
/// iced lengths; anything in between has no flow equivalent.
pub fn parse_length(value: &str) -> Result<Length, StyleError> {
    match value.trim() {
        "auto" | "fit-content" => Ok(Length::Shrink),
        "100%" | "100vh" | "100vw" => Ok(Length::Fill),
        other if other.ends_with('%') || other.ends_with("vh") || other.ends_with("vw") => {
            Err(StyleError::InvalidLength(value.to_string()))
        }
        other => parse_px(other).map(Length::Fixed),
    }
}

/// CSS padding shorthand with one to four values.
pub fn parse_padding(value: &str) -> Result<Padding, StyleError> {
    let parts = value
        .split_whitespace()
        .map(parse_px)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| StyleError::InvalidPadding(value.to_string()))?;

    let (top, right, bottom, left) = match parts.as_slice() {
        [all] => (*all, *all, *all, *all),
        [vertical, horizontal] => (*vertical, *horizontal, *vertical, *horizontal),
        [top, horizontal, bottom] => (*top, *horizontal, *bottom, *horizontal),
        [top, right, bottom, left] => (*top, *right, *bottom, *left),
        _ => return Err(StyleError::InvalidPadding(value.to_string())),
    };

    Ok(Padding {
        top,
        right,
        bottom,
        left,
    })
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("transparent", Color::TRANSPARENT),
    ("lightblue", Color::from_rgb8(173, 216, 230)),
    ("lightgray", Color::from_rgb8(211, 211, 211)),
    ("gray", Color::from_rgb8(128, 128, 128)),
    ("red", Color::from_rgb8(255, 0, 0)),
    ("green", Color::from_rgb8(0, 128, 0)),
    ("blue", Color::from_rgb8(0, 0, 255)),
];

pub fn parse_color(value: &str) -> Result<Color, StyleError> {
    let trimmed = value.trim();
    let unknown = || StyleError::UnknownColor(value.to_string());

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(unknown);
    }

    let lowered = trimmed.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, color)| *color)
        .ok_or_else(unknown)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).ok();
    match hex.len() {
        3 => {
            let mut expanded = hex.chars().map(|c| channel(&format!("{c}{c}")));
            Some(Color::from_rgb8(
                expanded.next()??,
                expanded.next()??,
                expanded.next()??,
            ))
        }
        6 | 8 => {
            let r = channel(&hex[0..2])?;
            let g = channel(&hex[2..4])?;
            let b = channel(&hex[4..6])?;
            let a = if hex.len() == 8 {
                f32::from(channel(&hex[6..8])?) / 255.0
            } else {
                1.0
            };
            Some(Color::from_rgba8(r, g, b, a))
        }
        _ => None,
    }
}

/// Offsets of an absolutely positioned box. The host always places such a
/// box below its in-flow siblings, so these are accepted and ignored.
const POSITION_OFFSETS: &[&str] = &["top", "left", "right", "bottom", "transform"];

/// Layout values a host needs to draw one box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle {
    /// `None` means `auto`: the host picks based on the parent.
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub padding: Padding,
    pub margin_top: f32,
    pub background: Option<Color>,
    pub font_size: Option<f32>,
    /// `position: absolute`: drawn without moving in-flow siblings.
    pub absolute: bool,
    pub flex: bool,
    pub justify_center: bool,
    pub align_center: bool,
    pub clip: bool,
    pub border_none: bool,
    pub pointer: bool,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            padding: Padding::ZERO,
            margin_top: 0.0,
            background: None,
            font_size: None,
            absolute: false,
            flex: false,
            justify_center: false,
            align_center: false,
            clip: false,
            border_none: false,
            pointer: false,
        }
    }
}

impl BoxStyle {
    /// Resolves every property it understands and returns the rest as errors.
    pub fn resolve(map: &StyleMap) -> (Self, Vec<StyleError>) {
        let mut style = BoxStyle::default();
        let mut errors = Vec::new();

        for (property, value) in map.iter() {
            if let Err(error) = style.apply(property, value) {
                errors.push(error);
            }
        }

        (style, errors)
    }

    pub fn is_centered(&self) -> bool {
        self.flex && self.justify_center && self.align_center
    }

    fn apply(&mut self, property: &str, value: &str) -> Result<(), StyleError> {
        let unsupported = || StyleError::Unsupported {
            property: property.to_string(),
            value: value.to_string(),
        };

        match property {
            "width" => self.width = Some(parse_length(value)?),
            "height" => self.height = Some(parse_length(value)?),
            "padding" => self.padding = parse_padding(value)?,
            "margin-top" => self.margin_top = parse_px(value)?,
            "background-color" => self.background = Some(parse_color(value)?),
            "font-size" => self.font_size = Some(parse_px(value)?),
            "display" => match value {
                "flex" => self.flex = true,
                "block" => self.flex = false,
                _ => return Err(unsupported()),
            },
            "position" => match value {
                "absolute" => self.absolute = true,
                "relative" | "static" => self.absolute = false,
                _ => return Err(unsupported()),
            },
            "justify-content" => match value {
                "center" => self.justify_center = true,
                "flex-start" | "start" | "normal" => self.justify_center = false,
                _ => return Err(unsupported()),
            },
            "align-items" => match value {
                "center" => self.align_center = true,
                "flex-start" | "start" | "normal" => self.align_center = false,
                _ => return Err(unsupported()),
            },
            "overflow" => match value {
                "hidden" => self.clip = true,
                "visible" => self.clip = false,
                _ => return Err(unsupported()),
            },
            "border" => match value {
                "none" | "0" => self.border_none = true,
                _ => return Err(unsupported()),
            },
            "cursor" => match value {
                "pointer" => self.pointer = true,
                "default" | "auto" => self.pointer = false,
                _ => return Err(unsupported()),
            },
            offset if POSITION_OFFSETS.contains(&offset) => {}
            _ => return Err(unsupported()),
        }

        Ok(())
    }
}
