use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::style::StyleError;

/// Text variants understood by the typography primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Body1,
    Body2,
    Caption,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Body1, Variant::Body2, Variant::Caption];

    /// Font size in pixels (16px root).
    pub fn font_size(self) -> f32 {
        match self {
            Variant::Body1 => 16.0,
            Variant::Body2 => 14.0,
            Variant::Caption => 12.0,
        }
    }

    /// Line height relative to the font size.
    pub fn line_height(self) -> f32 {
        match self {
            Variant::Body1 => 1.5,
            Variant::Body2 => 1.43,
            Variant::Caption => 1.66,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Body1 => "body1",
            Variant::Body2 => "body2",
            Variant::Caption => "caption",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s.trim())
            .ok_or_else(|| StyleError::UnknownVariant(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body1_is_the_default_sixteen_pixel_variant() {
        assert_eq!(Variant::default(), Variant::Body1);
        assert_eq!(Variant::Body1.font_size(), 16.0);
        assert_eq!(Variant::Body1.line_height(), 1.5);
    }

    #[test]
    fn parses_names() {
        assert_eq!("caption".parse::<Variant>(), Ok(Variant::Caption));
        assert_eq!(
            "h1".parse::<Variant>(),
            Err(StyleError::UnknownVariant("h1".to_string()))
        );
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
    }
}
