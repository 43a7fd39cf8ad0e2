use serde::{Deserialize, Serialize};

/// Accent color of a quick action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionColor {
    #[default]
    Blue,
    Green,
    Orange,
    Red,
    Purple,
    Pink,
    Yellow,
    Teal,
    Gray,
}

impl ActionColor {
    pub const ALL: [ActionColor; 9] = [
        ActionColor::Blue,
        ActionColor::Green,
        ActionColor::Orange,
        ActionColor::Red,
        ActionColor::Purple,
        ActionColor::Pink,
        ActionColor::Yellow,
        ActionColor::Teal,
        ActionColor::Gray,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionColor::Blue => "blue",
            ActionColor::Green => "green",
            ActionColor::Orange => "orange",
            ActionColor::Red => "red",
            ActionColor::Purple => "purple",
            ActionColor::Pink => "pink",
            ActionColor::Yellow => "yellow",
            ActionColor::Teal => "teal",
            ActionColor::Gray => "gray",
        }
    }

    /// sRGB components used by every front end
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            ActionColor::Blue => (10, 132, 255),
            ActionColor::Green => (48, 209, 88),
            ActionColor::Orange => (255, 159, 10),
            ActionColor::Red => (255, 69, 58),
            ActionColor::Purple => (191, 90, 242),
            ActionColor::Pink => (255, 55, 95),
            ActionColor::Yellow => (255, 214, 10),
            ActionColor::Teal => (64, 200, 224),
            ActionColor::Gray => (152, 152, 157),
        }
    }
}

impl std::fmt::Display for ActionColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown color name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color '{0}' (expected one of: blue, green, orange, red, purple, pink, yellow, teal, gray)")]
pub struct UnknownColor(pub String);

impl std::str::FromStr for ActionColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        let needle = if needle == "grey" { "gray".to_string() } else { needle };
        ActionColor::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
