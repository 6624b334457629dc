//! Enumerated property values shared by sprite and widget definitions.

use serde::Serialize;

/// Orientation/anchor for GUI elements.
/// Determines which corner or edge of the screen (or parent) the position is relative to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Orientation {
    #[default]
    LowerLeft,
    UpperLeft,
    CenterUp,
    Center,
    CenterDown,
    UpperRight,
    LowerRight,
}

impl Orientation {
    /// Misspelling found in shipped game files. Tolerated with a warning.
    pub const MISSPELLED_UPPER_LEFT: &'static str = "upperl_left";

    /// Parse from an orientation keyword such as `"UPPER_LEFT"` (any case).
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lower_left" => Some(Orientation::LowerLeft),
            "upper_left" => Some(Orientation::UpperLeft),
            "center_up" => Some(Orientation::CenterUp),
            "center" => Some(Orientation::Center),
            "center_down" => Some(Orientation::CenterDown),
            "upper_right" => Some(Orientation::UpperRight),
            "lower_right" => Some(Orientation::LowerRight),
            _ => None,
        }
    }
}

/// Text format/alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

impl TextFormat {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Some(TextFormat::Left),
            "centre" | "center" => Some(TextFormat::Center),
            "right" => Some(TextFormat::Right),
            "justified" => Some(TextFormat::Justified),
            _ => None,
        }
    }
}

/// Sound played when a sprite or button is clicked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickSound {
    #[default]
    Click,
    CloseWindow,
    StartGame,
}

impl ClickSound {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "click" => Some(ClickSound::Click),
            "close_window" => Some(ClickSound::CloseWindow),
            "start_game" => Some(ClickSound::StartGame),
            _ => None,
        }
    }
}

/// When a sprite's texture is expected to be loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadType {
    #[default]
    Ingame,
    Backend,
    Frontend,
}

impl LoadType {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ingame" => Some(LoadType::Ingame),
            "backend" => Some(LoadType::Backend),
            "frontend" => Some(LoadType::Frontend),
            _ => None,
        }
    }
}
