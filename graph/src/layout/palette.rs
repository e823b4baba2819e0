use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default branch colors, cycled with wraparound
pub const DEFAULT_COLORS: [&str; 10] = [
    "#4cc2ff", // accent
    "#4ade80", // success
    "#fbbf24", // warning
    "#ff6b81", // danger
    "#a78bfa", // purple
    "#fb7185", // pink
    "#34d399", // emerald
    "#60a5fa", // blue
    "#f472b6", // pink
    "#10b981", // green
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,
}

/// Bounded list of lane colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new(colors: Vec<String>) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self { colors })
    }

    /// Color for the n-th color assignment, wrapping around
    pub fn color(&self, counter: usize) -> &str {
        &self.colors[counter % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}
