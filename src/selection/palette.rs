use serde::{Deserialize, Serialize};

/// A named highlight color
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    pub rgb: [u8; 3],
}

impl PaletteColor {
    pub fn new(name: impl Into<String>, rgb: [u8; 3]) -> Self {
        Self { name: name.into(), rgb }
    }
}

/// Fixed ordered set of highlight colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PaletteColor>", into = "Vec<PaletteColor>")]
pub struct Palette(Vec<PaletteColor>);

impl Palette {
    /// Build a palette, dropping repeated colors so each appears once
    pub fn new(colors: Vec<PaletteColor>) -> Self {
        let mut unique: Vec<PaletteColor> = Vec::with_capacity(colors.len());
        for color in colors {
            if !unique.contains(&color) {
                unique.push(color);
            }
        }
        Self(unique)
    }

    pub fn colors(&self) -> &[PaletteColor] {
        &self.0
    }

    pub fn contains(&self, color: &PaletteColor) -> bool {
        self.0.contains(color)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PaletteColor>> for Palette {
    fn from(colors: Vec<PaletteColor>) -> Self {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<PaletteColor> {
    fn from(palette: Palette) -> Self {
        palette.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(vec![
            PaletteColor::new("red", [239, 68, 68]),
            PaletteColor::new("green", [16, 185, 129]),
            PaletteColor::new("blue", [59, 130, 246]),
            PaletteColor::new("amber", [245, 158, 11]),
        ])
    }
}
