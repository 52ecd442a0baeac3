use tracing::{debug, warn};

use super::palette::{Palette, PaletteColor};
use super::random::RandomSource;

/// Pool of highlight colors not currently assigned to a selected row.
///
/// Invariant: the available colors plus every color handed out and not yet returned
/// equal the palette, each exactly once. Returning a color that is foreign to the
/// palette or already available is ignored, so callers cannot duplicate a color.
#[derive(Debug, Clone)]
pub struct ColorPool<R> {
    palette: Palette,
    available: Vec<PaletteColor>,
    rng: R,
}

impl<R: RandomSource> ColorPool<R> {
    pub fn new(palette: Palette, rng: R) -> Self {
        let available = palette.colors().to_vec();
        Self { palette, available, rng }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Colors currently free to be drawn
    pub fn available(&self) -> &[PaletteColor] {
        &self.available
    }

    /// Return `previous` (if any) to the pool, then draw a new color at random.
    ///
    /// Returns `None` when the pool is empty at draw time. The caller still records the
    /// selection; it just renders without a highlight.
    pub fn select(&mut self, previous: Option<PaletteColor>) -> Option<PaletteColor> {
        if let Some(color) = previous {
            self.release(color);
        }
        self.draw()
    }

    /// Return `color` to the pool without drawing
    pub fn deselect(&mut self, color: PaletteColor) {
        self.release(color);
    }

    fn release(&mut self, color: PaletteColor) {
        if !self.palette.contains(&color) {
            debug!(color = %color.name, "ignoring release of color outside the palette");
            return;
        }
        if self.available.contains(&color) {
            debug!(color = %color.name, "ignoring release of color already in the pool");
            return;
        }
        self.available.push(color);
    }

    fn draw(&mut self) -> Option<PaletteColor> {
        if self.available.is_empty() {
            warn!(
                palette_size = self.palette.len(),
                "color pool exhausted, selecting without highlight"
            );
            return None;
        }
        let index = self.rng.next_index(self.available.len()).min(self.available.len() - 1);
        let color = self.available.remove(index);
        debug!(color = %color.name, remaining = self.available.len(), "drew selection color");
        Some(color)
    }
}
