//! Module grid to pixel buffer.

use egui::{Color32, ColorImage};

use crate::{ModuleGrid, Palette};

/// Square pixel buffer holding a rendered code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    size: usize,
    scale: usize,
    pixels: Vec<Color32>,
}

impl RasterImage {
    /// Width and height in pixels.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Pixels per module side.
    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color32> {
        if x >= self.size || y >= self.size {
            return None;
        }
        self.pixels.get(y * self.size + x).copied()
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    /// Copies the buffer into an egui image ready for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::new([self.size, self.size], self.pixels.clone())
    }
}

/// Pixels per module for a grid of `modules` per side drawn into
/// `target_width` pixels. Never less than 1, so dense codes overflow the
/// target rather than vanish.
pub fn module_scale(modules: usize, target_width: usize) -> usize {
    if modules == 0 {
        return 1;
    }
    (target_width / modules).max(1)
}

/// Expands every module into a `scale × scale` block of the palette color.
pub fn rasterize(grid: &ModuleGrid, target_width: usize, palette: Palette) -> RasterImage {
    let modules = grid.size();
    let scale = module_scale(modules, target_width);
    let size = modules * scale;

    let mut pixels = vec![palette.background; size * size];

    for y in 0..modules {
        for x in 0..modules {
            if !grid.module_at(x, y) {
                continue;
            }
            for dy in 0..scale {
                let row = (y * scale + dy) * size;
                let start = row + x * scale;
                pixels[start..start + scale].fill(palette.foreground);
            }
        }
    }

    RasterImage {
        size,
        scale,
        pixels,
    }
}
