// Spritesheet slicing: fixed-size frame grids over a shared image

use image::{Rgba, RgbaImage};
use std::sync::Arc;

/// A grid of equally sized frames laid over a single spritesheet image.
///
/// Rows group the frames of one animation; columns index frames within a
/// row. Pixels are shared behind an `Arc`, so cloning a sheet is cheap and
/// many sequencers can slice the same image without copying it.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pixels: Arc<RgbaImage>,
    frame_width: u32,
    frame_height: u32,
    columns: u32,
    rows: u32,
}

impl SpriteSheet {
    /// Lay a frame grid over an image.
    ///
    /// Panics if the image dimensions are not an exact multiple of the
    /// frame size; a misaligned grid is a programmer error, not a
    /// recoverable condition.
    pub fn new(pixels: RgbaImage, frame_width: u32, frame_height: u32) -> Self {
        assert!(
            frame_width > 0 && frame_height > 0,
            "frame size must be non-zero"
        );
        assert!(
            pixels.width() % frame_width == 0 && pixels.height() % frame_height == 0,
            "spritesheet {}x{} does not divide into {}x{} frames",
            pixels.width(),
            pixels.height(),
            frame_width,
            frame_height,
        );

        let columns = pixels.width() / frame_width;
        let rows = pixels.height() / frame_height;

        Self {
            pixels: Arc::new(pixels),
            frame_width,
            frame_height,
            columns,
            rows,
        }
    }

    /// Width of each frame in pixels
    pub fn frame_width(&self) -> u32 {
        self.frame_width
    }

    /// Height of each frame in pixels
    pub fn frame_height(&self) -> u32 {
        self.frame_height
    }

    /// Number of frame columns in the sheet
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of frame rows in the sheet
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Slice the frame at (column, row).
    ///
    /// Panics when the index falls outside the grid.
    pub fn frame(&self, column: u32, row: u32) -> Frame {
        assert!(
            column < self.columns && row < self.rows,
            "frame ({}, {}) outside {}x{} grid",
            column,
            row,
            self.columns,
            self.rows,
        );

        Frame {
            pixels: Arc::clone(&self.pixels),
            x: column * self.frame_width,
            y: row * self.frame_height,
            width: self.frame_width,
            height: self.frame_height,
        }
    }
}

/// One frame sliced from a [`SpriteSheet`]
#[derive(Debug, Clone)]
pub struct Frame {
    pixels: Arc<RgbaImage>,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at frame-local coordinates
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(self.x + x, self.y + y)
    }

    /// Copy this frame onto `surface` with its top-left corner at
    /// (`dst_x`, `dst_y`). Fully transparent pixels are skipped and pixels
    /// falling outside the surface are clipped. `mirrored` flips the frame
    /// horizontally.
    pub fn blit(&self, surface: &mut RgbaImage, dst_x: i32, dst_y: i32, mirrored: bool) {
        for fy in 0..self.height {
            let sy = dst_y + fy as i32;
            if sy < 0 || sy >= surface.height() as i32 {
                continue;
            }

            for fx in 0..self.width {
                let sx = dst_x + fx as i32;
                if sx < 0 || sx >= surface.width() as i32 {
                    continue;
                }

                let src_x = if mirrored { self.width - 1 - fx } else { fx };
                let px = self.pixel(src_x, fy);
                if px[3] == 0 {
                    continue;
                }
                surface.put_pixel(sx as u32, sy as u32, px);
            }
        }
    }
}
