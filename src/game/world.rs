// World collaborator interfaces
//
// Actors do not know the level layout or the camera. They consume two
// narrow traits: a bounds predicate queried during integration and a
// world-to-screen projection queried when drawing. Concrete levels and
// cameras implement these; `RectLevel` and `GridProjection` below are the
// straightforward implementations the demo and tests use.

/// Tile width on screen, in pixels
pub const TILE_WIDTH: u32 = 32;

/// Tile height on screen, in pixels. Sprites are anchored so their feet
/// sit on the tile floor line.
pub const TILE_HEIGHT: u32 = 32;

/// Pixels between a sprite's bottom edge and the tile floor line
pub const FOOT_OFFSET: i32 = 10;

/// Where an actor is allowed to stand.
///
/// Must be pure: integration queries it twice per tick, once per axis,
/// with a partially updated position.
pub trait WorldBounds {
    fn is_in_bounds(&self, x: f64, y: f64) -> bool;
}

/// Projects world coordinates to pixel coordinates
pub trait ScreenProject {
    fn screen_coords(&self, x: f64, y: f64) -> (i32, i32);
}

/// A rectangular level: every position in `[0, width] x [0, height]` is
/// walkable.
#[derive(Debug, Clone, Copy)]
pub struct RectLevel {
    width: f64,
    height: f64,
}

impl RectLevel {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl WorldBounds for RectLevel {
    fn is_in_bounds(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && x <= self.width && y >= 0.0 && y <= self.height
    }
}

/// Top-down projection: one world unit maps to one tile of pixels
#[derive(Debug, Clone, Copy)]
pub struct GridProjection {
    tile_width: u32,
    tile_height: u32,
}

impl Default for GridProjection {
    fn default() -> Self {
        Self {
            tile_width: TILE_WIDTH,
            tile_height: TILE_HEIGHT,
        }
    }
}

impl GridProjection {
    pub fn new(tile_width: u32, tile_height: u32) -> Self {
        Self {
            tile_width,
            tile_height,
        }
    }
}

impl ScreenProject for GridProjection {
    fn screen_coords(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x * self.tile_width as f64).round() as i32,
            (y * self.tile_height as f64).round() as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_level_bounds() {
        let level = RectLevel::new(10.0, 5.0);
        assert!(level.is_in_bounds(0.0, 0.0));
        assert!(level.is_in_bounds(10.0, 5.0));
        assert!(level.is_in_bounds(6.0, 2.5));
        assert!(!level.is_in_bounds(10.1, 2.0));
        assert!(!level.is_in_bounds(-0.1, 2.0));
        assert!(!level.is_in_bounds(5.0, 5.5));
    }

    #[test]
    fn test_grid_projection_scales_by_tile_size() {
        let proj = GridProjection::default();
        assert_eq!(proj.screen_coords(0.0, 0.0), (0, 0));
        assert_eq!(proj.screen_coords(2.0, 3.0), (64, 96));
        assert_eq!(proj.screen_coords(1.5, 0.25), (48, 8));
    }
}
