// Actor movement and frame selection
//
// An ActorBody is the continuous half of an entity: position and velocity
// integrated once per tick, with the owned frame sequencer picking the
// sprite to draw based on whether the body is in motion.

use glam::DVec2;
use image::RgbaImage;

use crate::engine::sprite::{Frame, FrameSequencer};
use crate::game::world::{ScreenProject, WorldBounds, FOOT_OFFSET, TILE_HEIGHT};

use super::damage::{Alive, DamageKind, Damaging};

/// Velocity magnitude above which the body counts as moving and its
/// animation advances
pub const MOVING_EPSILON: f64 = 0.005;

const DEFAULT_FRICTION: f64 = 0.6;
const DEFAULT_RADIUS: f64 = 0.4;

/// A movable game actor in world coordinates.
///
/// Each tick [`update`] integrates velocity into position per axis,
/// reverting any axis the world rejects and damping the rest by friction.
/// Friction is inverted from intuition: a *lower* coefficient means
/// *stronger* damping ("stickier").
///
/// [`update`]: ActorBody::update
#[derive(Debug, Clone)]
pub struct ActorBody {
    pos: DVec2,
    vel: DVec2,
    friction: f64,
    radius: f64,
    facing_left: bool,
    damage_kind: DamageKind,
    damage: u32,
    anim: FrameSequencer,
}

impl ActorBody {
    /// Create a body at (`x`, `y`) bound to its own frame sequencer
    pub fn new(x: f64, y: f64, anim: FrameSequencer) -> Self {
        Self {
            pos: DVec2::new(x, y),
            vel: DVec2::ZERO,
            friction: DEFAULT_FRICTION,
            radius: DEFAULT_RADIUS,
            facing_left: false,
            damage_kind: DamageKind::Harmless,
            damage: 0,
            anim,
        }
    }

    /// Set the friction coefficient. Lower is stickier; must be in (0, 1].
    pub fn with_friction(mut self, friction: f64) -> Self {
        assert!(
            friction > 0.0 && friction <= 1.0,
            "friction {} outside (0, 1]",
            friction,
        );
        self.friction = friction;
        self
    }

    /// Set the collision radius
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the touch-damage classification and amount
    pub fn with_damage(mut self, kind: DamageKind, amount: u32) -> Self {
        self.damage_kind = kind;
        self.damage = amount;
        self
    }

    /// Act one tick: integrate velocity into position, one axis at a time.
    ///
    /// A move the world rejects is reverted and that axis's velocity
    /// zeroed, so the other axis can still slide along a wall. A move that
    /// lands in bounds damps that axis's velocity by the friction
    /// coefficient instead.
    pub fn update(&mut self, world: &dyn WorldBounds) {
        self.pos.x += self.vel.x;
        if !world.is_in_bounds(self.pos.x, self.pos.y) {
            self.pos.x -= self.vel.x;
            self.vel.x = 0.0;
        } else {
            self.vel.x *= self.friction;
        }

        self.pos.y += self.vel.y;
        if !world.is_in_bounds(self.pos.x, self.pos.y) {
            self.pos.y -= self.vel.y;
            self.vel.y = 0.0;
        } else {
            self.vel.y *= self.friction;
        }
    }

    /// Kick the body: add to its velocity on both axes.
    ///
    /// Unclamped; repeated kicks between ticks accumulate.
    pub fn impulse(&mut self, dx: f64, dy: f64) {
        self.vel.x += dx;
        self.vel.y += dy;
    }

    /// Whether either velocity component exceeds the moving threshold
    pub fn is_moving(&self) -> bool {
        self.vel.x.abs() > MOVING_EPSILON || self.vel.y.abs() > MOVING_EPSILON
    }

    /// Pick the sprite for this tick: the animation advances while the
    /// body moves and holds its place while the body rests, resuming
    /// exactly where it stopped.
    pub fn animation_frame(&mut self) -> Frame {
        if self.is_moving() {
            self.anim.advance()
        } else {
            self.anim.current()
        }
    }

    /// Draw the body onto `surface` at its projected position
    pub fn draw(&mut self, surface: &mut RgbaImage, proj: &dyn ScreenProject) {
        self.draw_elevated(0, surface, proj);
    }

    /// Draw raised by `elevation` pixels, for jump and fly effects.
    ///
    /// The sprite is centered on the projected x, its feet aligned to the
    /// tile floor line, and mirrored horizontally when facing left.
    pub fn draw_elevated(
        &mut self,
        elevation: i32,
        surface: &mut RgbaImage,
        proj: &dyn ScreenProject,
    ) {
        let (sx, sy) = proj.screen_coords(self.pos.x, self.pos.y);
        let frame = self.animation_frame();

        let dst_x = sx - frame.width() as i32 / 2;
        let dst_y = sy - frame.height() as i32 + TILE_HEIGHT as i32 - FOOT_OFFSET - elevation;
        frame.blit(surface, dst_x, dst_y, self.facing_left);
    }

    /// Legacy containment test against the unit cell at tile (`x`, `y`).
    ///
    /// The upper y bound compares the body's own coordinate, so any body
    /// with `y()` above the tile row matches regardless of how far below
    /// it sits. Kept byte-for-byte for callers relying on it;
    /// [`occupies_tile`] is the strict cell test.
    ///
    /// [`occupies_tile`]: ActorBody::occupies_tile
    pub fn check_position(&self, x: i32, y: i32) -> bool {
        let (tx, ty) = (x as f64, y as f64);
        self.pos.x > tx
            && self.pos.x <= tx + 1.0
            && self.pos.y > ty
            && self.pos.y <= self.pos.y + 1.0
    }

    /// Whether the body's position falls inside the unit cell anchored at
    /// tile (`x`, `y`), half-open from below on both axes
    pub fn occupies_tile(&self, x: i32, y: i32) -> bool {
        let (tx, ty) = (x as f64, y as f64);
        self.pos.x > tx && self.pos.x <= tx + 1.0 && self.pos.y > ty && self.pos.y <= ty + 1.0
    }

    /// Euclidean distance to another body
    pub fn distance_to(&self, other: &ActorBody) -> f64 {
        self.pos.distance(other.pos)
    }

    /// Projected screen position
    pub fn screen_coords(&self, proj: &dyn ScreenProject) -> (i32, i32) {
        proj.screen_coords(self.pos.x, self.pos.y)
    }

    /// Draw-order sort key: projected screen y. Renderers draw actors in
    /// ascending depth so nearer actors overpaint farther ones.
    pub fn depth(&self, proj: &dyn ScreenProject) -> i32 {
        self.screen_coords(proj).1
    }

    /// Teleport to (`x`, `y`), keeping velocity
    pub fn set_coords(&mut self, x: f64, y: f64) {
        self.pos = DVec2::new(x, y);
    }

    pub fn x(&self) -> f64 {
        self.pos.x
    }

    pub fn y(&self) -> f64 {
        self.pos.y
    }

    pub fn position(&self) -> DVec2 {
        self.pos
    }

    pub fn velocity(&self) -> DVec2 {
        self.vel
    }

    pub fn friction(&self) -> f64 {
        self.friction
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn facing_left(&self) -> bool {
        self.facing_left
    }

    /// Face left or right. Not derived from velocity here; controllers set
    /// it from the movement they request.
    pub fn set_facing_left(&mut self, facing_left: bool) {
        self.facing_left = facing_left;
    }

    /// The owned frame sequencer
    pub fn animation(&self) -> &FrameSequencer {
        &self.anim
    }

    pub fn animation_mut(&mut self) -> &mut FrameSequencer {
        &mut self.anim
    }
}

impl Alive for ActorBody {}

impl Damaging for ActorBody {
    fn damage_kind(&self) -> DamageKind {
        self.damage_kind
    }

    fn damage(&self) -> u32 {
        self.damage
    }
}
