// The active actor set

use image::RgbaImage;
use log::debug;

use crate::game::world::{ScreenProject, WorldBounds};

use super::body::ActorBody;
use super::damage::Alive;

/// An updatable, drawable inhabitant of the level.
///
/// Actor kinds compose an [`ActorBody`] with their own behavior instead of
/// extending a base class; the default `update` just integrates the body.
pub trait Actor: Alive {
    fn body(&self) -> &ActorBody;
    fn body_mut(&mut self) -> &mut ActorBody;

    /// Act one tick
    fn update(&mut self, world: &dyn WorldBounds) {
        self.body_mut().update(world);
    }
}

/// A bare body with no behavior of its own is already an actor
impl Actor for ActorBody {
    fn body(&self) -> &ActorBody {
        self
    }

    fn body_mut(&mut self) -> &mut ActorBody {
        self
    }
}

/// Owns the actors currently in the level.
///
/// Ticks each actor exactly once per `update_all` call (the frame slowdown
/// counters depend on that), removes the dead afterwards, and draws
/// back-to-front by projected screen y.
#[derive(Default)]
pub struct ActorRoster {
    actors: Vec<Box<dyn Actor>>,
}

impl ActorRoster {
    pub fn new() -> Self {
        Self { actors: Vec::new() }
    }

    /// Add an actor to the active set
    pub fn push(&mut self, actor: impl Actor + 'static) {
        self.actors.push(Box::new(actor));
    }

    /// Tick every actor once, then drop the ones that report dead
    pub fn update_all(&mut self, world: &dyn WorldBounds) {
        for actor in &mut self.actors {
            actor.update(world);
        }

        let before = self.actors.len();
        self.actors.retain(|actor| actor.is_alive());
        let removed = before - self.actors.len();
        if removed > 0 {
            debug!("Removed {} dead actors", removed);
        }
    }

    /// Draw every actor once, farthest first, so nearer actors overpaint
    /// the ones behind them
    pub fn draw_all(&mut self, surface: &mut RgbaImage, proj: &dyn ScreenProject) {
        self.actors.sort_by_key(|actor| actor.body().depth(proj));
        for actor in &mut self.actors {
            actor.body_mut().draw(surface, proj);
        }
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Actor> {
        self.actors.iter().map(|actor| actor.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::sprite::{FrameSequencer, SpriteSheet};
    use crate::game::actors::Critter;
    use crate::game::world::{GridProjection, RectLevel};
    use image::{Rgba, RgbaImage};

    fn test_sequencer(tint: u8) -> FrameSequencer {
        let img = RgbaImage::from_pixel(32, 32, Rgba([tint, 0, 0, 255]));
        FrameSequencer::new(SpriteSheet::new(img, 32, 32), 0, 1)
    }

    #[test]
    fn test_update_all_ticks_every_actor() {
        let level = RectLevel::new(20.0, 20.0);
        let mut roster = ActorRoster::new();

        let mut body = ActorBody::new(1.0, 1.0, test_sequencer(1));
        body.impulse(1.0, 0.0);
        roster.push(body);

        roster.update_all(&level);
        let moved = roster.iter().next().unwrap().body().x();
        assert_eq!(moved, 2.0);
    }

    #[test]
    fn test_dead_actors_are_removed() {
        let level = RectLevel::new(20.0, 20.0);
        let mut roster = ActorRoster::new();

        let mut critter = Critter::new(1.0, 1.0, test_sequencer(1));
        let health = critter.health();
        critter.take_damage(health);
        roster.push(critter);
        roster.push(ActorBody::new(2.0, 2.0, test_sequencer(1)));
        assert_eq!(roster.len(), 2);

        roster.update_all(&level);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_draw_all_orders_by_depth() {
        let proj = GridProjection::default();
        let mut surface = RgbaImage::new(256, 256);
        let mut roster = ActorRoster::new();

        // Same tile column, different rows; both sprites overlap on screen
        roster.push(ActorBody::new(3.0, 2.5, test_sequencer(200)));
        roster.push(ActorBody::new(3.0, 2.0, test_sequencer(100)));

        roster.draw_all(&mut surface, &proj);

        // (96, 80) is inside both sprites; the nearer actor painted last
        // and wins the overlap
        let (sx, sy) = proj.screen_coords(3.0, 2.5);
        assert_eq!(
            *surface.get_pixel(sx as u32, sy as u32),
            Rgba([200, 0, 0, 255])
        );
    }
}
