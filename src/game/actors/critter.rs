// A small hostile creature; the simplest actor kind with a death condition

use crate::engine::sprite::FrameSequencer;
use crate::game::world::WorldBounds;

use super::body::{ActorBody, MOVING_EPSILON};
use super::damage::{Alive, DamageKind, Damaging};
use super::roster::Actor;

const CRITTER_HEALTH: u32 = 3;
const CRITTER_TOUCH_DAMAGE: u32 = 1;

/// A critter hurts players on contact and dies once its health runs out,
/// overriding the "always alive" default.
pub struct Critter {
    body: ActorBody,
    health: u32,
}

impl Critter {
    pub fn new(x: f64, y: f64, anim: FrameSequencer) -> Self {
        Self {
            body: ActorBody::new(x, y, anim)
                .with_damage(DamageKind::HurtsPlayers, CRITTER_TOUCH_DAMAGE),
            health: CRITTER_HEALTH,
        }
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    pub fn health(&self) -> u32 {
        self.health
    }
}

impl Actor for Critter {
    fn body(&self) -> &ActorBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ActorBody {
        &mut self.body
    }

    fn update(&mut self, world: &dyn WorldBounds) {
        // Face along horizontal movement before integrating
        let vx = self.body.velocity().x;
        if vx.abs() > MOVING_EPSILON {
            self.body.set_facing_left(vx < 0.0);
        }
        self.body.update(world);
    }
}

impl Alive for Critter {
    fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl Damaging for Critter {
    fn damage_kind(&self) -> DamageKind {
        self.body.damage_kind()
    }

    fn damage(&self) -> u32 {
        self.body.damage()
    }
}
