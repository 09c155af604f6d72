// Actors
//
// This module contains everything that moves around the level:
// - ActorBody: per-tick movement integration and frame selection
// - Capability traits (Alive, Damaging) and the DamageKind enum
// - Concrete actor kinds built by composing a body (Critter)
// - ActorRoster: the active set, ticked and drawn once per frame

mod body;
mod critter;
mod damage;
mod roster;

// Re-export commonly used types
pub use body::{ActorBody, MOVING_EPSILON};
pub use critter::Critter;
pub use damage::{Alive, DamageKind, Damaging};
pub use roster::{Actor, ActorRoster};
