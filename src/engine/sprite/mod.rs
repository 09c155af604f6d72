// Sprite system
//
// Slices fixed-size frames out of spritesheet images and sequences them
// into animations. Each entity owns its own sequencer; only the sheet
// pixels are shared.

mod sequencer;
mod sheet;

pub use sequencer::FrameSequencer;
pub use sheet::{Frame, SpriteSheet};
