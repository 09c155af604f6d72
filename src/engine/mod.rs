// Engine modules: asset loading and the sprite system

pub mod assets;
pub mod sprite;
