// Asset loading
//
// Finds and decodes spritesheet images from an asset directory. Rendering
// setup and other asset kinds live with their consumers; this module only
// turns files into [`SpriteSheet`]s.
//
// [`SpriteSheet`]: crate::engine::sprite::SpriteSheet

mod loader;

pub use loader::SheetLoader;

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
