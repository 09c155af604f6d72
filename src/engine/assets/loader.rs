// Spritesheet loading from disk

use super::AssetError;
use crate::engine::sprite::SpriteSheet;
use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

const SHEET_DIRECTORY: &str = "sheets";
const SHEET_EXTENSIONS: &[&str] = &["png"];

/// Loads spritesheets from a base asset path
pub struct SheetLoader {
    base_path: PathBuf,
}

impl SheetLoader {
    /// Create a new loader rooted at the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for a sheet by name
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        self.base_path.join(SHEET_DIRECTORY).join(name)
    }

    /// Check if a sheet exists
    pub fn exists(&self, name: &str) -> bool {
        self.resolve_path(name).exists()
    }

    /// Load a sheet from disk and lay a `frame_width` x `frame_height`
    /// grid over it.
    pub fn load_sheet(&self, name: &str, frame_width: u32, frame_height: u32) -> Result<SpriteSheet> {
        let path = self.resolve_path(name);

        if !path.exists() {
            return Err(AssetError::NotFound(path.to_string_lossy().to_string()).into());
        }

        let bytes = std::fs::read(&path).map_err(AssetError::Io)?;
        let pixels = image::load_from_memory(&bytes)
            .map_err(|source| AssetError::Decode {
                name: name.to_string(),
                source,
            })?
            .to_rgba8();

        let sheet = SpriteSheet::new(pixels, frame_width, frame_height);
        info!(
            "Loaded sheet {} ({}x{} frames, {} columns, {} rows)",
            name,
            frame_width,
            frame_height,
            sheet.columns(),
            sheet.rows(),
        );

        Ok(sheet)
    }

    /// List all sheet files under the base path
    pub fn list_sheets(&self) -> Result<Vec<String>> {
        let dir = self.base_path.join(SHEET_DIRECTORY);

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut sheets = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(ext) = path.extension() else {
                continue;
            };
            if SHEET_EXTENSIONS.contains(&ext.to_string_lossy().as_ref()) {
                if let Some(name) = path.file_name() {
                    sheets.push(name.to_string_lossy().to_string());
                }
            }
        }

        Ok(sheets)
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path_joins_sheet_directory() {
        let loader = SheetLoader::new("assets");
        assert_eq!(
            loader.resolve_path("hero.png"),
            PathBuf::from("assets/sheets/hero.png")
        );
    }

    #[test]
    fn test_missing_sheet_is_not_found() {
        let loader = SheetLoader::new("this/path/does/not/exist");
        assert!(!loader.exists("hero.png"));

        let err = loader.load_sheet("hero.png", 32, 32).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_list_sheets_empty_when_directory_missing() {
        let loader = SheetLoader::new("this/path/does/not/exist");
        assert!(loader.list_sheets().unwrap().is_empty());
    }
}
