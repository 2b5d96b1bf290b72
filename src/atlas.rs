//! Sprite dimension source
//!
//! The simulation derives hitboxes and ground anchoring from sprite pixel
//! dimensions and nothing else. Decoding and drawing the actual images is the
//! renderer's problem; the core only sees this trait.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Semantic sprite keys understood by the renderer and the atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Run1,
    Run2,
    Jump,
    Dead,
    Duck1,
    Duck2,
    CactusSmall,
    CactusLarge,
    CactusCluster,
    Bird1,
    Bird2,
    Cloud,
    Track,
}

impl SpriteId {
    /// Stable asset name (e.g. for keying a sprite sheet)
    pub fn asset_name(&self) -> &'static str {
        match self {
            SpriteId::Run1 => "run-1",
            SpriteId::Run2 => "run-2",
            SpriteId::Jump => "jump",
            SpriteId::Dead => "dead",
            SpriteId::Duck1 => "duck-1",
            SpriteId::Duck2 => "duck-2",
            SpriteId::CactusSmall => "cactus-small",
            SpriteId::CactusLarge => "cactus-large",
            SpriteId::CactusCluster => "cactus-cluster",
            SpriteId::Bird1 => "bird-1",
            SpriteId::Bird2 => "bird-2",
            SpriteId::Cloud => "cloud",
            SpriteId::Track => "track",
        }
    }
}

/// Source of per-sprite pixel dimensions
pub trait SpriteAtlas {
    /// Width/height of the sprite in logical board units
    fn size(&self, id: SpriteId) -> Vec2;
}

/// Default atlas matching the bundled sprite sheet
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelAtlas;

impl SpriteAtlas for PixelAtlas {
    fn size(&self, id: SpriteId) -> Vec2 {
        match id {
            SpriteId::Run1 | SpriteId::Run2 | SpriteId::Jump | SpriteId::Dead => {
                Vec2::new(88.0, 94.0)
            }
            SpriteId::Duck1 | SpriteId::Duck2 => Vec2::new(118.0, 60.0),
            SpriteId::CactusSmall => Vec2::new(34.0, 70.0),
            SpriteId::CactusLarge => Vec2::new(69.0, 70.0),
            SpriteId::CactusCluster => Vec2::new(102.0, 70.0),
            SpriteId::Bird1 | SpriteId::Bird2 => Vec2::new(92.0, 68.0),
            SpriteId::Cloud => Vec2::new(92.0, 27.0),
            SpriteId::Track => Vec2::new(2400.0, 24.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duck_sprites_shorter_than_run() {
        let atlas = PixelAtlas;
        assert!(atlas.size(SpriteId::Duck1).y < atlas.size(SpriteId::Run1).y);
        assert!(atlas.size(SpriteId::Duck2).y < atlas.size(SpriteId::Run2).y);
    }

    #[test]
    fn test_track_tile_covers_board() {
        let atlas = PixelAtlas;
        assert!(atlas.size(SpriteId::Track).x >= crate::consts::BOARD_WIDTH);
    }
}
