//! Hazards the runner must avoid
//!
//! Two kinds: ground hazards (cacti, jumped over) and flying hazards (birds,
//! ducked under or jumped over). Modeled as a tagged variant with `match`
//! dispatch rather than trait objects; every variant answers the same four
//! questions: update, hitbox, expired, sprite.

use glam::Vec2;

use super::anim::Animation;
use super::rect::Hitbox;
use crate::atlas::{SpriteAtlas, SpriteId};
use crate::consts::*;

const FLYING_FRAMES: &[SpriteId] = &[SpriteId::Bird1, SpriteId::Bird2];

/// A stationary hazard sitting on the ground line
#[derive(Debug, Clone)]
pub struct GroundHazard {
    sprite: SpriteId,
    pos: Vec2,
    size: Vec2,
}

/// An airborne hazard, strictly faster than the ground scroll
#[derive(Debug, Clone)]
pub struct FlyingHazard {
    pos: Vec2,
    size: Vec2,
    anim: Animation,
}

/// Any obstacle on the board
#[derive(Debug, Clone)]
pub enum Obstacle {
    Ground(GroundHazard),
    Flying(FlyingHazard),
}

impl Obstacle {
    /// Spawn a ground hazard with its base on the ground line
    pub fn ground(sprite: SpriteId, x: f32, atlas: &dyn SpriteAtlas) -> Self {
        let size = atlas.size(sprite);
        Obstacle::Ground(GroundHazard {
            sprite,
            pos: Vec2::new(x, GROUND_Y - size.y),
            size,
        })
    }

    /// Spawn a flying hazard at an explicit height
    pub fn flying(x: f32, y: f32, atlas: &dyn SpriteAtlas) -> Self {
        let size = atlas.size(SpriteId::Bird1);
        Obstacle::Flying(FlyingHazard {
            pos: Vec2::new(x, y),
            size,
            anim: Animation::new(FLYING_FRAME_DELAY_MS, FLYING_FRAMES),
        })
    }

    /// Translate left by the scroll speed (plus the flying bonus) and
    /// advance the wing animation for flyers
    pub fn update(&mut self, scroll_speed: f32, now_ms: u64) {
        match self {
            Obstacle::Ground(hazard) => {
                hazard.pos.x -= scroll_speed;
            }
            Obstacle::Flying(hazard) => {
                hazard.pos.x -= scroll_speed + FLYING_SPEED_BONUS;
                hazard.anim.advance(now_ms);
            }
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        match self {
            Obstacle::Ground(h) => Hitbox::new(h.pos, h.size),
            Obstacle::Flying(h) => Hitbox::new(h.pos, h.size),
        }
    }

    /// Fully off the left edge of the board
    pub fn is_expired(&self) -> bool {
        let hb = self.hitbox();
        hb.right() < 0.0
    }

    pub fn sprite(&self) -> SpriteId {
        match self {
            Obstacle::Ground(h) => h.sprite,
            Obstacle::Flying(h) => h.anim.current(),
        }
    }

    pub fn pos(&self) -> Vec2 {
        match self {
            Obstacle::Ground(h) => h.pos,
            Obstacle::Flying(h) => h.pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atlas::PixelAtlas;

    #[test]
    fn test_ground_hazard_sits_on_ground_line() {
        let ob = Obstacle::ground(SpriteId::CactusSmall, 800.0, &PixelAtlas);
        assert_eq!(ob.hitbox().bottom(), GROUND_Y);
    }

    #[test]
    fn test_ground_hazard_moves_at_scroll_speed() {
        let mut ob = Obstacle::ground(SpriteId::CactusLarge, 800.0, &PixelAtlas);
        ob.update(8.0, 0);
        assert_eq!(ob.pos().x, 792.0);
    }

    #[test]
    fn test_flying_hazard_strictly_faster() {
        let mut cactus = Obstacle::ground(SpriteId::CactusSmall, 800.0, &PixelAtlas);
        let mut bird = Obstacle::flying(800.0, 100.0, &PixelAtlas);
        cactus.update(8.0, 0);
        bird.update(8.0, 0);
        assert!(bird.pos().x < cactus.pos().x);
    }

    #[test]
    fn test_flying_hazard_animates() {
        let mut bird = Obstacle::flying(800.0, 100.0, &PixelAtlas);
        let first = bird.sprite();
        bird.update(8.0, FLYING_FRAME_DELAY_MS + 1);
        assert_ne!(bird.sprite(), first);
    }

    #[test]
    fn test_expired_only_when_fully_off_screen() {
        let width = PixelAtlas.size(SpriteId::CactusSmall).x;
        let ob = Obstacle::ground(SpriteId::CactusSmall, -width + 1.0, &PixelAtlas);
        assert!(!ob.is_expired());
        let ob = Obstacle::ground(SpriteId::CactusSmall, -width - 1.0, &PixelAtlas);
        assert!(ob.is_expired());
    }
}
