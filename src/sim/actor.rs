//! The player character
//!
//! Vertical kinematics only: gravity pulls the runner back to a fixed resting
//! height, jumps are grounded-only, and ducking swaps in a shorter sprite
//! while keeping the character anchored to the floor.

use glam::Vec2;

use super::anim::Animation;
use super::rect::Hitbox;
use super::session::GamePhase;
use crate::atlas::{SpriteAtlas, SpriteId};
use crate::consts::*;

const RUN_FRAMES: &[SpriteId] = &[SpriteId::Run1, SpriteId::Run2];
const DUCK_FRAMES: &[SpriteId] = &[SpriteId::Duck1, SpriteId::Duck2];

/// The player-controlled runner
#[derive(Debug, Clone)]
pub struct Actor {
    /// Top-left of the standing sprite; x never changes
    pos: Vec2,
    /// y when standing on the ground
    resting_y: f32,
    velocity_y: f32,
    ducking: bool,
    /// Standing sprite height, needed to floor-anchor the duck pose
    standing_height: f32,
    run_anim: Animation,
    duck_anim: Animation,
    hitbox: Hitbox,
}

impl Actor {
    pub fn new(atlas: &dyn SpriteAtlas) -> Self {
        let standing = atlas.size(SpriteId::Run1);
        let resting_y = GROUND_Y - standing.y;
        let pos = Vec2::new(ACTOR_X, resting_y);
        Self {
            pos,
            resting_y,
            velocity_y: 0.0,
            ducking: false,
            standing_height: standing.y,
            run_anim: Animation::new(RUN_FRAME_DELAY_MS, RUN_FRAMES),
            duck_anim: Animation::new(RUN_FRAME_DELAY_MS, DUCK_FRAMES),
            hitbox: Hitbox::new(pos, standing),
        }
    }

    /// Integrate gravity and refresh the hitbox. Only evolves while playing.
    pub fn update(&mut self, atlas: &dyn SpriteAtlas, phase: GamePhase, now_ms: u64) {
        if phase != GamePhase::Playing {
            return;
        }

        self.velocity_y += GRAVITY;
        self.pos.y += self.velocity_y;

        // Ground check
        if self.pos.y >= self.resting_y {
            self.pos.y = self.resting_y;
            self.velocity_y = 0.0;
        }

        if self.ducking {
            self.duck_anim.advance(now_ms);
        } else {
            self.run_anim.advance(now_ms);
        }
        self.refresh_hitbox(atlas, phase);
    }

    /// Apply the jump impulse. No-op unless grounded, so duplicate jump
    /// events while airborne are harmless.
    pub fn jump(&mut self) {
        if self.grounded() {
            self.velocity_y = JUMP_IMPULSE;
        }
    }

    /// Enable ducking (grounded only) or disable it (always allowed)
    pub fn set_ducking(&mut self, duck: bool) {
        if duck {
            if self.grounded() {
                self.ducking = true;
            }
        } else {
            self.ducking = false;
        }
    }

    #[inline]
    pub fn grounded(&self) -> bool {
        self.pos.y >= self.resting_y
    }

    pub fn ducking(&self) -> bool {
        self.ducking
    }

    pub fn resting_y(&self) -> f32 {
        self.resting_y
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Sprite for the current pose
    pub fn pose(&self, phase: GamePhase) -> SpriteId {
        if phase == GamePhase::GameOver {
            SpriteId::Dead
        } else if !self.grounded() {
            SpriteId::Jump
        } else if self.ducking {
            self.duck_anim.current()
        } else {
            self.run_anim.current()
        }
    }

    /// Current hitbox (also where the renderer should draw the sprite)
    pub fn hitbox(&self) -> Hitbox {
        self.hitbox
    }

    /// Put the runner back on the ground (dead pose placement)
    pub fn snap_to_ground(&mut self) {
        self.pos.y = self.resting_y;
        self.velocity_y = 0.0;
    }

    fn refresh_hitbox(&mut self, atlas: &dyn SpriteAtlas, phase: GamePhase) {
        let size = atlas.size(self.pose(phase));
        // The duck sprite is shorter; shift its top down so the character
        // stays visually anchored to the floor.
        let y = if self.ducking {
            self.resting_y + (self.standing_height - size.y)
        } else {
            self.pos.y
        };
        self.hitbox = Hitbox::new(Vec2::new(self.pos.x, y), size);
    }
}
