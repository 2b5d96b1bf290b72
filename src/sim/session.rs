//! Game session orchestrator and state machine
//!
//! Owns every entity and drives the per-frame update: scenery, runner,
//! spawning, collision detection, pruning, and score/difficulty progression.
//! An external driver calls [`GameSession::tick`] at the fast tick rate and
//! translates raw input into [`InputEvent`]s; the renderer consumes
//! [`DrawFrame`] snapshots and is never called from here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::Obstacle;
use super::scenery::{Cloud, ScrollingGround};
use super::spawn::Spawner;
use crate::atlas::{SpriteAtlas, SpriteId};
use crate::consts::*;
use crate::store::ScoreStore;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the opening jump
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended on a collision
    GameOver,
}

/// Discrete input commands routed by phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    DuckStart,
    DuckEnd,
    Restart,
}

/// One sprite to draw at a position
#[derive(Debug, Clone, Serialize)]
pub struct SpriteInstance {
    pub sprite: SpriteId,
    pub pos: Vec2,
}

/// Read-only drawable snapshot of one frame
#[derive(Debug, Clone, Serialize)]
pub struct DrawFrame {
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub actor: SpriteInstance,
    pub obstacles: Vec<SpriteInstance>,
    pub clouds: Vec<SpriteInstance>,
    pub ground_sprite: SpriteId,
    pub ground_offsets: [f32; 2],
    pub ground_y: f32,
}

impl DrawFrame {
    /// HUD score, 5 digits zero-padded
    pub fn score_text(&self) -> String {
        format!("{:05}", self.score)
    }

    /// HUD high score
    pub fn high_score_text(&self) -> String {
        format!("HI {:05}", self.high_score)
    }
}

/// The whole game: state machine, entities, score, and persistence
pub struct GameSession<A: SpriteAtlas, S: ScoreStore> {
    atlas: A,
    store: S,
    rng: Pcg32,
    phase: GamePhase,
    actor: Actor,
    obstacles: Vec<Obstacle>,
    clouds: Vec<Cloud>,
    ground: ScrollingGround,
    spawner: Spawner,
    scroll_speed: f32,
    score: u32,
    high_score: u32,
}

impl<A: SpriteAtlas, S: ScoreStore> GameSession<A, S> {
    /// Create a session. The high score is read from the store exactly once.
    pub fn new(atlas: A, store: S, seed: u64) -> Self {
        let high_score = store.get_int(HIGH_SCORE_KEY, 0);
        let actor = Actor::new(&atlas);
        let ground = ScrollingGround::new(&atlas);
        Self {
            atlas,
            store,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Ready,
            actor,
            obstacles: Vec::new(),
            clouds: Vec::new(),
            ground,
            spawner: Spawner::new(),
            scroll_speed: BASE_SCROLL_SPEED,
            score: 0,
            high_score,
        }
    }

    /// Route an input event according to the current phase. Events that do
    /// not apply are silently ignored.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u64) {
        match (self.phase, event) {
            (GamePhase::Ready, InputEvent::Jump) => {
                // The opening input is also the first jump
                self.phase = GamePhase::Playing;
                self.spawner.arm(now_ms);
                self.actor.jump();
                log::info!("run started");
            }
            (GamePhase::Playing, InputEvent::Jump) => self.actor.jump(),
            (GamePhase::Playing, InputEvent::DuckStart) => self.actor.set_ducking(true),
            (GamePhase::Playing, InputEvent::DuckEnd) => self.actor.set_ducking(false),
            (GamePhase::GameOver, InputEvent::Jump | InputEvent::Restart) => self.reset(),
            _ => {}
        }
    }

    /// Advance one fast tick. Only does work while playing.
    pub fn tick(&mut self, now_ms: u64) {
        if self.phase != GamePhase::Playing {
            return;
        }

        self.ground.update(self.scroll_speed);
        self.actor.update(&self.atlas, self.phase, now_ms);

        // Occasionally drift in an extra cloud
        if self.rng.random_range(0..CLOUD_SPAWN_ODDS) == 1 {
            self.spawn_cloud();
        }
        for cloud in &mut self.clouds {
            cloud.update(self.scroll_speed);
        }

        if let Some(obstacle) = self
            .spawner
            .poll(now_ms, self.score, &self.atlas, &mut self.rng)
        {
            self.obstacles.push(obstacle);
        }

        // Full positional pass over all obstacles; the first collision is
        // terminal, so acting on it after the pass is equivalent.
        let actor_hitbox = self.actor.hitbox();
        let mut collided = false;
        for obstacle in &mut self.obstacles {
            obstacle.update(self.scroll_speed, now_ms);
            if obstacle.hitbox().intersects(&actor_hitbox) {
                collided = true;
            }
        }

        self.obstacles.retain(|o| !o.is_expired());
        self.clouds.retain(|c| !c.is_expired());

        if collided {
            self.game_over();
            return;
        }

        self.score += 1;
        if self.score % SPEED_STEP_SCORE == 0 {
            self.scroll_speed += SPEED_INCREMENT;
            self.spawner.shrink_interval();
            log::debug!(
                "score {}: speed {}, spawn interval {}ms",
                self.score,
                self.scroll_speed,
                self.spawner.interval_ms()
            );
        }
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        // Put the runner back on the ground for the dead pose
        self.actor.snap_to_ground();

        if self.score > self.high_score {
            self.high_score = self.score;
            self.store.put_int(HIGH_SCORE_KEY, self.high_score);
            log::info!("new high score: {}", self.high_score);
        } else {
            log::info!("run ended at {}", self.score);
        }
    }

    /// Full reset back to the ready screen. Everything is recreated fresh;
    /// only the high score and the RNG stream carry over.
    fn reset(&mut self) {
        self.actor = Actor::new(&self.atlas);
        self.ground = ScrollingGround::new(&self.atlas);
        self.obstacles.clear();
        self.clouds.clear();
        self.spawner = Spawner::new();
        self.scroll_speed = BASE_SCROLL_SPEED;
        self.score = 0;
        self.phase = GamePhase::Ready;
    }

    fn spawn_cloud(&mut self) {
        let x = BOARD_WIDTH + self.rng.random_range(0.0..CLOUD_X_BAND);
        let y = CLOUD_MIN_Y + self.rng.random_range(0.0..CLOUD_Y_BAND);
        self.clouds.push(Cloud::new(Vec2::new(x, y), &self.atlas));
    }

    /// Snapshot everything the renderer needs for one frame
    pub fn frame(&self) -> DrawFrame {
        DrawFrame {
            phase: self.phase,
            score: self.score,
            high_score: self.high_score,
            actor: SpriteInstance {
                sprite: self.actor.pose(self.phase),
                pos: self.actor.hitbox().pos,
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| SpriteInstance {
                    sprite: o.sprite(),
                    pos: o.pos(),
                })
                .collect(),
            clouds: self
                .clouds
                .iter()
                .map(|c| SpriteInstance {
                    sprite: SpriteId::Cloud,
                    pos: c.pos(),
                })
                .collect(),
            ground_sprite: SpriteId::Track,
            ground_offsets: self.ground.offsets(),
            ground_y: GROUND_Y,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }
}
