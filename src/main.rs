//! Pixel Dash entry point
//!
//! A small crossterm front-end around the deterministic core: scales the
//! 750x250 logical board down to a character grid, maps keys to input events,
//! and drives `GameSession::tick` at the fast tick rate.

use std::io::{self, Write, stdout};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};

use pixel_dash::consts::*;
use pixel_dash::sim::{DrawFrame, GamePhase, GameSession, InputEvent};
use pixel_dash::{JsonFileStore, PixelAtlas, SpriteId};

/// Logical units per terminal column
const CELL_W: f32 = 10.0;
/// Logical units per terminal row
const CELL_H: f32 = 10.0;
const COLS: u16 = (BOARD_WIDTH / CELL_W) as u16;
const ROWS: u16 = (BOARD_HEIGHT / CELL_H) as u16;

/// How long a duck key press keeps the runner ducked. Plain terminals report
/// key presses but not releases, so the release is synthesized from the time
/// since the last press.
const DUCK_HOLD: Duration = Duration::from_millis(350);

fn main() -> io::Result<()> {
    env_logger::init();

    let atlas = PixelAtlas;
    let store = JsonFileStore::open_default();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = GameSession::new(atlas, store, seed);

    let mut out = stdout();
    terminal::enable_raw_mode()?;
    execute!(
        out,
        terminal::EnterAlternateScreen,
        terminal::Clear(ClearType::All),
        cursor::Hide
    )?;

    let result = run(&mut session, &mut out);

    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(
    session: &mut GameSession<PixelAtlas, JsonFileStore>,
    out: &mut impl Write,
) -> io::Result<()> {
    let tick_rate = Duration::from_millis(TICK_MS);
    let start = Instant::now();
    let mut last_duck_press: Option<Instant> = None;

    loop {
        let frame_start = Instant::now();
        let now_ms = start.elapsed().as_millis() as u64;

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') | KeyCode::Up => {
                        session.handle_input(InputEvent::Jump, now_ms)
                    }
                    KeyCode::Down => {
                        session.handle_input(InputEvent::DuckStart, now_ms);
                        last_duck_press = Some(Instant::now());
                    }
                    KeyCode::Char('r') => session.handle_input(InputEvent::Restart, now_ms),
                    _ => {}
                }
            }
        }

        // Synthesized duck release
        if let Some(pressed) = last_duck_press {
            if pressed.elapsed() > DUCK_HOLD {
                session.handle_input(InputEvent::DuckEnd, now_ms);
                last_duck_press = None;
            }
        }

        session.tick(now_ms);
        draw(out, &session.frame())?;

        if let Some(remaining) = tick_rate.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
}

fn draw(out: &mut impl Write, frame: &DrawFrame) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;

    for cloud in &frame.clouds {
        put(out, cloud.pos.x, cloud.pos.y, "~~~")?;
    }

    // Ground line
    let ground_row = (GROUND_Y / CELL_H) as u16;
    queue!(out, cursor::MoveTo(0, ground_row))?;
    queue!(out, Print("=".repeat(COLS as usize)))?;

    for obstacle in &frame.obstacles {
        let glyph = match obstacle.sprite {
            SpriteId::Bird1 => "v",
            SpriteId::Bird2 => "^",
            SpriteId::CactusSmall => "#",
            SpriteId::CactusLarge => "##",
            _ => "###",
        };
        put(out, obstacle.pos.x, obstacle.pos.y, glyph)?;
    }

    let actor_glyph = match frame.actor.sprite {
        SpriteId::Dead => "x",
        SpriteId::Jump => "@",
        SpriteId::Duck1 | SpriteId::Duck2 => "_@",
        _ => "@",
    };
    put(out, frame.actor.pos.x, frame.actor.pos.y, actor_glyph)?;

    // HUD
    let hud = format!("{}  {}", frame.high_score_text(), frame.score_text());
    let hud_col = COLS.saturating_sub(hud.len() as u16 + 1);
    queue!(out, cursor::MoveTo(hud_col, 0), Print(hud))?;

    match frame.phase {
        GamePhase::Ready => {
            queue!(
                out,
                cursor::MoveTo(COLS / 2 - 12, ROWS / 2),
                Print("press space/up to start")
            )?;
        }
        GamePhase::GameOver => {
            queue!(
                out,
                cursor::MoveTo(COLS / 2 - 5, ROWS / 2 - 1),
                Print("GAME OVER"),
                cursor::MoveTo(COLS / 2 - 11, ROWS / 2 + 1),
                Print("space/up or r to retry")
            )?;
        }
        GamePhase::Playing => {}
    }

    out.flush()
}

/// Print a glyph at a logical board position, clipped to the grid
fn put(out: &mut impl Write, x: f32, y: f32, glyph: &str) -> io::Result<()> {
    if x < 0.0 || y < 0.0 {
        return Ok(());
    }
    let col = (x / CELL_W) as u16;
    let row = (y / CELL_H) as u16;
    if col < COLS && row < ROWS {
        queue!(out, cursor::MoveTo(col, row), Print(glyph))?;
    }
    Ok(())
}
