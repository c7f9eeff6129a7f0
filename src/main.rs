//! Terminal runner (default binary).
//!
//! Reads [`Config`] from the environment, sets up logging, then runs the
//! puzzle on the alternate screen until the player quits.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dmqh::core::{Game, SimpleRng, SpawnRng};
use dmqh::input::{handle_key_event, should_quit};
use dmqh::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use dmqh::types::{GameAction, GameEvents};
use dmqh::{logging, Config};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    logging::init(config.log_path.as_deref())?;

    let rng: Box<dyn SpawnRng> = match config.seed {
        Some(seed) => {
            info!("spawn rng seeded with {seed}");
            Box::new(SimpleRng::new(seed))
        }
        None => Box::new(StdRng::from_os_rng()),
    };
    let mut game = Game::new(rng);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("game loop failed: {err:#}");
    }
    info!("exiting with score {}", game.score());
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game<Box<dyn SpawnRng>>, config: &Config) -> Result<()> {
    let view = GameView::default();
    let tick = Duration::from_millis(config.tick_ms);
    let mut fb = FrameBuffer::new(0, 0);

    let mut last: Option<GameEvents> = Some(game.reset());
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&game.snapshot(), last.as_ref(), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(tick)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                // Once the game is over only a restart is accepted.
                if matches!(action, GameAction::Slide(_)) && game.is_game_over() {
                    continue;
                }
                if let Some(events) = game.apply_action(action) {
                    if events.game_over {
                        info!("game over at score {}", events.score.score);
                    }
                    last = Some(events);
                    dirty = true;
                }
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
