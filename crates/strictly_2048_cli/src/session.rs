//! The interactive session loop: setup, turns, and end-of-game flow.
//!
//! A [`Session`] owns its reader, writer, renderer and settings. It reads
//! one line per prompt, drives an [`Engine`] through its public
//! operations, and renders after every change. End of input at any prompt
//! behaves like `q`.

use crate::input::{Command, NumberPrompt};
use crate::render::Renderer;
use crate::settings::GameSettings;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_2048::{Engine, EngineConfig};
use tracing::{debug, info, instrument};

/// What the session does after a game ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionTransition {
    /// Go back to the welcome screen and set up a new game.
    Restart,
    /// Print the ending banner and stop.
    Quit,
}

/// A line-oriented game session over any reader and writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    renderer: Renderer,
    settings: GameSettings,
    games_started: u64,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session that plays regular games with `settings`.
    pub fn new(input: R, output: W, settings: GameSettings) -> Self {
        Self {
            input,
            output,
            renderer: Renderer::new(),
            settings,
            games_started: 0,
        }
    }

    /// Consumes the session, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays games until the player quits, then prints the ending banner.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        while self.play_game()? == SessionTransition::Restart {
            debug!("Restarting session");
        }
        let ending = self.renderer.ending();
        self.emit(&ending)?;
        info!(games = self.games_started, "Session ended");
        Ok(())
    }

    /// Runs one game from the welcome banner to its end.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<SessionTransition> {
        let welcome = self.renderer.welcome();
        let controls = self.renderer.controls();
        self.emit(&welcome)?;
        self.emit(&controls)?;

        let Some(mut engine) = self.setup()? else {
            return Ok(SessionTransition::Quit);
        };

        match self
            .ask("Press any button to begin\n")?
            .as_deref()
            .map(Command::parse)
        {
            None | Some(Some(Command::Quit)) => return Ok(SessionTransition::Quit),
            Some(Some(Command::NewGame)) => return Ok(SessionTransition::Restart),
            Some(_) => {}
        }

        self.play(&mut engine)
    }

    /// Regular or custom setup. `None` means the player quit.
    #[instrument(skip(self))]
    fn setup(&mut self) -> Result<Option<Engine>> {
        let Some(choice) = self.ask(
            "Would you like to play the Regular Game or a Custom Game? Press c for custom: \n",
        )?
        else {
            return Ok(None);
        };

        let config = if choice.trim() == "c" {
            let Some(size) = self.ask_number(&NumberPrompt::size())? else {
                return Ok(None);
            };
            let Some(base) = self.ask_number(&NumberPrompt::base())? else {
                return Ok(None);
            };
            let size = usize::try_from(size).context("Board size out of range")?;
            EngineConfig::new(size, base)?
        } else {
            self.settings.engine_config()?
        };

        Ok(Some(self.start_engine(config)))
    }

    fn start_engine(&mut self, config: EngineConfig) -> Engine {
        let engine = match *self.settings.seed() {
            Some(seed) => Engine::seeded(config, seed.wrapping_add(self.games_started)),
            None => Engine::from_config(config),
        };
        self.games_started += 1;
        engine
    }

    /// Reprompts until a valid number or `q`. `None` means quit.
    fn ask_number(&mut self, prompt: &NumberPrompt) -> Result<Option<u64>> {
        loop {
            let question = format!("{}\n", prompt.question);
            let Some(line) = self.ask(&question)? else {
                return Ok(None);
            };
            if Command::parse(&line) == Some(Command::Quit) {
                return Ok(None);
            }
            match prompt.parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(rejection) => {
                    debug!(%rejection, "Setup answer rejected");
                    self.emit(&format!("{rejection}\n"))?;
                }
            }
        }
    }

    /// Plays turns on `engine` until it is over or the player leaves.
    ///
    /// A game over asks whether to play again.
    #[instrument(skip(self, engine), fields(size = engine.grid().size()))]
    pub fn play(&mut self, engine: &mut Engine) -> Result<SessionTransition> {
        let mut announced = false;

        while engine.status() {
            self.show(engine)?;

            let Some(line) = self.ask("Enter a Direction: ")? else {
                return Ok(SessionTransition::Quit);
            };

            match Command::parse(&line) {
                Some(Command::Quit) => return Ok(SessionTransition::Quit),
                Some(Command::NewGame) => return Ok(SessionTransition::Restart),
                Some(Command::Move(direction)) => {
                    if engine.can_move(direction) {
                        engine.play(direction)?;
                    } else {
                        debug!(
                            %direction,
                            open = ?engine.legal_directions(),
                            "Blocked direction ignored"
                        );
                    }
                }
                None => {
                    debug!(input = line.trim(), "Unrecognized command");
                    self.emit("Invalid Input\n")?;
                }
            }

            if !announced && engine.has_won() {
                announced = true;
                info!(score = engine.score(), "Winning tile reached");
                self.show(engine)?;
                let win = self.renderer.win();
                self.emit(&win)?;
            }
        }

        info!(
            score = engine.score(),
            max_tile = engine.grid().max_tile(),
            "Game over"
        );
        self.show(engine)?;
        let game_over = self.renderer.game_over();
        self.emit(&game_over)?;

        match self.ask("Play Again? y/n: ")? {
            Some(answer) if answer.trim() == "y" => Ok(SessionTransition::Restart),
            _ => Ok(SessionTransition::Quit),
        }
    }

    fn show(&mut self, engine: &Engine) -> Result<()> {
        let text = format!(
            "{}{}",
            self.renderer.score(engine.score()),
            self.renderer.grid(engine.grid())
        );
        self.emit(&text)
    }

    /// Writes `prompt` and reads one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.emit(prompt)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("Failed to write output")?;
        self.output.flush().context("Failed to flush output")
    }
}
