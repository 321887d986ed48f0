//! Terminal front end for the strictly_2048 engine.
//!
//! Everything here sits on the engine's public surface:
//!
//! - **Renderer**: boxed grid, score line and banners as plain text
//! - **Input**: one line of text to a [`Command`], plus setup prompts
//! - **Settings**: regular-game defaults from TOML and the command line
//! - **Session**: the read, mutate, render loop
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use strictly_2048_cli::{GameSettings, Session};
//!
//! # fn main() -> anyhow::Result<()> {
//! let settings = GameSettings::new().with_overrides(None, None, Some(7));
//! let mut session = Session::new(Cursor::new("\n\nq\n"), Vec::new(), settings);
//! session.run()?;
//!
//! let transcript = String::from_utf8(session.into_output())?;
//! assert!(transcript.contains("Thank You For Playing"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod input;
mod render;
mod session;
mod settings;

// Crate-level exports - Input parsing
pub use input::{Command, NumberPrompt, Rejection};

// Crate-level exports - Rendering
pub use render::Renderer;

// Crate-level exports - Session loop
pub use session::{Session, SessionTransition};

// Crate-level exports - Settings
pub use settings::{GameSettings, SettingsError};
