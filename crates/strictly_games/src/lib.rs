//! Strictly Games - terminal tic-tac-toe against an unbeatable engine
//!
//! The game logic lives in [`strictly_tictactoe`]. This crate is the
//! presentation layer around it.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for seats, hints and logging
//! - **Session**: the authoritative board and who controls each mark
//! - **Render**: plain-text board, status and hint lines
//! - **Terminal**: line-based game loop, self-play and analysis reports
//!
//! # Example
//!
//! ```
//! use strictly_games::{GameSession, PlayerType};
//! use strictly_tictactoe::{Move, Player};
//!
//! let mut session = GameSession::new(Player::X);
//! session.play_human(Move::new(1, 1))?;
//! assert_eq!(session.to_move(), Some(PlayerType::Engine));
//! let reply = session.play_engine();
//! assert!(reply.is_some());
//! # Ok::<(), strictly_games::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod render;
mod session;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Session management
pub use session::{GameSession, PlayerType, SessionError};

// Crate-level exports - Rendering
pub use render::{render_board, render_cells, render_hints, render_status};

// Crate-level exports - Terminal front end
pub use terminal::{parse_move, play, report_best_move, self_play};
