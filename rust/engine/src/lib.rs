//! # hanabi-engine: Hanabi Rules Engine Core
//!
//! A deterministic rules engine for the cooperative card game Hanabi: deck
//! composition, turn sequencing, hint-token accounting, and win/loss
//! detection. Designed as the backing model for a larger application (server
//! or UI) that drives play through discrete actions and reads the resulting
//! state back, with reproducible RNG for replay and debugging.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Color, Rank, Card) and deck composition
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`knowledge`] - Per-card hint knowledge (still-possible colors/ranks)
//! - [`board`] - The game-state aggregate and its three operations
//! - [`player`] - Player hands, held cards, and the action enum
//! - [`view`] - Per-player visibility snapshots (own cards masked)
//! - [`logger`] - Game record serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use hanabi_engine::board::Board;
//!
//! // Create a 2-player game with a fixed seed
//! let mut board = Board::new(2, Some(12345)).expect("2 players is valid");
//! assert_eq!(board.hints(), 8);
//! assert_eq!(board.bombs(), 3);
//! assert_eq!(board.deck_remaining(), 40);
//!
//! // Player 0 tells player 1 about their first card's rank
//! board.give_hint(1, 0, true).expect("tokens available");
//! assert_eq!(board.hints(), 7);
//!
//! // Player 1 plays their first card; a replacement is drawn
//! match board.play(1, 0) {
//!     Ok(()) => {}
//!     Err(e) => println!("play ended the game: {}", e),
//! }
//! assert_eq!(board.deck_remaining(), 39);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All deals are reproducible using seeded RNG:
//!
//! ```rust
//! use hanabi_engine::board::Board;
//!
//! // Same seed produces the same deal
//! let b1 = Board::new(2, Some(42)).unwrap();
//! let b2 = Board::new(2, Some(42)).unwrap();
//! assert_eq!(b1.players()[0].hand(), b2.players()[0].hand());
//! ```
//!
//! ## Visibility
//!
//! Players never see their own cards' identities, only the hint-narrowed
//! candidate sets. [`view::BoardView`] enforces that contract for consumers:
//!
//! ```rust
//! use hanabi_engine::board::Board;
//! use hanabi_engine::view::BoardView;
//!
//! let board = Board::new(2, Some(7)).unwrap();
//! let view = BoardView::observed_by(&board, 0).expect("observer exists");
//! assert!(view.hands[0].cards.iter().all(|c| c.identity.is_none()));
//! assert!(view.hands[1].cards.iter().all(|c| c.identity.is_some()));
//! ```

pub mod board;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod knowledge;
pub mod logger;
pub mod player;
pub mod view;
