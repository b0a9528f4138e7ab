//! Game Logic for Hand Cricket
//!
//! Core engine for hand cricket: a two-innings number-matching game
//! against a uniform-random computer opponent. The player calls the toss,
//! elects to bat or bowl, and shows one sign per ball; matching signs put
//! the batting side out, and the second innings is a chase.
//! This crate is compiled to:
//! - Native (for host applications and tests)
//! - WASM (for the browser frontend)
//!
//! All randomness is injected through [`Dice`], so every draw can be
//! scripted in tests. The identity/session contract the surrounding
//! application uses is the [`IdentityProvider`] trait; the engine never
//! touches it.

mod dice;
mod game;
mod session;
mod toss;
mod types;

#[cfg(feature = "wasm")]
mod wasm;

pub use dice::{Dice, RandomDice, ScriptedDice};
pub use game::{Delivery, DeliveryEvent, EngineError, Innings, Match, MatchView, Phase};
pub use session::{AuthError, IdentityProvider, Session, User};
pub use toss::{resolve_toss, TossResult, TossStage};
pub use types::{BatOrBowl, HandSign, Parity, Side, Verdict};
