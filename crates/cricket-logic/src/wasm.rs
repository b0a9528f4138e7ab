//! WASM bindings for the browser frontend.

#![cfg(feature = "wasm")]

use crate::dice::RandomDice;
use crate::game::Match;
use crate::types::{BatOrBowl, HandSign, Parity};
use wasm_bindgen::prelude::*;

/// A live hand-cricket match for the browser
///
/// Owns the match state and the dice. Every method maps to one engine
/// operation; results come back as plain objects for the UI to render,
/// and illegal calls surface as thrown errors.
#[wasm_bindgen]
pub struct HandCricket {
    game: Match,
    dice: RandomDice,
}

#[wasm_bindgen]
impl HandCricket {
    /// Creates a match waiting for the toss parity call.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            game: Match::new(),
            dice: RandomDice::new(),
        }
    }

    /// Calls `"odd"` or `"even"` on the toss sum.
    pub fn choose_parity(&mut self, parity: &str) -> Result<(), JsError> {
        let parity = parse_parity(parity)?;
        self.game
            .choose_parity(parity)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Throws the player's toss number (1-6) and resolves the toss.
    ///
    /// Returns the toss result: both numbers, the sum and its parity,
    /// whether the player won, and the computer's election on a lost
    /// toss.
    pub fn pick_toss_number(&mut self, number: u8) -> Result<JsValue, JsError> {
        let sign = HandSign::new(number).map_err(|e| JsError::new(&e.to_string()))?;
        let toss = self
            .game
            .pick_toss_number(sign, &mut self.dice)
            .map_err(|e| JsError::new(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&toss)
            .map_err(|e| JsError::new(&format!("serialization error: {}", e)))
    }

    /// Elects `"bat"` or `"bowl"` after a won toss.
    pub fn choose_bat_or_bowl(&mut self, choice: &str) -> Result<(), JsError> {
        let choice = parse_choice(choice)?;
        self.game
            .choose_bat_or_bowl(choice)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Plays one ball with the player's sign (1-6).
    ///
    /// Returns the delivery: both numbers and what the ball did — runs,
    /// an innings change, or the end of the match.
    pub fn play_ball(&mut self, number: u8) -> Result<JsValue, JsError> {
        let sign = HandSign::new(number).map_err(|e| JsError::new(&e.to_string()))?;
        let delivery = self
            .game
            .play_ball(sign, &mut self.dice)
            .map_err(|e| JsError::new(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&delivery)
            .map_err(|e| JsError::new(&format!("serialization error: {}", e)))
    }

    /// Returns the match to its initial state.
    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Snapshot of the whole match for re-rendering.
    pub fn state(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.game.view())
            .map_err(|e| JsError::new(&format!("serialization error: {}", e)))
    }
}

impl Default for HandCricket {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_parity(raw: &str) -> Result<Parity, JsError> {
    match raw {
        "odd" => Ok(Parity::Odd),
        "even" => Ok(Parity::Even),
        _ => Err(JsError::new(&format!(
            "unknown parity {:?}, expected \"odd\" or \"even\"",
            raw
        ))),
    }
}

fn parse_choice(raw: &str) -> Result<BatOrBowl, JsError> {
    match raw {
        "bat" => Ok(BatOrBowl::Bat),
        "bowl" => Ok(BatOrBowl::Bowl),
        _ => Err(JsError::new(&format!(
            "unknown choice {:?}, expected \"bat\" or \"bowl\"",
            raw
        ))),
    }
}
