//! WASM bindings for the browser frontend

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::game::MatchState;
use crate::moves::Move;
use crate::random::SeededRng;
use crate::strategy::{describe_difficulty, Difficulty};

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Seed from `Math.random`, which is all the entropy a browser game needs
fn browser_rng() -> SeededRng {
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    SeededRng::from_u64((hi << 32) | lo)
}

/// A match against the computer, owned by the page
#[wasm_bindgen]
pub struct WasmMatch {
    state: MatchState,
    rng: SeededRng,
}

#[wasm_bindgen]
impl WasmMatch {
    /// Start a match
    ///
    /// # Arguments
    /// * `difficulty` - "Easy", "Medium" or "Hard" (case-insensitive)
    /// * `total_rounds` - Number of rounds, at least 1
    #[wasm_bindgen(constructor)]
    pub fn new(difficulty: &str, total_rounds: u32) -> Result<WasmMatch, JsError> {
        let difficulty: Difficulty = difficulty.parse()?;
        let state = MatchState::start(difficulty, total_rounds)?;
        Ok(Self { state, rng: browser_rng() })
    }

    /// Start a match from a JSON `MatchConfig`
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_json: &str) -> Result<WasmMatch, JsError> {
        let config = crate::config::MatchConfig::from_json(config_json)?;
        let state = MatchState::from_config(&config)?;
        Ok(Self { state, rng: browser_rng() })
    }

    /// Play a round with the player's move name
    ///
    /// # Returns
    /// Serialized RoundReport plus its display `message`
    pub fn play(&mut self, player_move: &str) -> Result<JsValue, JsError> {
        let player_move: Move = player_move.parse()?;
        let report = self.state.play_round(player_move, &mut self.rng)?;
        to_js(&RoundView { message: report.message(), report })
    }

    /// Start over with the same difficulty and round count
    pub fn restart(&mut self) -> Result<(), JsError> {
        self.state.restart()?;
        Ok(())
    }

    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Serialized MatchState
    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.state)
    }

    /// Serialized MatchSummary, or `null` while the match is running
    pub fn summary(&self) -> Result<JsValue, JsError> {
        match self.state.summary() {
            Some(summary) => to_js(&SummaryView { message: summary.message(), summary }),
            None => Ok(JsValue::NULL),
        }
    }
}

#[derive(serde::Serialize)]
struct RoundView {
    #[serde(flatten)]
    report: crate::game::RoundReport,
    message: String,
}

#[derive(serde::Serialize)]
struct SummaryView {
    #[serde(flatten)]
    summary: crate::game::MatchSummary,
    message: String,
}

#[derive(serde::Serialize)]
struct MoveInfo {
    id: Move,
    name: &'static str,
    beats: [Move; 2],
}

/// Get all moves with what each one beats
#[wasm_bindgen(js_name = getMoves)]
pub fn get_moves() -> Result<JsValue, JsError> {
    let moves: Vec<MoveInfo> = Move::ALL
        .iter()
        .map(|m| MoveInfo { id: *m, name: m.label(), beats: m.defeats() })
        .collect();
    to_js(&moves)
}

#[derive(serde::Serialize)]
struct DifficultyInfo {
    id: Difficulty,
    name: &'static str,
    description: &'static str,
}

/// Get all difficulty tiers
#[wasm_bindgen(js_name = getDifficulties)]
pub fn get_difficulties() -> Result<JsValue, JsError> {
    let tiers: Vec<DifficultyInfo> = Difficulty::ALL
        .iter()
        .map(|d| DifficultyInfo { id: *d, name: d.label(), description: describe_difficulty(*d) })
        .collect();
    to_js(&tiers)
}
