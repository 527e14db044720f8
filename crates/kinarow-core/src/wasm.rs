//! WebAssembly bindings for the Kinarow game engine.
//!
//! This module exposes the game engine to JavaScript through wasm-bindgen.
//! The browser draws the board and forwards clicks; the engine decides what
//! they mean.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::config::GameConfig;
#[cfg(feature = "wasm")]
use crate::game::{GameEngine, GameStatus};
#[cfg(feature = "wasm")]
use crate::layout::CellGeometry;
#[cfg(feature = "wasm")]
use crate::player::Mark;

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    engine: GameEngine,
    geometry: CellGeometry,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a new game; `cell_size` is the pixel size used by `cellAt`
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: usize,
        height: usize,
        win_length: usize,
        player_count: u8,
        cell_size: u32,
    ) -> Result<WasmGame, JsValue> {
        let config = GameConfig::new(width, height, win_length, player_count);
        let engine = GameEngine::new(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid game: {}", e)))?;
        let geometry = CellGeometry::new(cell_size)
            .map_err(|e| JsValue::from_str(&format!("Invalid layout: {}", e)))?;

        Ok(WasmGame { engine, geometry })
    }

    /// Place a mark for the current player, returns the status JSON or error
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<String, JsValue> {
        match self.engine.apply_move(row, col) {
            Ok(status) => {
                Ok(serde_json::to_string(&status).unwrap_or_else(|_| "null".to_string()))
            }
            Err(e) => Err(JsValue::from_str(&format!("Move failed: {}", e))),
        }
    }

    /// Place a mark at the cell under a pixel
    #[wasm_bindgen(js_name = clickAt)]
    pub fn click_at(&mut self, x: u32, y: u32) -> Result<String, JsValue> {
        let (row, col) = self
            .geometry
            .cell_at_checked(self.engine.board(), x, y)
            .map_err(|e| JsValue::from_str(&format!("Move failed: {}", e)))?;
        self.apply_move(row, col)
    }

    /// Get the grid cell under a pixel as `[row, col]`
    #[wasm_bindgen(js_name = cellAt)]
    pub fn cell_at(&self, x: u32, y: u32) -> Vec<u32> {
        let (row, col) = self.geometry.cell_at(x, y);
        vec![row as u32, col as u32]
    }

    /// Get the game status as JSON
    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> String {
        serde_json::to_string(&self.engine.status()).unwrap_or_else(|_| "null".to_string())
    }

    /// Check if the game is finished
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.engine.is_over()
    }

    /// Get the winner (if game is won)
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<u8> {
        match self.engine.status() {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Get the current player ID
    #[wasm_bindgen(js_name = getCurrentPlayer)]
    pub fn get_current_player(&self) -> u8 {
        self.engine.current_player()
    }

    /// Get the symbol used for a player ("O", "X", "#", "^")
    #[wasm_bindgen(js_name = getMark)]
    pub fn get_mark(&self, player: u8) -> Option<String> {
        Mark::for_player(player).map(|m| m.symbol().to_string())
    }

    /// Get the full game state as JSON (for rendering)
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        self.engine.to_json().unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the board rows as JSON, 0 for empty cells and 1-4 for players
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        serde_json::to_string(&self.engine.snapshot().board).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the winning line cells as JSON, or "null"
    #[wasm_bindgen(js_name = getWinningLine)]
    pub fn get_winning_line(&self) -> String {
        serde_json::to_string(&self.engine.winning_line()).unwrap_or_else(|_| "null".to_string())
    }

    /// Start a new game with the same settings
    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.engine
            .restart()
            .map_err(|e| JsValue::from_str(&format!("Restart failed: {}", e)))
    }
}
