use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

use crate::config::{build_engine, EngineConfig};
use crate::engine::ClueEngine;

fn words_from_js(value: JsValue) -> Result<Vec<String>, JsValue> {
    from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Words must be an array of strings: {e}")))
}

fn config_from_js(value: JsValue) -> Result<EngineConfig, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(EngineConfig::default());
    }
    from_value(value).map_err(|e| JsValue::from_str(&format!("Invalid engine config: {e}")))
}

/// WebAssembly wrapper: one clue engine per puzzle being authored.
#[wasm_bindgen]
pub struct ClueBook {
    engine: Box<dyn ClueEngine>,
}

#[wasm_bindgen]
impl ClueBook {
    #[wasm_bindgen(constructor)]
    pub fn new(words: JsValue, config: JsValue) -> Result<ClueBook, JsValue> {
        let words = words_from_js(words)?;
        let config = config_from_js(config)?;
        Ok(ClueBook {
            engine: build_engine(&config, words),
        })
    }

    pub fn set(&mut self, label: &str, word: &str) -> Result<(), JsValue> {
        self.engine
            .set(label, word)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn get(&self, label: &str) -> String {
        self.engine.get(label).to_string()
    }

    pub fn display(&self, label: &str) -> String {
        self.engine.make_display(label)
    }

    pub fn clue(&self, label: &str) -> String {
        self.engine.make_clue(label)
    }

    /// All clues as a `{letter: clue}` object.
    pub fn clues(&self) -> Result<JsValue, JsValue> {
        self.engine
            .make_clues()
            .serialize(&Serializer::json_compatible())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}
