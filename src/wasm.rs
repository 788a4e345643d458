use crate::cards::*;
use crate::notation::*;
use wasm_bindgen::prelude::*;

// Re-export types for JavaScript

#[wasm_bindgen]
pub struct WasmParse(Parse);

#[wasm_bindgen]
pub struct WasmNotation(Notation);

// Parse implementation
#[wasm_bindgen]
impl WasmParse {
    /// One of "empty", "needs_suitedness", "valid", "invalid".
    #[wasm_bindgen]
    pub fn kind(&self) -> String {
        self.0.kind().to_string()
    }

    #[wasm_bindgen]
    pub fn normalized(&self) -> Option<String> {
        self.0.normalized()
    }

    #[wasm_bindgen]
    pub fn message(&self) -> Option<String> {
        self.0.message().map(String::from)
    }

    #[wasm_bindgen]
    pub fn suggestions(&self) -> js_sys::Array {
        self.0
            .suggestions()
            .iter()
            .map(Notation::to_string)
            .map(JsValue::from)
            .collect()
    }

    #[wasm_bindgen]
    pub fn notation(&self) -> Option<WasmNotation> {
        self.0.notation().map(WasmNotation)
    }

    /// Accepts "s", "o", "suited" or "offsuit".
    #[wasm_bindgen]
    pub fn resolve(&self, suffix: &str) -> Result<WasmParse, JsValue> {
        Suitedness::try_from(suffix)
            .map(|suitedness| Self(self.0.resolve(suitedness)))
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.0).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn into_string(&self) -> String {
        self.0.to_string()
    }
}

// Notation implementation
#[wasm_bindgen]
impl WasmNotation {
    #[wasm_bindgen]
    pub fn from_string(s: &str) -> Result<WasmNotation, JsValue> {
        Notation::try_from(s)
            .map(Self)
            .map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen]
    pub fn into_string(&self) -> String {
        self.0.to_string()
    }

    #[wasm_bindgen]
    pub fn label(&self) -> String {
        self.0.label()
    }

    #[wasm_bindgen]
    pub fn combos(&self) -> usize {
        self.0.combos()
    }

    #[wasm_bindgen]
    pub fn is_pair(&self) -> bool {
        self.0.is_pair()
    }

    /// Chart cell as `[row, col]`, Ace first.
    #[wasm_bindgen]
    pub fn cell(&self) -> js_sys::Array {
        let (row, col) = Grid::locate(self.0);
        [row, col].into_iter().map(|i| JsValue::from(i as u32)).collect()
    }

    #[wasm_bindgen]
    pub fn all() -> js_sys::Array {
        Notation::all().map(Self).map(JsValue::from).collect()
    }
}

#[wasm_bindgen(js_name = "parse")]
pub fn parse_hand(text: &str) -> WasmParse {
    WasmParse(parse(text))
}

#[wasm_bindgen(js_name = "display")]
pub fn display_hand(normalized: &str) -> String {
    display(normalized)
}

// Initialize function
#[wasm_bindgen(start)]
pub fn start() {
    // This function will be called when the WASM module is loaded
    console_error_panic_hook::set_once();
}
