//! Printing of rendered reports in a separate window

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    #[error("Popup blocked. Please allow popups.")]
    PopupBlocked,
    #[error("Print failed: {0}")]
    Dom(String),
}

/// Opens a new window with `html` and invokes the print dialog
pub fn print_html(html: &str) -> Result<(), PrintError> {
    let window = web_sys::window().ok_or_else(|| PrintError::Dom("No window object".into()))?;
    let popup = window
        .open_with_url_and_target("", "_blank")
        .ok()
        .flatten()
        .ok_or(PrintError::PopupBlocked)?;

    let document = popup
        .document()
        .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
        .ok_or_else(|| PrintError::Dom("No document in print window".into()))?;
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(html));
    document
        .write(&parts)
        .map_err(|e| PrintError::Dom(format!("{:?}", e)))?;
    document
        .close()
        .map_err(|e| PrintError::Dom(format!("{:?}", e)))?;

    popup
        .focus()
        .map_err(|e| PrintError::Dom(format!("{:?}", e)))?;
    popup
        .print()
        .map_err(|e| PrintError::Dom(format!("{:?}", e)))?;
    Ok(())
}
