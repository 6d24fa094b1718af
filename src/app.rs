use crate::controller::Controller;
use crate::core::FxConfig;
use crate::dom;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// Opt out of auto-attach by putting this attribute on `<html>`; the page
/// then calls `PageEffects.attach(options)` itself.
const MANUAL_ATTR: &str = "data-fx-manual";

/// JS handle to an attached controller.
///
/// Only one controller runs per page. `attach` fails while another is
/// attached; `detach` frees the slot.
#[wasm_bindgen]
pub struct PageEffects {
    controller: Rc<Controller>,
}

#[wasm_bindgen]
impl PageEffects {
    /// Attach with an optional options object. Keys are the camelCase
    /// `FxConfig` field names; missing keys keep their defaults.
    pub fn attach(options: JsValue) -> Result<PageEffects, JsValue> {
        let config = config_from_js(options)?;
        Controller::attach(config)
            .map(|controller| PageEffects { controller })
            .map_err(|e| JsValue::from_str(&format!("{:?}", e)))
    }

    pub fn detach(&self) {
        self.controller.detach();
    }

    #[wasm_bindgen(getter)]
    pub fn lite(&self) -> bool {
        self.controller.is_lite()
    }

    #[wasm_bindgen(getter)]
    pub fn attached(&self) -> bool {
        self.controller.is_attached()
    }
}

fn config_from_js(options: JsValue) -> Result<FxConfig, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(FxConfig::default());
    }
    serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("invalid options: {}", e)))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-fx starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let manual = document
        .document_element()
        .map(|el| el.has_attribute(MANUAL_ATTR))
        .unwrap_or(false);
    if manual {
        return Ok(());
    }

    dom::on_ready(&document, || match Controller::attach(FxConfig::default()) {
        // auto-attached effects live as long as the page
        Ok(controller) => std::mem::forget(controller),
        Err(e) => log::error!("attach error: {:?}", e),
    });
    Ok(())
}
