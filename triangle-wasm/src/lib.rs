use std::fmt::Debug;

use triangle_core::{Lang, SolveError, TriangleInputs, calculate, localize};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

mod constants;
mod dom;
mod state;
mod utils;

use constants::{CALCULATE_BUTTON_ID, CLEAR_BUTTON_ID, LANG_BUTTON_ID};
use state::{STATE, State, with_state};
use utils::{initial_lang, log};

fn run_calculation(state: &State) {
    let inputs = dom::read_inputs(&state.document);
    match calculate(&inputs) {
        Ok(out) => {
            if let Err(e) = dom::write_outputs(&state.window, &state.document, &out) {
                log(&format!("Failed to write results: {:?}", e));
            }
        }
        Err(err) => {
            // Nothing is written back on failure.
            let lines = report_rejection(&err, state.lang, |msg| {
                state.window.alert_with_message(msg)
            });
            for line in lines {
                log(&line);
            }
        }
    }
}

/// Show the localized text for a rejected request through `alert` and return
/// the console lines describing what happened.
fn report_rejection<E: Debug>(
    err: &SolveError,
    lang: Lang,
    alert: impl FnOnce(&str) -> Result<(), E>,
) -> Vec<String> {
    let mut lines = vec![format!("Calculation rejected: {err}")];
    if let Err(e) = alert(&localize(err, lang)) {
        lines.push(format!("Failed to show alert: {:?}", e));
    }
    lines
}

fn on_click(
    document: &Document,
    id: &str,
    handler: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    if let Some(btn) = document.get_element_by_id(id) {
        let btn: HtmlElement = btn.dyn_into()?;
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(handler));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    } else {
        log(&format!("Button #{id} not found"));
    }
    Ok(())
}

fn attach_ui(doc: &Document) -> Result<(), JsValue> {
    on_click(doc, CALCULATE_BUTTON_ID, || {
        with_state(|s| run_calculation(s));
    })?;

    on_click(doc, CLEAR_BUTTON_ID, || {
        with_state(|s| dom::clear_fields(&s.document));
    })?;

    on_click(doc, LANG_BUTTON_ID, || {
        with_state(|s| {
            s.lang = s.lang.toggle();
            if let Err(e) = dom::apply_language(&s.document, s.lang) {
                log(&format!("Failed to switch language: {:?}", e));
            }
        });
    })?;

    Ok(())
}

/// Solve from a JSON object such as `{"angle": 30, "hypotenuse": 10}` for
/// callers that drive the solver from their own scripts. Errors are thrown as
/// localized strings.
#[wasm_bindgen]
pub fn solve_json(inputs: &str, lang: Option<String>) -> Result<String, JsValue> {
    let lang = lang.as_deref().and_then(Lang::parse).unwrap_or_default();
    let inputs: TriangleInputs = serde_json::from_str(inputs)
        .map_err(|e| JsValue::from_str(&format!("invalid inputs: {e}")))?;
    let out = calculate(&inputs).map_err(|e| JsValue::from_str(&localize(&e, lang)))?;
    serde_json::to_string(&out).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let search = window.location().search().ok();
    let lang = initial_lang(search.as_deref(), &document);

    dom::apply_language(&document, lang)?;
    attach_ui(&document)?;
    STATE.with(|st| {
        st.replace(Some(State {
            window,
            document,
            lang,
        }))
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use triangle_core::Leg;

    #[test]
    fn rejection_alerts_localized_text() {
        let err = SolveError::LegExceedsHypotenuse { leg: Leg::Opposite };
        let mut shown = String::new();
        let lines = report_rejection(&err, Lang::En, |msg| {
            shown = msg.to_string();
            Ok::<(), String>(())
        });
        assert_eq!(shown, "Error: The leg cannot be greater than the hypotenuse");
        assert_eq!(lines, vec!["Calculation rejected: opposite leg is longer than the hypotenuse"]);
    }

    #[test]
    fn failed_alert_is_logged() {
        let err = SolveError::WrongInputCount { found: 3 };
        let lines = report_rejection(&err, Lang::Es, |_| Err("blocked"));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Failed to show alert: \"blocked\"");
    }
}
