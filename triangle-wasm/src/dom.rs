use triangle_core::{Field, Lang, TriangleInputs, TriangleOutputs, format_display, parse_field};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, Window};

use crate::constants::{LANG_TEXT_ID, PULSE_CLASS, PULSE_MS, field_id};

fn input(document: &Document, field: Field) -> Option<HtmlInputElement> {
    document.get_element_by_id(field_id(field))?.dyn_into().ok()
}

/// Snapshot the four input fields. Empty fields are absent.
pub fn read_inputs(document: &Document) -> TriangleInputs {
    let read = |field| input(document, field).and_then(|el| parse_field(&el.value()));
    TriangleInputs::new(
        read(Field::Angle),
        read(Field::Opposite),
        read(Field::Adjacent),
        read(Field::Hypotenuse),
    )
}

/// Write both derived values and highlight the fields that changed. Both
/// target fields are looked up before either is written.
pub fn write_outputs(
    window: &Window,
    document: &Document,
    out: &TriangleOutputs,
) -> Result<(), JsValue> {
    let targets = resolve_targets(out, |field| input(document, field)).map_err(|field| {
        JsValue::from_str(&format!("input #{} not found", field_id(field)))
    })?;
    for (el, text) in &targets {
        el.set_value(text);
    }
    for (el, _) in &targets {
        pulse(window, el)?;
    }
    Ok(())
}

/// Pair each derived value's display text with its target, or name the first
/// field that has none.
fn resolve_targets<T>(
    out: &TriangleOutputs,
    mut find: impl FnMut(Field) -> Option<T>,
) -> Result<Vec<(T, String)>, Field> {
    out.iter()
        .map(|d| {
            find(d.field)
                .map(|target| (target, format_display(d.value)))
                .ok_or(d.field)
        })
        .collect()
}

fn pulse(window: &Window, el: &Element) -> Result<(), JsValue> {
    el.class_list().add_1(PULSE_CLASS)?;
    let target = el.clone();
    let done = Closure::once_into_js(move || {
        let _ = target.class_list().remove_1(PULSE_CLASS);
    });
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        done.unchecked_ref::<js_sys::Function>(),
        PULSE_MS,
    )?;
    Ok(())
}

pub fn clear_fields(document: &Document) {
    for field in Field::ALL {
        if let Some(el) = input(document, field) {
            el.set_value("");
        }
    }
}

/// Swap every translatable text on the page to `lang`.
///
/// Elements carry their texts in `data-es` / `data-en`; inputs take the text
/// as placeholder. Inputs may also carry `data-<lang>-placeholder`, which wins.
pub fn apply_language(document: &Document, lang: Lang) -> Result<(), JsValue> {
    if let Some(el) = document.get_element_by_id(LANG_TEXT_ID) {
        el.set_text_content(Some(lang.other_code()));
    }

    let attr = format!("data-{}", lang.code());
    let nodes = document.query_selector_all("[data-es], [data-en]")?;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(text) = el.get_attribute(&attr) else {
            continue;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_placeholder(&text);
        } else {
            el.set_text_content(Some(&text));
        }
    }

    let placeholder_attr = format!("data-{}-placeholder", lang.code());
    for field in Field::ALL {
        if let Some(el) = input(document, field)
            && let Some(p) = el.get_attribute(&placeholder_attr)
        {
            el.set_placeholder(&p);
        }
    }

    if let Some(root) = document.document_element() {
        root.set_attribute("lang", lang.code())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use triangle_core::solve;

    fn solved() -> TriangleOutputs {
        solve(&TriangleInputs::new(Some(30.0), None, None, Some(10.0))).expect("solvable")
    }

    #[test]
    fn targets_carry_display_text_in_output_order() {
        let targets = resolve_targets(&solved(), |field| Some(field.key())).expect("all present");
        assert_eq!(
            targets,
            vec![
                ("opposite", "5.00".to_string()),
                ("adjacent", "8.66".to_string()),
            ]
        );
    }

    #[test]
    fn missing_second_target_resolves_nothing() {
        let mut asked = Vec::new();
        let got = resolve_targets(&solved(), |field| {
            asked.push(field);
            (field == Field::Opposite).then_some(field.key())
        });
        assert_eq!(got, Err(Field::Adjacent));
        assert_eq!(asked, vec![Field::Opposite, Field::Adjacent]);
    }
}
