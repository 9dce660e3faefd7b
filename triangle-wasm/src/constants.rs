/// Browser-side constants: element ids and timings.
use triangle_core::Field;

/// How long the `calculated` highlight stays on an updated field (ms).
pub const PULSE_MS: i32 = 600;
/// CSS class toggled on fields that just received a computed value.
pub const PULSE_CLASS: &str = "calculated";

pub const CALCULATE_BUTTON_ID: &str = "calculate";
pub const CLEAR_BUTTON_ID: &str = "clear";
pub const LANG_BUTTON_ID: &str = "lang-toggle";
/// Child of the language button that shows the code of the other language.
pub const LANG_TEXT_ID: &str = "lang-text";

/// Input element id for each quantity.
pub fn field_id(field: Field) -> &'static str {
    field.key()
}
