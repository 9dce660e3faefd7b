use triangle_core::Lang;
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Write one line to the browser console.
pub fn log(line: &str) {
    web_sys::console::log_1(&JsValue::from(line));
}

/// Percent-decoded value of `key` in a `?a=b&c=d` query string. A bare key
/// yields an empty value.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| percent_encoding::percent_decode_str(v).decode_utf8_lossy().into_owned())
}

/// Language to start with: `?lang=` wins, then `<html lang>`, then Spanish.
pub fn initial_lang(search: Option<&str>, document: &Document) -> Lang {
    if let Some(lang) = search
        .and_then(|s| query_param(s, "lang"))
        .and_then(|tag| Lang::parse(&tag))
    {
        return lang;
    }
    document
        .document_element()
        .and_then(|el| el.get_attribute("lang"))
        .and_then(|tag| Lang::parse(&tag))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_param_is_decoded() {
        assert_eq!(query_param("?lang=en&x=1", "lang"), Some("en".to_string()));
        assert_eq!(query_param("?x=1&lang=es%2DMX", "lang"), Some("es-MX".to_string()));
        assert_eq!(query_param("?x=1", "lang"), None);
    }

    #[test]
    fn bare_key_has_empty_value() {
        assert_eq!(query_param("?debug&lang=en", "debug"), Some(String::new()));
        assert_eq!(query_param("", "lang"), None);
    }
}
