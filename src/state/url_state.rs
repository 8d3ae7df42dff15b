//! URL state encoding/decoding for shareable URLs.
//!
//! Encodes the current rotation and view mode in the query string so
//! reloading restores the view and URLs can be shared.

/// Parsed URL parameters.
#[derive(Debug, Default)]
pub struct UrlParams {
    pub lambda: Option<f64>,
    pub phi: Option<f64>,
    pub view: Option<String>,
}

/// Parse a raw query string (with or without the leading `?`).
pub fn parse_query(search: &str) -> UrlParams {
    let mut params = UrlParams::default();

    let query = search.trim_start_matches('?');
    if query.is_empty() {
        return params;
    }

    for pair in query.split('&') {
        let mut kv = pair.splitn(2, '=');
        let key = kv.next().unwrap_or("");
        let value = kv.next().unwrap_or("");
        match key {
            "lon" => params.lambda = value.parse().ok(),
            "lat" => params.phi = value.parse().ok(),
            "view" => params.view = Some(value.to_string()),
            _ => {}
        }
    }

    params
}

/// Parse URL query parameters from the current browser URL.
#[cfg(target_arch = "wasm32")]
pub fn parse_from_url() -> UrlParams {
    let Ok(search) = web_sys::window().expect("no window").location().search() else {
        return UrlParams::default();
    };
    parse_query(&search)
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn parse_from_url() -> UrlParams {
    UrlParams::default()
}

/// Push current state to the URL query string using `replaceState`.
#[cfg(target_arch = "wasm32")]
pub fn push_to_url(lambda: f64, phi: f64, view: &str) {
    let query = format!("?lon={:.2}&lat={:.2}&view={}", lambda, phi, view);

    let window = web_sys::window().expect("no window");
    let history = window.history().expect("no history");
    let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&query));
}

/// No-op stub for native builds.
#[cfg(not(target_arch = "wasm32"))]
pub fn push_to_url(_lambda: f64, _phi: f64, _view: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rotation_and_view() {
        let params = parse_query("?lon=123.45&lat=10.00&view=atlas");

        assert_eq!(params.lambda, Some(123.45));
        assert_eq!(params.phi, Some(10.0));
        assert_eq!(params.view.as_deref(), Some("atlas"));
    }

    #[test]
    fn empty_query_yields_no_params() {
        let params = parse_query("");
        assert!(params.lambda.is_none());
        assert!(params.phi.is_none());
        assert!(params.view.is_none());
    }

    #[test]
    fn unknown_and_malformed_pairs_are_ignored() {
        let params = parse_query("?zoom=3&lon=abc&lat=5");

        assert!(params.lambda.is_none());
        assert_eq!(params.phi, Some(5.0));
    }
}
