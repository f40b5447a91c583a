use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::SetupError;

/// GETs `url` relative to the page and returns the body as text.
pub async fn fetch_text(url: &str) -> Result<String, SetupError> {
    let fail = |reason: String| SetupError::Fetch {
        url: url.to_owned(),
        reason,
    };

    let window = web_sys::window().ok_or(SetupError::NoWindow)?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fail(format!("{e:?}")))?;
    let resp: Response = resp.dyn_into().map_err(|e| fail(format!("{e:?}")))?;

    if !resp.ok() {
        return Err(fail(format!("HTTP {} {}", resp.status(), resp.status_text())));
    }

    let text = resp.text().map_err(|e| fail(format!("{e:?}")))?;
    JsFuture::from(text)
        .await
        .map_err(|e| fail(format!("{e:?}")))?
        .as_string()
        .ok_or_else(|| fail("response body was not a string".to_owned()))
}
