//! Session snapshot the server embeds in the page.

use greenhouse_domain::dashboard::Bootstrap;

/// Id of the `<script type="application/json">` element holding the snapshot.
pub const BOOTSTRAP_ELEMENT_ID: &str = "dashboard-bootstrap";

/// Read the embedded snapshot.
///
/// A missing or malformed document yields an empty snapshot; the first
/// refresh then fills in devices and mode.
pub fn read_bootstrap() -> Bootstrap {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
        .and_then(|element| element.text_content());
    let Some(text) = text else {
        tracing::warn!(id = BOOTSTRAP_ELEMENT_ID, "bootstrap document not found");
        return Bootstrap::default();
    };
    match serde_json::from_str(&text) {
        Ok(bootstrap) => bootstrap,
        Err(err) => {
            tracing::warn!(error = %err, "malformed bootstrap document");
            Bootstrap::default()
        }
    }
}
