//! Client-side file export via a generated blob download.
//!
//! Used by the reports page to hand the in-memory CSV to the browser. No
//! format versioning or schema guarantees.

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, JsValue};

/// Offer `content` as a downloadable file named `filename`.
pub fn download_text(filename: &str, mime: &str, content: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };

        let parts = js_sys::Array::new();
        parts.push(&JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob =
            web_sys::Blob::new_with_str_sequence_and_options(&JsValue::from(parts), &options);
        let url = match blob.and_then(|b| web_sys::Url::create_object_url_with_blob(&b)) {
            Ok(url) => url,
            Err(e) => {
                log::error!("export blob creation failed: {e:?}");
                return;
            }
        };

        let anchor = document
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        if let Some(anchor) = anchor {
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
        let _ = web_sys::Url::revoke_object_url(&url);
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (filename, mime, content);
    }
}
