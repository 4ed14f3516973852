//! Async image decode helpers.
//!
//! The browser's `HtmlImageElement` decode is callback-based; these helpers
//! bridge it into futures via a oneshot channel so callers can `.await` a
//! decoded image or a decode error. A failed decode never touches
//! previously loaded images.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, HtmlImageElement, Url};

/// Load and decode an image from a URL (template path or object URL).
///
/// Resolves once the image is fully decodable; rejects if the resource is
/// missing or not a decodable image.
pub async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let img = HtmlImageElement::new()?;
    let (sender, receiver) = futures::channel::oneshot::channel::<Result<(), ()>>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let onload = {
        let sender = Rc::clone(&sender);
        Closure::once(move || {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        })
    };
    let onerror = {
        let sender = Rc::clone(&sender);
        Closure::once(move |_event: JsValue| {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(Err(()));
            }
        })
    };

    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    img.set_src(src);
    onload.forget();
    onerror.forget();

    match receiver.await {
        Ok(Ok(())) => Ok(img),
        _ => Err(JsValue::from_str(&format!("failed to decode image: {src}"))),
    }
}

/// Decode a user-selected file through a temporary object URL.
///
/// The URL is revoked as soon as the decode settles, success or not.
pub async fn decode_photo_file(file: &File) -> Result<HtmlImageElement, JsValue> {
    let url = Url::create_object_url_with_blob(file)?;
    let result = load_image(&url).await;
    let _ = Url::revoke_object_url(&url);
    result
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    // Smallest valid PNG: 1x1 transparent pixel.
    const ONE_PIXEL_PNG: &str = "data:image/png;base64,\
        iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkY\
        PhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

    #[wasm_bindgen_test]
    async fn decodes_a_valid_png() {
        let img = load_image(ONE_PIXEL_PNG).await.expect("should decode");
        assert_eq!(img.natural_width(), 1);
        assert_eq!(img.natural_height(), 1);
    }

    #[wasm_bindgen_test]
    async fn rejects_undecodable_data() {
        let result = load_image("data:image/png;base64,bm90LWEtcG5n").await;
        assert!(result.is_err());
    }
}
