//! PNG export: download link synthesis and Web Share hand-off.
//!
//! Both paths read the already-composited canvas; neither re-renders.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, File, FilePropertyBag, HtmlAnchorElement, HtmlCanvasElement, ShareData};

const PNG_MIME: &str = "image/png";

/// Trigger a browser download of the canvas contents as a PNG.
pub fn download_png(canvas: &HtmlCanvasElement, filename: &str) -> Result<(), JsValue> {
    let url = canvas.to_data_url_with_type(PNG_MIME)?;

    let document = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;

    Ok(())
}

/// Encode the canvas contents to a PNG blob.
///
/// `toBlob` is callback-based; the callback is bridged through a oneshot
/// channel. Rejects if the browser hands back no blob.
pub async fn canvas_to_png_blob(canvas: &HtmlCanvasElement) -> Result<Blob, JsValue> {
    let (sender, receiver) = futures::channel::oneshot::channel::<Option<Blob>>();

    let callback = Closure::once(move |blob: Option<Blob>| {
        let _ = sender.send(blob);
    });
    canvas.to_blob_with_type(callback.as_ref().unchecked_ref(), PNG_MIME)?;
    callback.forget();

    match receiver.await {
        Ok(Some(blob)) => Ok(blob),
        _ => Err(JsValue::from_str("canvas produced no PNG blob")),
    }
}

/// Whether the Web Share API is available in this browser.
pub fn share_supported() -> bool {
    web_sys::window()
        .map(|window| {
            js_sys::Reflect::has(window.navigator().as_ref(), &JsValue::from_str("share"))
                .unwrap_or(false)
        })
        .unwrap_or(false)
}

/// Hand the composited PNG to the native share sheet.
///
/// A share the user cancelled resolves to `Ok`; only real failures come
/// back as `Err`.
pub async fn share_png(blob: &Blob, filename: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let options = FilePropertyBag::new();
    options.set_type(PNG_MIME);
    let parts = js_sys::Array::of1(blob);
    let file = File::new_with_blob_sequence_and_options(parts.as_ref(), filename, &options)?;

    let files = js_sys::Array::of1(&file);
    let data = ShareData::new();
    data.set_files(&files);
    data.set_title("My framed photo");
    data.set_text("Look at the image I made!");

    match JsFuture::from(window.navigator().share_with_data(&data)).await {
        Ok(_) => Ok(()),
        Err(err) if is_abort(&err) => Ok(()),
        Err(err) => Err(err),
    }
}

fn is_abort(err: &JsValue) -> bool {
    err.dyn_ref::<web_sys::DomException>()
        .map(|e| e.name() == "AbortError")
        .unwrap_or(false)
}
