use leptos::*;
use snapframe_core::{CanvasFrame, PhotoSize, TransformController};
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlCanvasElement, HtmlImageElement, HtmlInputElement};

use crate::components::{ActionBar, EditorCanvas, TemplatePicker, Toast};
use crate::config::{self, TEMPLATES};
use crate::hooks::use_instruction_hint;
use crate::loader;
use crate::rendering::{self, export};

#[component]
pub fn App() -> impl IntoView {
    // ========== Reactive UI state ==========
    let (has_photo, set_has_photo) = create_signal(false);
    let (photo_loading, set_photo_loading) = create_signal(false);
    let (template_loading, set_template_loading) = create_signal(false);
    let (selected_template_id, set_selected_template_id) =
        create_signal(TEMPLATES[0].id.to_string());
    let (toast_message, set_toast) = create_signal(None::<String>);
    let (share_visible, set_share_visible) = create_signal(false);

    // ========== Non-reactive state ==========
    // The controller and the decoded images are only read inside explicit
    // repaint/export calls, never tracked by the reactive graph.
    let canvas_ref = create_node_ref::<leptos::html::Canvas>();
    let controller = store_value(None::<TransformController>);
    let template_image = store_value(None::<HtmlImageElement>);
    let photo_image = store_value(None::<HtmlImageElement>);
    let share_blob = store_value(None::<Blob>);

    let hint = use_instruction_hint();

    // ========== Share preparation ==========
    // Regenerates the exportable PNG after every repaint with a photo
    // present; the share button only shows once a blob is ready.
    let prepare_share = move || {
        let photo_present =
            controller.with_value(|c| c.as_ref().map(|c| c.has_photo()).unwrap_or(false));
        if !photo_present || !export::share_supported() {
            share_blob.set_value(None);
            set_share_visible.set(false);
            return;
        }
        let Some(canvas_el) = canvas_ref.get_untracked() else {
            return;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>().clone();
        spawn_local(async move {
            match export::canvas_to_png_blob(&canvas).await {
                Ok(blob) => {
                    share_blob.set_value(Some(blob));
                    set_share_visible.set(true);
                }
                Err(err) => {
                    log::warn!("failed to prepare share blob: {err:?}");
                    share_blob.set_value(None);
                    set_share_visible.set(false);
                }
            }
        });
    };

    // ========== Repaint ==========
    // Synchronous recomposition; called after every committed transform
    // change, photo load, and template swap.
    let repaint = move || {
        let Some(canvas_el) = canvas_ref.get_untracked() else {
            return;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>().clone();

        template_image.with_value(|template| {
            let Some(template) = template.as_ref() else {
                return;
            };
            let view = controller.with_value(|c| c.as_ref().and_then(|c| c.view()));
            photo_image.with_value(|photo| {
                if let Err(err) = rendering::repaint(&canvas, photo.as_ref().zip(view), template) {
                    log::warn!("repaint failed: {err:?}");
                }
            });
        });

        prepare_share();
    };

    // ========== Startup: first template defines the canvas frame ==========
    let initialized = store_value(false);
    create_effect(move |_| {
        let Some(_canvas) = canvas_ref.get() else {
            return;
        };
        if initialized.get_value() {
            return;
        }
        initialized.set_value(true);

        set_template_loading.set(true);
        spawn_local(async move {
            let first = &TEMPLATES[0];
            match loader::load_image(first.path).await {
                Ok(image) => {
                    let width = image.natural_width();
                    let height = image.natural_height();
                    if let Some(canvas_el) = canvas_ref.get_untracked() {
                        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>();
                        canvas.set_width(width);
                        canvas.set_height(height);
                    }
                    controller.set_value(Some(TransformController::new(CanvasFrame::new(
                        width, height,
                    ))));
                    template_image.set_value(Some(image));
                    log::info!("canvas frame initialized at {width}x{height}");
                    repaint();
                }
                Err(err) => {
                    log::warn!("initial template load failed: {err:?}");
                    set_toast.set(Some(format!(
                        "Could not load the initial template ({}). Reload the page to try again.",
                        first.path
                    )));
                }
            }
            set_template_loading.set(false);
        });
    });

    // ========== Photo selection ==========
    let hint_show = hint.show;
    let on_photo_selected = move |ev: web_sys::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        if !file.type_().starts_with("image/") {
            set_toast.set(Some("Please choose a valid image file.".to_string()));
            input.set_value("");
            return;
        }
        if controller.with_value(|c| c.is_none()) {
            set_toast.set(Some(
                "Templates are still loading; try again in a moment.".to_string(),
            ));
            return;
        }

        set_photo_loading.set(true);
        spawn_local(async move {
            match loader::decode_photo_file(&file).await {
                Ok(image) => {
                    let size = PhotoSize::new(image.natural_width(), image.natural_height());
                    photo_image.set_value(Some(image));
                    controller.update_value(|c| {
                        if let Some(c) = c {
                            c.set_photo(size);
                        }
                    });
                    set_has_photo.set(true);
                    hint_show.call(());
                    repaint();
                }
                Err(err) => {
                    // The previous photo and its transform stay untouched.
                    log::warn!("photo decode failed: {err:?}");
                    set_toast.set(Some("Could not load that image. Try another file.".to_string()));
                    input.set_value("");
                }
            }
            set_photo_loading.set(false);
        });
    };

    // ========== Template swap ==========
    let on_template_select = move |id: String| {
        if template_loading.get_untracked() || id == selected_template_id.get_untracked() {
            return;
        }
        let Some(template) = config::get_template(&id) else {
            return;
        };

        set_template_loading.set(true);
        spawn_local(async move {
            match loader::load_image(template.path).await {
                Ok(image) => {
                    let width = image.natural_width();
                    let height = image.natural_height();
                    let frame_mismatch = controller.with_value(|c| {
                        c.as_ref()
                            .map(|c| !c.frame().matches(width, height))
                            .unwrap_or(false)
                    });
                    if frame_mismatch {
                        log::warn!(
                            "template '{}' is {width}x{height}, which differs from the canvas frame; compositing anyway",
                            template.id
                        );
                    }
                    template_image.set_value(Some(image));
                    set_selected_template_id.set(id);
                    repaint();
                }
                Err(err) => {
                    // The previously active template stays in effect; the
                    // picker never switched because selection is only
                    // committed on success.
                    log::warn!("template swap to '{}' failed: {err:?}", template.id);
                    set_toast.set(Some(
                        "Could not load that template; keeping the current one.".to_string(),
                    ));
                }
            }
            set_template_loading.set(false);
        });
    };

    // ========== Export actions ==========
    let on_download = Callback::new(move |_: ()| {
        if !has_photo.get_untracked() {
            return;
        }
        let Some(canvas_el) = canvas_ref.get_untracked() else {
            return;
        };
        let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>().clone();
        if let Err(err) = export::download_png(&canvas, config::OUTPUT_FILENAME) {
            log::warn!("download failed: {err:?}");
            set_toast.set(Some("Could not prepare the download.".to_string()));
        }
    });

    let on_share = Callback::new(move |_: ()| {
        let Some(blob) = share_blob.with_value(|b| b.clone()) else {
            set_toast.set(Some("The image is not ready to share yet.".to_string()));
            return;
        };
        spawn_local(async move {
            if let Err(err) = export::share_png(&blob, config::OUTPUT_FILENAME).await {
                log::warn!("share failed: {err:?}");
                set_toast.set(Some("Sharing failed.".to_string()));
            }
        });
    });

    let on_repaint = Callback::new(move |_: ()| repaint());
    let download_enabled = Signal::derive(move || has_photo.get() && !photo_loading.get());

    view! {
        <div class="min-h-screen flex flex-col items-center gap-4 p-4 bg-gray-100">
            <h1 class="text-2xl font-semibold">"Frame your photo"</h1>

            <label class="text-sm text-gray-700">
                "Choose a photo"
                <input
                    type="file"
                    accept="image/*"
                    class="block mt-1"
                    on:change=on_photo_selected
                />
            </label>

            {move || photo_loading.get().then(|| view! {
                <p class="text-sm text-gray-600">"Loading your photo…"</p>
            })}
            {move || template_loading.get().then(|| view! {
                <p class="text-sm text-gray-600">"Loading template…"</p>
            })}
            {move || hint.is_visible.get().then(|| view! {
                <p class="text-sm text-gray-600">
                    "Drag to position your photo. Scroll or pinch to zoom."
                </p>
            })}

            <div class="bg-white rounded-xl shadow p-2">
                <EditorCanvas
                    canvas_ref=canvas_ref
                    controller=controller
                    has_photo=has_photo.into()
                    is_busy=template_loading.into()
                    on_repaint=on_repaint
                />
            </div>

            <TemplatePicker
                selected_id=selected_template_id.into()
                is_loading=template_loading.into()
                on_select=on_template_select
            />

            <ActionBar
                download_enabled=download_enabled
                share_visible=share_visible.into()
                on_download=on_download
                on_share=on_share
            />

            <Toast message=toast_message.into() />
        </div>
    }
}
