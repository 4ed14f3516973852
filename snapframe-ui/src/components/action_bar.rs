use leptos::*;

/// Download and share actions for the composited image.
///
/// Download is enabled once a photo is composited; share only appears when
/// the browser exposes the Web Share API and a shareable PNG is ready.
#[component]
pub fn ActionBar(
    download_enabled: Signal<bool>,
    share_visible: Signal<bool>,
    on_download: Callback<()>,
    on_share: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex gap-3 justify-center">
            <button
                class="px-4 py-2 rounded-lg bg-blue-600 text-white disabled:opacity-40 hover:bg-blue-500 transition-colors"
                disabled=move || !download_enabled.get()
                on:click=move |_| on_download.call(())
            >
                "Download image"
            </button>

            {move || share_visible.get().then(|| view! {
                <button
                    class="px-4 py-2 rounded-lg bg-green-600 text-white hover:bg-green-500 transition-colors"
                    on:click=move |_| on_share.call(())
                >
                    "Share"
                </button>
            })}
        </div>
    }
}
