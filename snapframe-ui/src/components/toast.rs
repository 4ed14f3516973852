//! Toast notification component for transient feedback.

use leptos::*;

const TOAST_HIDE_DELAY_MS: u64 = 3000;

/// Toast notification that appears briefly then fades out. Used for
/// recoverable errors (decode failures, unavailable share) and short
/// status notes.
#[component]
pub fn Toast(
    /// Message to display (None = hidden)
    message: Signal<Option<String>>,
) -> impl IntoView {
    let (is_visible, set_is_visible) = create_signal(false);
    let (display_message, set_display_message) = create_signal(String::new());

    create_effect(move |_| {
        if let Some(msg) = message.get() {
            set_display_message.set(msg);
            set_is_visible.set(true);

            set_timeout(
                move || {
                    set_is_visible.set(false);
                },
                std::time::Duration::from_millis(TOAST_HIDE_DELAY_MS),
            );
        }
    });

    view! {
        <div
            class=move || format!(
                "fixed bottom-12 left-1/2 -translate-x-1/2 z-50 \
                 px-4 py-2 rounded-lg \
                 bg-black/80 text-white text-sm font-medium \
                 transition-opacity duration-300 \
                 pointer-events-none {}",
                if is_visible.get() { "opacity-100" } else { "opacity-0" }
            )
        >
            {move || display_message.get()}
        </div>
    }
}
