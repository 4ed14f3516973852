use leptos::*;

use crate::config::TEMPLATES;

/// Thumbnail grid for choosing the active template.
///
/// Selection is disabled while a template load is in flight; the active
/// entry is highlighted. Re-selecting the active template is a no-op in
/// the app handler.
#[component]
pub fn TemplatePicker<F>(
    selected_id: Signal<String>,
    is_loading: Signal<bool>,
    on_select: F,
) -> impl IntoView
where
    F: Fn(String) + Copy + 'static,
{
    view! {
        <div class="flex gap-2 flex-wrap justify-center">
            {TEMPLATES
                .iter()
                .map(|template| {
                    let id = template.id;
                    let is_selected = move || selected_id.get() == id;
                    view! {
                        <button
                            class=move || format!(
                                "rounded-lg border-2 p-1 transition-colors {}",
                                if is_selected() {
                                    "border-blue-500"
                                } else {
                                    "border-transparent hover:border-gray-400"
                                }
                            )
                            disabled=move || is_loading.get()
                            title=template.display_name
                            on:click=move |_| on_select(id.to_string())
                        >
                            <img
                                src=template.thumb_path
                                alt=template.display_name
                                class="w-16 h-16 object-cover rounded"
                            />
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
