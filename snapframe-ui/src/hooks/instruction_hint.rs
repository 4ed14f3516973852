// snapframe-ui/src/hooks/instruction_hint.rs
use leptos::*;

const HINT_HIDE_DELAY_MS: f64 = 5000.0;

/// Visibility state for the "drag to position, scroll or pinch to zoom"
/// hint shown after a photograph loads.
#[derive(Clone, Copy)]
pub struct InstructionHint {
    pub is_visible: ReadSignal<bool>,
    /// Show the hint now; it hides itself after the delay.
    pub show: Callback<()>,
}

/// Hook managing the instruction hint with autohide.
pub fn use_instruction_hint() -> InstructionHint {
    let (is_visible, set_is_visible) = create_signal(false);

    let timeout_fn = leptos_use::use_timeout_fn(
        move |_: ()| {
            set_is_visible.set(false);
        },
        HINT_HIDE_DELAY_MS,
    );

    let start = timeout_fn.start.clone();
    let stop = timeout_fn.stop.clone();
    let show = Callback::new(move |_: ()| {
        set_is_visible.set(true);
        // Restart the countdown if the hint is already up.
        (stop)();
        (start)(());
    });

    InstructionHint { is_visible, show }
}
