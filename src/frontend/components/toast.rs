use leptos::prelude::*;

use crate::toast::ToastState;

/// Floating notice in the bottom-right corner. Hidden while the state has no
/// live ticket.
#[component]
pub fn Toast(#[prop(into)] state: Signal<ToastState>) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| s.is_visible())>
            <div
                role="status"
                class="fixed bottom-6 right-6 z-50 px-6 py-3 rounded-2xl shadow-lg flex items-center gap-3 bg-[#34C759] text-white"
            >
                <span class="font-medium">{move || state.with(|s| s.message().to_string())}</span>
            </div>
        </Show>
    }
}
