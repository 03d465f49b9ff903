//! Fallbacks for unknown URLs and unknown panels

use leptos::prelude::*;

/// 404 page for paths the router does not know.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-6 bg-[#F5F5F7]">
            <div class="text-center">
                <h1 class="text-8xl md:text-9xl font-bold bg-gradient-to-r from-[#0071E3] to-[#5E5CE6] bg-clip-text text-transparent mb-4">
                    "404"
                </h1>
                <p class="text-2xl font-semibold text-[#1D1D1F] mb-2">"Page not found"</p>
                <p class="text-[#86868B] mb-8 max-w-md">
                    "The page you're looking for doesn't exist or has been moved."
                </p>
                <a
                    href="/"
                    class="inline-flex items-center justify-center px-5 py-2.5 rounded-xl bg-[#0071E3] text-white font-medium hover:bg-[#0077ED]"
                >
                    "Return Home"
                </a>
            </div>
        </div>
    }
}

/// Shown inside the portal when the current view has no panel for the role.
#[component]
pub fn ViewNotFound() -> impl IntoView {
    view! { <div class="p-8 text-center text-gray-500">"View not found"</div> }
}
