use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div
                    class="absolute inset-0 bg-black/30 backdrop-blur-sm transition-opacity"
                    on:click=move |_| on_close.run(())
                ></div>
                <div class="relative bg-white rounded-3xl shadow-2xl w-full max-w-lg overflow-hidden">
                    <div class="px-6 py-4 border-b border-[#E5E5EA] flex justify-between items-center bg-[#F5F5F7]/50">
                        <h3 class="text-lg font-semibold text-[#1D1D1F]">{title.clone()}</h3>
                        <button
                            type="button"
                            class="p-1 rounded-full hover:bg-gray-200 text-gray-500 transition-colors"
                            on:click=move |_| on_close.run(())
                        >
                            "✕"
                        </button>
                    </div>
                    <div class="p-6">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
