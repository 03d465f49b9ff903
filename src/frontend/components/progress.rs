use leptos::prelude::*;

#[component]
pub fn ProgressBar(
    #[prop(into)] percent: Signal<u8>,
    #[prop(optional)] color: &'static str,
    #[prop(optional)] show_label: bool,
) -> impl IntoView {
    let color = if color.is_empty() { "bg-[#0071E3]" } else { color };
    let width = move || format!("width: {}%", percent.get().min(100));

    view! {
        <div>
            {show_label.then(|| view! {
                <div class="flex justify-between text-xs font-medium mb-1">
                    <span>"Progress"</span>
                    <span>{move || format!("{}%", percent.get())}</span>
                </div>
            })}
            <div class="h-2 bg-gray-100 rounded-full overflow-hidden">
                <div class=format!("h-full rounded-full transition-all duration-500 {color}") style=width></div>
            </div>
        </div>
    }
}
