use leptos::prelude::*;

use crate::models::Icon;

/// Dashboard headline figure with a coloured icon tile.
#[component]
pub fn StatCard(
    icon: Icon,
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional)] tint: &'static str,
) -> impl IntoView {
    let tint = if tint.is_empty() {
        "bg-blue-50 text-[#0071E3]"
    } else {
        tint
    };

    view! {
        <div class="bg-white rounded-2xl border border-[#E5E5EA] shadow-sm p-6 flex items-center gap-4">
            <div class=format!("w-12 h-12 rounded-xl flex items-center justify-center text-2xl {tint}")>
                {icon.glyph()}
            </div>
            <div>
                <p class="text-sm text-gray-500 font-medium">{label}</p>
                <h3 class="text-2xl font-bold text-[#1D1D1F]">{value}</h3>
            </div>
        </div>
    }
}
