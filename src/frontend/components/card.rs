use leptos::prelude::*;

/// White rounded panel. `interactive` adds the hover lift used by clickable
/// cards; attach the handler with `on:click` on the component.
#[component]
pub fn Card(
    children: Children,
    #[prop(optional, into)] class: String,
    #[prop(optional)] interactive: bool,
) -> impl IntoView {
    let hover = if interactive {
        "cursor-pointer hover:shadow-md hover:scale-[1.01] transition-all duration-300"
    } else {
        ""
    };

    view! {
        <div class=format!(
            "bg-white rounded-2xl border border-[#E5E5EA] shadow-sm overflow-hidden {} {}",
            hover, class
        )>
            {children()}
        </div>
    }
}
