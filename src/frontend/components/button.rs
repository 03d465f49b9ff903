use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonVariant {
    fn classes(&self) -> &'static str {
        match self {
            Self::Primary => "bg-[#0071E3] text-white hover:bg-[#0077ED] shadow-sm hover:shadow",
            Self::Secondary => "bg-[#F5F5F7] text-[#1D1D1F] hover:bg-[#E5E5EA]",
            Self::Outline => "border border-[#E5E5EA] text-[#1D1D1F] hover:bg-[#F5F5F7] bg-white",
            Self::Ghost => "text-[#0071E3] hover:bg-[#0071E3]/10 bg-transparent",
        }
    }
}

impl ButtonSize {
    fn classes(&self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 text-sm",
            Self::Md => "px-5 py-2.5 text-base",
            Self::Lg => "px-8 py-3.5 text-lg",
        }
    }
}

/// Event listeners go on the component itself (`<Button on:click=...>`); they
/// land on the inner `<button>`.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center gap-2 font-medium transition-all duration-200 focus:outline-none rounded-xl active:scale-95 disabled:opacity-50 disabled:pointer-events-none";

    let classes = format!(
        "{} {} {} {}",
        base_classes,
        variant.classes(),
        size.classes(),
        class
    );

    let loading_text_display = if loading_text.is_empty() {
        "Loading...".to_string()
    } else {
        loading_text
    };

    let button_type_val = if button_type.is_empty() {
        "button".to_string()
    } else {
        button_type
    };

    // Children render once; the loading label is layered over them.
    let content = children();

    view! {
        <button
            type=button_type_val
            class=classes
            disabled=move || disabled.get() || loading.get()
        >
            <span class="contents" class:hidden=move || loading.get()>{content}</span>
            <Show when=move || loading.get()>
                <span class="flex items-center justify-center gap-2">
                    <span class="w-4 h-4 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                    {loading_text_display.clone()}
                </span>
            </Show>
        </button>
    }
}
