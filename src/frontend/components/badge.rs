use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum BadgeColor {
    #[default]
    Blue,
    Green,
    Yellow,
    Red,
    Gray,
}

impl BadgeColor {
    fn classes(&self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-100 text-blue-700",
            Self::Green => "bg-green-100 text-green-700",
            Self::Yellow => "bg-yellow-100 text-yellow-700",
            Self::Red => "bg-red-100 text-red-700",
            Self::Gray => "bg-gray-100 text-gray-600",
        }
    }
}

#[component]
pub fn Badge(children: Children, #[prop(optional)] color: BadgeColor) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-semibold {}",
            color.classes()
        )>
            {children()}
        </span>
    }
}
