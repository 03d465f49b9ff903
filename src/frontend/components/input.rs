use leptos::prelude::*;

use crate::models::Icon;

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional)] icon: Option<Icon>,
    #[prop(optional, into)] hint: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    let has_hint = !hint.is_empty();
    let padding = if icon.is_some() { "pl-10 pr-4" } else { "px-4" };

    view! {
        <div class="space-y-1.5">
            <label for=name.clone() class="text-sm font-medium text-gray-700 ml-1">
                {label}
            </label>
            <div class="relative">
                {icon.map(|icon| view! {
                    <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400 text-sm">
                        {icon.glyph()}
                    </span>
                })}
                <input
                    type=input_type
                    id=name.clone()
                    name=name
                    placeholder=placeholder
                    required=required
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                    class=format!(
                        "w-full {padding} py-2.5 bg-[#F5F5F7] border-transparent rounded-xl \
                         focus:bg-white focus:ring-2 focus:ring-[#0071E3]/20 focus:border-[#0071E3] \
                         transition-all outline-none text-[#1D1D1F] placeholder-gray-400"
                    )
                />
            </div>
            {has_hint.then(|| view! { <p class="mt-1 text-xs text-gray-500">{hint.clone()}</p> })}
        </div>
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] label: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="name@educonnect.com"
            input_type="email"
            required=true
            icon=Icon::Mail
            value=value
            set_value=set_value
        />
    }
}

#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] hint: String,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="password"
            placeholder="••••••••"
            input_type="password"
            required=true
            icon=Icon::Lock
            hint=hint
            value=value
            set_value=set_value
        />
    }
}
