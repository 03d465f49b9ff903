//! Authenticated frame: collapsible sidebar, header, and the panel area.

use leptos::prelude::*;

use crate::fixtures::{self, APP_NAME, NOTIFICATIONS};
use crate::frontend::context::use_session;
use crate::models::{Icon, NavItem, Role, has_unread};

#[component]
pub fn PortalFrame(role: Role, children: Children) -> impl IntoView {
    let (sidebar_open, set_sidebar_open) = signal(true);

    let main_offset = move || {
        if sidebar_open.get() { "md:ml-64" } else { "md:ml-20" }
    };

    view! {
        <div class="min-h-screen flex bg-[#F5F5F7]">
            <Sidebar role=role open=sidebar_open set_open=set_sidebar_open/>
            <main class=move || format!(
                "flex-1 flex flex-col min-h-screen transition-all duration-300 {}",
                main_offset()
            )>
                <Header role=role/>
                <div class="p-6 md:p-8 flex-1 overflow-x-hidden">{children()}</div>
            </main>
        </div>
    }
}

fn label_classes(open: bool) -> &'static str {
    if open {
        "font-medium whitespace-nowrap overflow-hidden transition-all duration-300 opacity-100 w-auto"
    } else {
        "font-medium whitespace-nowrap overflow-hidden transition-all duration-300 opacity-0 w-0"
    }
}

#[component]
fn Sidebar(role: Role, open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let session = use_session();

    let nav = fixtures::nav_items(role)
        .iter()
        .map(|item| view! { <SidebarLink item=*item open=open/> })
        .collect_view();

    view! {
        <aside class=move || format!(
            "{} bg-white border-r border-[#E5E5EA] transition-all duration-300 ease-in-out flex-col fixed h-full z-20 hidden md:flex",
            if open.get() { "w-64" } else { "w-20" }
        )>
            <div class="h-16 flex items-center justify-between px-6 border-b border-[#E5E5EA]">
                <Show
                    when=move || open.get()
                    fallback=|| view! { <span class="text-xl font-bold text-[#0071E3]">"E"</span> }
                >
                    <span class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-[#0071E3] to-[#5E5CE6]">
                        {APP_NAME}
                    </span>
                </Show>
                <button
                    type="button"
                    aria-label="Toggle sidebar"
                    class="p-1 rounded-lg hover:bg-gray-100 text-gray-500"
                    on:click=move |_| set_open.update(|o| *o = !*o)
                >
                    <span
                        class="inline-block w-5 h-5 transition-transform duration-300"
                        class:rotate-180=move || !open.get()
                    >
                        {Icon::ChevronLeft.glyph()}
                    </span>
                </button>
            </div>

            <nav class="flex-1 py-6 px-3 space-y-1">{nav}</nav>

            <div class="p-4 border-t border-[#E5E5EA]">
                <button
                    type="button"
                    class="w-full flex items-center gap-3 px-3 py-3 rounded-xl text-[#FF3B30] hover:bg-[#FF3B30]/10 transition-colors"
                    on:click=move |_| session.logout()
                >
                    <span>{Icon::LogOut.glyph()}</span>
                    <span class=move || label_classes(open.get())>"Log Out"</span>
                </button>
            </div>
        </aside>
    }
}

#[component]
fn SidebarLink(item: NavItem, open: ReadSignal<bool>) -> impl IntoView {
    let session = use_session();
    let is_active = move || session.current_view() == item.id;

    view! {
        <button
            type="button"
            class=move || {
                if is_active() {
                    "w-full flex items-center gap-3 px-3 py-3 rounded-xl transition-all duration-200 bg-[#0071E3] text-white shadow-md"
                } else {
                    "w-full flex items-center gap-3 px-3 py-3 rounded-xl transition-all duration-200 text-[#86868B] hover:bg-[#F5F5F7] hover:text-[#1D1D1F]"
                }
            }
            on:click=move |_| session.navigate(item.id)
        >
            <span class="text-lg">{item.icon.glyph()}</span>
            <span class=move || label_classes(open.get())>{item.label}</span>
        </button>
    }
}

#[component]
fn Header(role: Role) -> impl IntoView {
    let session = use_session();
    let (show_notifications, set_show_notifications) = signal(false);
    let unread = has_unread(&NOTIFICATIONS);

    let notifications = NOTIFICATIONS
        .iter()
        .map(|n| {
            view! {
                <div class=format!(
                    "p-4 border-b border-[#E5E5EA] last:border-0 hover:bg-gray-50 {}",
                    if n.read { "" } else { "bg-blue-50/50" }
                )>
                    <p class="text-sm text-[#1D1D1F] mb-1">{n.text.clone()}</p>
                    <p class="text-xs text-[#86868B]">{n.time.clone()}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <header class="h-16 bg-white/80 backdrop-blur-md border-b border-[#E5E5EA] sticky top-0 z-10 px-6 flex items-center justify-between">
            <div class="flex items-center gap-4">
                <button type="button" class="md:hidden p-2 text-gray-500">{Icon::Menu.glyph()}</button>
                <div class="hidden sm:flex items-center text-sm text-[#86868B] gap-2">
                    <span class="font-medium text-[#1D1D1F] capitalize">{role.as_str()}</span>
                    <span class="text-[#E5E5EA]">"/"</span>
                    <span class="capitalize">{move || session.current_view().breadcrumb()}</span>
                </div>
            </div>

            <div class="flex items-center gap-6">
                <div class="relative hidden md:block">
                    <span class="absolute left-3 top-1/2 -translate-y-1/2 text-gray-400 text-xs">
                        {Icon::Search.glyph()}
                    </span>
                    <input
                        type="text"
                        placeholder="Search..."
                        class="pl-9 pr-4 py-2 bg-[#F5F5F7] rounded-full text-sm focus:outline-none focus:ring-2 focus:ring-[#0071E3]/20 w-64 transition-all"
                    />
                </div>

                <div class="relative">
                    <button
                        type="button"
                        aria-label="Notifications"
                        class="relative p-2 rounded-full hover:bg-gray-100 transition-colors text-gray-600"
                        on:click=move |_| set_show_notifications.update(|s| *s = !*s)
                    >
                        {Icon::Bell.glyph()}
                        {unread.then(|| view! {
                            <span class="absolute top-2 right-2 w-2 h-2 bg-[#FF3B30] rounded-full border border-white"></span>
                        })}
                    </button>
                    <div
                        class="absolute right-0 mt-2 w-80 bg-white rounded-2xl shadow-xl border border-[#E5E5EA] overflow-hidden"
                        class:hidden=move || !show_notifications.get()
                    >
                        <div class="px-4 py-3 border-b border-[#E5E5EA]">
                            <h4 class="font-semibold text-sm">"Notifications"</h4>
                        </div>
                        <div class="max-h-64 overflow-y-auto">{notifications}</div>
                    </div>
                </div>

                <div class="w-9 h-9 rounded-full bg-gradient-to-tr from-[#0071E3] to-[#5E5CE6] flex items-center justify-center text-white text-sm font-bold shadow-md cursor-pointer">
                    {role.initial().to_string()}
                </div>
            </div>
        </header>
    }
}
