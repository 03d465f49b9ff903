use leptos::prelude::*;

use crate::fixtures::{self, APP_NAME};
use crate::frontend::components::Card;
use crate::frontend::context::use_session;
use crate::models::Role;

/// Icon tile colours per role, shared with the login card.
pub(crate) fn role_tile(role: Role) -> &'static str {
    match role {
        Role::Student => "bg-blue-50 text-[#0071E3]",
        Role::Instructor => "bg-indigo-50 text-[#5E5CE6]",
        Role::Admin => "bg-green-50 text-[#34C759]",
    }
}

fn role_ring(role: Role) -> &'static str {
    match role {
        Role::Student => "hover:ring-[#0071E3]",
        Role::Instructor => "hover:ring-[#5E5CE6]",
        Role::Admin => "hover:ring-[#34C759]",
    }
}

#[component]
pub fn RoleSelectPage() -> impl IntoView {
    let session = use_session();

    let cards = Role::ALL
        .into_iter()
        .map(|role| {
            view! {
                <Card
                    interactive=true
                    class=format!("p-8 hover:ring-2 {} transition-all group", role_ring(role))
                    on:click=move |_| session.select_role(role)
                >
                    <div class=format!(
                        "w-16 h-16 rounded-2xl {} flex items-center justify-center mx-auto mb-6 text-3xl group-hover:scale-110 transition-transform duration-300",
                        role_tile(role)
                    )>
                        {fixtures::role_icon(role).glyph()}
                    </div>
                    <h3 class="text-xl font-bold mb-2">{role.title()}</h3>
                    <p class="text-sm text-[#86868B]">{role.tagline()}</p>
                </Card>
            }
        })
        .collect_view();

    view! {
        <div class="min-h-screen flex items-center justify-center bg-[#F5F5F7] p-4 relative overflow-hidden">
            <div class="absolute top-[-10%] left-[-10%] w-[40%] h-[40%] bg-blue-200/50 rounded-full blur-[100px]"></div>
            <div class="absolute bottom-[-10%] right-[-10%] w-[40%] h-[40%] bg-purple-200/50 rounded-full blur-[100px]"></div>

            <div class="max-w-4xl w-full z-10 text-center space-y-12">
                <div class="space-y-4">
                    <h1 class="text-5xl md:text-6xl font-bold tracking-tight bg-clip-text text-transparent bg-gradient-to-r from-[#0071E3] to-[#5E5CE6] pb-2">
                        {APP_NAME}
                    </h1>
                    <p class="text-xl text-[#86868B] max-w-2xl mx-auto">
                        "Experience the future of education management. Select your portal to begin."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">{cards}</div>
            </div>
        </div>
    }
}
