//! Simulated sign-in for the selected role

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::fixtures;
use crate::frontend::components::{Button, ButtonVariant, Card, EmailInput, PasswordInput};
use crate::frontend::context::use_session;
use crate::frontend::pages::role_select::role_tile;
use crate::models::{Icon, Role};

#[component]
pub fn LoginPage(role: Role) -> impl IntoView {
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let pending = Signal::derive(move || session.is_login_pending());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        session.submit_login(&email.get_untracked(), &password.get_untracked());
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-[#F5F5F7] p-4">
            <div class="absolute top-8 left-8">
                <Button
                    variant=ButtonVariant::Ghost
                    class="gap-2"
                    on:click=move |_| session.back_to_role_selection()
                >
                    <span>{Icon::ChevronLeft.glyph()}</span>
                    "Back to Role Selection"
                </Button>
            </div>

            <Card class="w-full max-w-md p-8">
                <div class="text-center mb-8">
                    <div class=format!(
                        "w-16 h-16 rounded-2xl flex items-center justify-center mx-auto mb-4 text-3xl {}",
                        role_tile(role)
                    )>
                        {fixtures::role_icon(role).glyph()}
                    </div>
                    <h2 class="text-2xl font-bold">{format!("{} Login", role.title())}</h2>
                    <p class="text-[#86868B] text-sm mt-1">"Please sign in to continue to your dashboard"</p>
                </div>

                <form class="space-y-4" on:submit=on_submit>
                    <EmailInput label="Email Address" value=email set_value=set_email/>
                    <PasswordInput label="Password" value=password set_value=set_password/>

                    <div class="flex justify-end">
                        <a href="#" class="text-sm text-[#0071E3] hover:underline font-medium">"Forgot Password?"</a>
                    </div>

                    <Button
                        button_type="submit"
                        class="w-full py-3"
                        loading=pending
                        loading_text="Signing In..."
                    >
                        "Sign In"
                    </Button>
                </form>

                <div class="mt-8 text-center">
                    <p class="text-xs text-[#86868B]">"For prototype demo, use any email and password."</p>
                </div>
            </Card>
        </div>
    }
}
