use leptos::prelude::*;

use crate::frontend::context::use_session;
use crate::frontend::layout::PortalFrame;
use crate::frontend::pages::{LoginPage, RoleSelectPage};
use crate::frontend::views::RoleViews;
use crate::session::Screen;

/// Picks one of the three screens from the session. Panel switches only
/// change the requested view, so the frame stays mounted while navigating.
#[component]
pub fn PortalPage() -> impl IntoView {
    let session = use_session();
    let screen = Memo::new(move |_| session.screen());
    let requested = Signal::derive(move || session.current_view());

    move || match screen.get() {
        Screen::RoleSelection => view! { <RoleSelectPage/> }.into_any(),
        Screen::Login(role) => view! { <LoginPage role=role/> }.into_any(),
        Screen::Portal(role) => view! {
            <PortalFrame role=role>
                <RoleViews role=role requested=requested/>
            </PortalFrame>
        }
        .into_any(),
    }
}
