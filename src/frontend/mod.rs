pub mod components;
pub mod context;
pub mod layout;
pub mod pages;
pub mod timers;
pub mod views;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::fixtures::APP_NAME;
use context::provide_session_context;
use pages::{NotFound, PortalPage};

/// HTML shell for SSR - provides the full document structure
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-[#F5F5F7] text-[#1D1D1F] antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/educonnect.css"/>
        <Title text=format!("{APP_NAME} - Learning Portal")/>
        <Meta name="description" content="Role-based dashboards for students, instructors and administrators"/>

        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=PortalPage/>
            </Routes>
        </Router>
    }
}
