//! Per-role panel renderers. Each one narrows the requested [`ViewId`] into
//! its own closed view enum and falls back to a "View not found" placeholder.

mod admin;
mod instructor;
mod student;

pub use admin::AdminViews;
pub use instructor::InstructorViews;
pub use student::StudentViews;

use leptos::prelude::*;

use crate::models::{Role, ViewId};

#[component]
pub fn RoleViews(role: Role, #[prop(into)] requested: Signal<ViewId>) -> impl IntoView {
    match role {
        Role::Student => view! { <StudentViews requested=requested/> }.into_any(),
        Role::Instructor => view! { <InstructorViews requested=requested/> }.into_any(),
        Role::Admin => view! { <AdminViews requested=requested/> }.into_any(),
    }
}
