//! Session state shared by the shell, the frame and the role panels.

use leptos::prelude::*;

use crate::frontend::timers::DelayedTask;
use crate::models::{Role, ViewId};
use crate::session::{LOGIN_DELAY, Screen, Session};

#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
    login_timer: DelayedTask,
}

impl SessionContext {
    fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
            login_timer: DelayedTask::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.session.with(Session::screen)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(Session::role)
    }

    pub fn current_view(&self) -> ViewId {
        self.session.with(Session::current_view)
    }

    pub fn is_login_pending(&self) -> bool {
        self.session.with(Session::is_login_pending)
    }

    pub fn select_role(&self, role: Role) {
        self.login_timer.cancel();
        self.session.update(|s| s.select_role(role));
    }

    pub fn back_to_role_selection(&self) {
        self.login_timer.cancel();
        self.session.update(Session::back_to_role_selection);
    }

    /// Kicks off the simulated sign-in; the session flips to authenticated
    /// after [`LOGIN_DELAY`].
    pub fn submit_login(&self, email: &str, password: &str) {
        let Some(ticket) = self
            .session
            .try_update(|s| s.submit_login(email, password))
            .flatten()
        else {
            return;
        };

        let session = self.session;
        self.login_timer.schedule(LOGIN_DELAY, move || {
            session.try_update(|s| s.complete_login(ticket));
        });
    }

    pub fn logout(&self) {
        self.login_timer.cancel();
        self.session.update(Session::logout);
    }

    pub fn navigate(&self, view: ViewId) {
        self.session.update(|s| s.navigate(view));
    }
}

pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
