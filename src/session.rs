//! Portal session: which role is in use, whether the fake login went through,
//! and which panel is showing.
//!
//! The login delay is modelled with tickets. `submit_login` hands out a ticket
//! and the caller schedules `complete_login(ticket)` after [`LOGIN_DELAY`].
//! Anything that abandons the attempt (logout, going back to role selection,
//! picking another role) drops the pending ticket, so a late completion is a
//! no-op even if its timer was not cancelled.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{Role, ViewId};

pub const LOGIN_DELAY: Duration = Duration::from_millis(1000);

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct LoginTicket(u64);

/// What the shell renders. The active view is not part of it;
/// switching panels keeps the authenticated frame mounted.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    RoleSelection,
    Login(Role),
    Portal(Role),
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    role: Option<Role>,
    authenticated: bool,
    current_view: ViewId,
    pending_login: Option<LoginTicket>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn current_view(&self) -> ViewId {
        self.current_view
    }

    pub fn is_login_pending(&self) -> bool {
        self.pending_login.is_some()
    }

    pub fn screen(&self) -> Screen {
        match (self.role, self.authenticated) {
            (None, _) => Screen::RoleSelection,
            (Some(role), false) => Screen::Login(role),
            (Some(role), true) => Screen::Portal(role),
        }
    }

    /// Whether the current view has an entry in the role's sidebar.
    pub fn is_view_in_nav(&self) -> bool {
        self.role
            .is_some_and(|role| crate::fixtures::is_nav_member(role, self.current_view))
    }

    pub fn select_role(&mut self, role: Role) {
        log::debug!("role selected: {role}");
        self.role = Some(role);
        self.authenticated = false;
        self.pending_login = None;
    }

    pub fn back_to_role_selection(&mut self) {
        log::debug!("back to role selection");
        self.role = None;
        self.authenticated = false;
        self.pending_login = None;
    }

    /// Starts the simulated sign-in. Any non-empty pair of credentials is
    /// accepted; empty fields are ignored the way a `required` input is.
    pub fn submit_login(&mut self, email: &str, password: &str) -> Option<LoginTicket> {
        let role = self.role?;
        if self.authenticated || self.pending_login.is_some() {
            log::trace!("login already in progress or done; ignoring submit");
            return None;
        }
        if email.is_empty() || password.is_empty() {
            log::trace!("empty credentials; ignoring submit");
            return None;
        }

        let ticket = LoginTicket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed));
        self.pending_login = Some(ticket);
        log::debug!("{role} login pending ({ticket:?})");
        Some(ticket)
    }

    /// Finishes a pending sign-in. Returns `false` when the ticket is stale.
    pub fn complete_login(&mut self, ticket: LoginTicket) -> bool {
        if self.pending_login != Some(ticket) {
            log::debug!("stale login completion ({ticket:?}) ignored");
            return false;
        }
        let Some(role) = self.role else {
            self.pending_login = None;
            return false;
        };

        self.pending_login = None;
        self.authenticated = true;
        self.current_view = role.default_view();
        log::debug!("{role} authenticated, landing on {}", self.current_view);
        true
    }

    /// Resets to the initial empty session, whatever the prior state.
    pub fn logout(&mut self) {
        log::debug!("logout");
        *self = Self::default();
    }

    /// Switches panels. Ids outside the role's sidebar are accepted; the role
    /// renderer shows its "not found" placeholder for them.
    pub fn navigate(&mut self, view: ViewId) {
        log::debug!("navigate: {} -> {view}", self.current_view);
        self.current_view = view;
    }
}
