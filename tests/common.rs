#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use educonnect::fixtures;
use educonnect::frontend::timers::{CancelTimer, Scheduler, TimerCallback};
use educonnect::models::*;
use educonnect::session::Session;

/// Runs the whole sign-in for `role` and returns the authenticated session.
pub fn authenticated_session(role: Role) -> Session {
    let mut session = Session::new();
    session.select_role(role);
    let ticket = session
        .submit_login("user@educonnect.com", "secret")
        .expect("login should be accepted");
    assert!(session.complete_login(ticket));
    session
}

pub fn pending_session(role: Role) -> (Session, educonnect::session::LoginTicket) {
    let mut session = Session::new();
    session.select_role(role);
    let ticket = session
        .submit_login("user@educonnect.com", "secret")
        .expect("login should be accepted");
    (session, ticket)
}

pub fn get_course(id: &str) -> Course {
    fixtures::find_course(id)
        .cloned()
        .unwrap_or_else(|| panic!("missing fixture course {id}"))
}

struct Timer {
    id: u64,
    due: Duration,
    callback: TimerCallback,
}

#[derive(Default)]
struct ClockState {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
}

/// Scheduler whose time only moves when a test calls `advance`.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Arc<Mutex<ClockState>>,
}

impl ManualClock {
    /// Moves time forward, firing due timers in order.
    pub fn advance(&self, by: Duration) {
        let target = self.state.lock().unwrap().now + by;
        loop {
            let next = {
                let mut state = self.state.lock().unwrap();
                let due = state
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let timer = state.timers.remove(i);
                        state.now = timer.due;
                        Some(timer.callback)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
    }

    pub fn pending(&self) -> usize {
        self.state.lock().unwrap().timers.len()
    }
}

impl Scheduler for ManualClock {
    fn set_timeout(&self, delay: Duration, callback: TimerCallback) -> Option<CancelTimer> {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id;
        state.next_id += 1;
        let due = state.now + delay;
        state.timers.push(Timer { id, due, callback });

        let shared = Arc::clone(&self.state);
        let cancel: CancelTimer = Box::new(move || {
            shared.lock().unwrap().timers.retain(|t| t.id != id);
        });
        Some(cancel)
    }
}
