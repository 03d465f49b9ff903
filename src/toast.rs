use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

static NEXT_TOAST: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct ToastTicket(u64);

/// Transient banner in the bottom-right corner. Each `show` returns a ticket;
/// only the dismissal carrying the latest ticket hides the toast, so an older
/// timer firing late cannot cut a newer message short.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    message: String,
    current: Option<ToastTicket>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn show(&mut self, message: impl Into<String>) -> ToastTicket {
        let ticket = ToastTicket(NEXT_TOAST.fetch_add(1, Ordering::Relaxed));
        self.message = message.into();
        self.current = Some(ticket);
        ticket
    }

    /// Hides the toast if `ticket` is the one currently shown.
    pub fn dismiss(&mut self, ticket: ToastTicket) -> bool {
        if self.current != Some(ticket) {
            return false;
        }
        self.current = None;
        true
    }
}
