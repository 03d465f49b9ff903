mod common;

#[cfg(test)]
pub mod timer_tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use leptos::prelude::*;

    use super::common::ManualClock;

    use educonnect::frontend::context::provide_session_context;
    use educonnect::frontend::timers::{DelayedTask, ToastController, provide_scheduler};
    use educonnect::models::{Role, ViewId};
    use educonnect::session::{LOGIN_DELAY, Screen};
    use educonnect::toast::TOAST_DURATION;

    const TICK: Duration = Duration::from_millis(1);

    fn with_clock<T>(f: impl FnOnce(ManualClock) -> T) -> T {
        let owner = Owner::new();
        owner.with(|| {
            let clock = ManualClock::default();
            provide_scheduler(clock.clone());
            f(clock)
        })
    }

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> usize) {
        let hits = Arc::new(AtomicUsize::new(0));
        let read = {
            let hits = Arc::clone(&hits);
            move || hits.load(Ordering::SeqCst)
        };
        (hits, read)
    }

    #[test]
    fn test_delayed_task_fires_after_delay() {
        with_clock(|clock| {
            let task = DelayedTask::new();
            let (hits, count) = counter();
            task.schedule(Duration::from_millis(500), move || {
                hits.fetch_add(1, Ordering::SeqCst);
            });
            assert!(task.is_pending());

            clock.advance(Duration::from_millis(499));
            assert_eq!(count(), 0);
            clock.advance(TICK);
            assert_eq!(count(), 1);
            assert!(!task.is_pending());
            assert_eq!(clock.pending(), 0);
        });
    }

    #[test]
    fn test_delayed_task_cancel_prevents_callback() {
        with_clock(|clock| {
            let task = DelayedTask::new();
            let (hits, count) = counter();
            task.schedule(Duration::from_millis(100), move || {
                hits.fetch_add(1, Ordering::SeqCst);
            });
            task.cancel();

            assert_eq!(clock.pending(), 0);
            clock.advance(Duration::from_secs(1));
            assert_eq!(count(), 0);
            assert!(!task.is_pending());
        });
    }

    #[test]
    fn test_delayed_task_reschedule_replaces_previous_timer() {
        with_clock(|clock| {
            let task = DelayedTask::new();
            let (first, first_count) = counter();
            let (second, second_count) = counter();
            task.schedule(Duration::from_millis(100), move || {
                first.fetch_add(1, Ordering::SeqCst);
            });
            task.schedule(Duration::from_millis(300), move || {
                second.fetch_add(1, Ordering::SeqCst);
            });

            assert_eq!(clock.pending(), 1);
            clock.advance(Duration::from_secs(1));
            assert_eq!(first_count(), 0);
            assert_eq!(second_count(), 1);
        });
    }

    #[test]
    fn test_delayed_task_cancelled_on_owner_cleanup() {
        with_clock(|clock| {
            let child = Owner::current()
                .expect("test runs inside an owner")
                .child();
            let (hits, count) = counter();
            child.with(|| {
                DelayedTask::new().schedule(Duration::from_millis(100), move || {
                    hits.fetch_add(1, Ordering::SeqCst);
                });
            });
            assert_eq!(clock.pending(), 1);

            child.cleanup();
            assert_eq!(clock.pending(), 0);
            clock.advance(Duration::from_secs(1));
            assert_eq!(count(), 0);
        });
    }

    #[test]
    fn test_toast_controller_hides_after_duration() {
        with_clock(|clock| {
            let toast = ToastController::new();
            let state = toast.state();
            toast.show("Exam Started");
            assert!(state.with(|s| s.is_visible()));

            clock.advance(TOAST_DURATION - TICK);
            assert!(state.with(|s| s.is_visible()));
            clock.advance(TICK);
            assert!(!state.with(|s| s.is_visible()));
        });
    }

    #[test]
    fn test_toast_controller_second_toast_gets_full_duration() {
        with_clock(|clock| {
            let toast = ToastController::new();
            let state = toast.state();
            toast.show("Exam Started");
            clock.advance(Duration::from_millis(2000));
            toast.show("Assignment Upload Started");

            clock.advance(Duration::from_millis(1000));
            assert!(state.with(|s| s.is_visible()));
            assert_eq!(state.with(|s| s.message().to_string()), "Assignment Upload Started");

            clock.advance(Duration::from_millis(2000));
            assert!(!state.with(|s| s.is_visible()));
        });
    }

    #[test]
    fn test_session_context_login_completes_after_delay() {
        with_clock(|clock| {
            let ctx = provide_session_context();
            ctx.select_role(Role::Admin);
            ctx.submit_login("admin@educonnect.com", "secret");
            assert!(ctx.is_login_pending());

            clock.advance(LOGIN_DELAY - TICK);
            assert_eq!(ctx.screen(), Screen::Login(Role::Admin));
            clock.advance(TICK);
            assert_eq!(ctx.screen(), Screen::Portal(Role::Admin));
            assert_eq!(ctx.current_view(), ViewId::Analytics);
            assert!(!ctx.is_login_pending());
        });
    }

    #[test]
    fn test_session_context_logout_cancels_pending_login() {
        with_clock(|clock| {
            let ctx = provide_session_context();
            ctx.select_role(Role::Student);
            ctx.submit_login("user@educonnect.com", "secret");
            ctx.logout();

            assert_eq!(clock.pending(), 0);
            clock.advance(LOGIN_DELAY * 2);
            assert_eq!(ctx.screen(), Screen::RoleSelection);
            assert_eq!(ctx.role(), None);
        });
    }

    #[test]
    fn test_session_context_back_navigation_cancels_pending_login() {
        with_clock(|clock| {
            let ctx = provide_session_context();
            ctx.select_role(Role::Instructor);
            ctx.submit_login("user@educonnect.com", "secret");
            ctx.back_to_role_selection();
            ctx.select_role(Role::Instructor);

            assert_eq!(clock.pending(), 0);
            clock.advance(LOGIN_DELAY * 2);
            assert_eq!(ctx.screen(), Screen::Login(Role::Instructor));
            assert!(!ctx.is_login_pending());
        });
    }

    #[test]
    fn test_session_context_empty_credentials_schedule_nothing() {
        with_clock(|clock| {
            let ctx = provide_session_context();
            ctx.select_role(Role::Student);
            ctx.submit_login("", "secret");

            assert_eq!(clock.pending(), 0);
            assert!(!ctx.is_login_pending());
        });
    }
}
