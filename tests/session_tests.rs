mod common;

#[cfg(test)]
pub mod session_tests {
    use super::common::*;

    use educonnect::models::*;
    use educonnect::session::{LOGIN_DELAY, Screen, Session};

    #[test]
    fn test_session_default_shows_role_selection() {
        let session = Session::default();
        assert_eq!(session.role(), None);
        assert!(!session.is_authenticated());
        assert_eq!(session.current_view(), ViewId::Dashboard);
        assert_eq!(session.screen(), Screen::RoleSelection);
    }

    #[test]
    fn test_session_select_role_success() {
        for role in Role::ALL {
            let mut session = Session::new();
            session.select_role(role);
            assert_eq!(session.role(), Some(role));
            assert!(!session.is_authenticated());
            assert_eq!(session.screen(), Screen::Login(role));
        }
    }

    #[test]
    fn test_session_back_to_role_selection_success() {
        let mut session = Session::new();
        session.select_role(Role::Instructor);
        session.back_to_role_selection();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_session_login_delay_is_one_second() {
        assert_eq!(LOGIN_DELAY.as_millis(), 1000);
    }

    #[test]
    fn test_session_submit_login_pending_until_completed() {
        let (session, _) = pending_session(Role::Student);
        assert!(session.is_login_pending());
        assert!(!session.is_authenticated());
        assert_eq!(session.screen(), Screen::Login(Role::Student));
    }

    #[test]
    fn test_session_complete_login_success() {
        for role in Role::ALL {
            let session = authenticated_session(role);
            assert!(session.is_authenticated());
            assert!(!session.is_login_pending());
            assert_eq!(session.screen(), Screen::Portal(role));
        }
    }

    #[test]
    fn test_session_complete_login_lands_on_default_view() {
        assert_eq!(
            authenticated_session(Role::Admin).current_view(),
            ViewId::Analytics
        );
        assert_eq!(
            authenticated_session(Role::Student).current_view(),
            ViewId::Dashboard
        );
        assert_eq!(
            authenticated_session(Role::Instructor).current_view(),
            ViewId::Dashboard
        );
    }

    #[test]
    fn test_session_submit_login_fails_on_empty_credentials() {
        let mut session = Session::new();
        session.select_role(Role::Student);
        assert!(session.submit_login("", "secret").is_none());
        assert!(session.submit_login("a@b.c", "").is_none());
        assert!(!session.is_login_pending());
    }

    #[test]
    fn test_session_submit_login_accepts_whitespace_password() {
        let mut session = Session::new();
        session.select_role(Role::Student);
        let ticket = session
            .submit_login("user@educonnect.com", "   ")
            .expect("non-empty password should be accepted");
        assert!(session.complete_login(ticket));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_session_submit_login_accepts_whitespace_email() {
        let mut session = Session::new();
        session.select_role(Role::Admin);
        assert!(session.submit_login("  ", "pw").is_some());
        assert!(session.is_login_pending());
    }

    #[test]
    fn test_session_submit_login_fails_without_role() {
        let mut session = Session::new();
        assert!(session.submit_login("a@b.c", "secret").is_none());
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_session_submit_login_fails_while_pending() {
        let (mut session, _) = pending_session(Role::Admin);
        assert!(session.submit_login("a@b.c", "secret").is_none());
    }

    #[test]
    fn test_session_complete_login_fails_after_logout() {
        let (mut session, ticket) = pending_session(Role::Student);
        session.logout();
        assert!(!session.complete_login(ticket));
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_session_complete_login_fails_after_back_navigation() {
        let (mut session, ticket) = pending_session(Role::Instructor);
        session.back_to_role_selection();
        assert!(!session.complete_login(ticket));
        assert!(!session.is_authenticated());
        assert_eq!(session.screen(), Screen::RoleSelection);
    }

    #[test]
    fn test_session_complete_login_fails_on_superseded_ticket() {
        let (mut session, stale) = pending_session(Role::Student);
        session.back_to_role_selection();
        session.select_role(Role::Admin);
        let fresh = session
            .submit_login("admin@educonnect.com", "secret")
            .expect("second login should be accepted");

        assert!(!session.complete_login(stale));
        assert!(session.is_login_pending());
        assert!(session.complete_login(fresh));
        assert_eq!(session.current_view(), ViewId::Analytics);
    }

    #[test]
    fn test_session_logout_resets_to_default() {
        for role in Role::ALL {
            let mut session = authenticated_session(role);
            session.navigate(ViewId::Settings);
            session.logout();
            assert_eq!(session, Session::default());
        }
    }

    #[test]
    fn test_session_logout_from_default_is_noop() {
        let mut session = Session::new();
        session.logout();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_session_navigate_success() {
        let mut session = authenticated_session(Role::Student);
        session.navigate(ViewId::Catalog);
        assert_eq!(session.current_view(), ViewId::Catalog);
        assert!(session.is_view_in_nav());
    }

    #[test]
    fn test_session_navigate_accepts_foreign_view() {
        let mut session = authenticated_session(Role::Student);
        session.navigate(ViewId::Analytics);
        assert_eq!(session.current_view(), ViewId::Analytics);
        assert!(!session.is_view_in_nav());
        assert_eq!(session.screen(), Screen::Portal(Role::Student));
    }

    #[test]
    fn test_role_from_str_success() {
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" student ".parse::<Role>(), Ok(Role::Student));
        assert!(Role::Instructor == "instructor");
    }

    #[test]
    fn test_role_from_str_fails_on_unknown() {
        assert_eq!(
            "guest".parse::<Role>(),
            Err(educonnect::common::ParseError::UnknownRole("guest".into()))
        );
    }

    #[test]
    fn test_view_id_round_trips_through_str() {
        for view in ViewId::ALL {
            assert_eq!(view.as_str().parse::<ViewId>(), Ok(view));
        }
        assert!("lobby".parse::<ViewId>().is_err());
    }

    #[test]
    fn test_view_id_breadcrumb_replaces_first_underscore() {
        assert_eq!(ViewId::CoursePlayer.breadcrumb(), "course player");
        assert_eq!(ViewId::CourseManagement.breadcrumb(), "course management");
        assert_eq!(ViewId::Dashboard.breadcrumb(), "dashboard");
    }

    #[test]
    fn test_role_views_are_closed_per_role() {
        assert_eq!(
            StudentView::from_view(ViewId::Catalog),
            Some(StudentView::Catalog)
        );
        assert_eq!(StudentView::from_view(ViewId::Analytics), None);
        assert_eq!(InstructorView::from_view(ViewId::Profile), None);
        assert_eq!(
            AdminView::from_view(ViewId::Settings),
            Some(AdminView::Settings)
        );
        assert_eq!(AdminView::from_view(ViewId::Dashboard), None);
    }
}
