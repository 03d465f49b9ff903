mod common;

#[cfg(test)]
pub mod panel_tests {
    use super::common::*;

    use educonnect::enrollment::Enrollment;
    use educonnect::inbox::Inbox;
    use educonnect::toast::{TOAST_DURATION, ToastState};

    #[test]
    fn test_toast_show_success() {
        let mut toast = ToastState::new();
        assert!(!toast.is_visible());

        toast.show("Exam Started");
        assert!(toast.is_visible());
        assert_eq!(toast.message(), "Exam Started");
        assert_eq!(TOAST_DURATION.as_millis(), 3000);
    }

    #[test]
    fn test_toast_dismiss_success() {
        let mut toast = ToastState::new();
        let ticket = toast.show("Course Created Successfully");
        assert!(toast.dismiss(ticket));
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_toast_dismiss_fails_on_stale_ticket() {
        let mut toast = ToastState::new();
        let first = toast.show("first");
        let second = toast.show("second");

        assert!(!toast.dismiss(first));
        assert!(toast.is_visible());
        assert_eq!(toast.message(), "second");

        assert!(toast.dismiss(second));
        assert!(!toast.is_visible());
        assert!(!toast.dismiss(second));
    }

    #[test]
    fn test_enrollment_default_has_two_courses() {
        let enrollment = Enrollment::default();
        assert_eq!(enrollment.active().len(), 2);
        assert!(!enrollment.is_checkout_open());
    }

    #[test]
    fn test_enrollment_confirm_payment_appends_with_zero_progress() {
        let mut enrollment = Enrollment::default();
        let c3 = get_course("c3");

        enrollment.begin_checkout(&c3);
        assert!(enrollment.is_checkout_open());
        assert_eq!(enrollment.checkout(), Some(&c3));

        let enrolled = enrollment.confirm_payment().expect("checkout was open");
        assert_eq!(enrolled.title, "Financial Accounting Basics");
        assert_eq!(enrolled.progress, 0);
        assert_eq!(enrollment.active().len(), 3);
        assert_eq!(enrollment.active()[2], enrolled);
        assert!(!enrollment.is_checkout_open());
    }

    #[test]
    fn test_enrollment_confirm_payment_allows_duplicates() {
        let mut enrollment = Enrollment::default();
        let c3 = get_course("c3");

        for _ in 0..2 {
            enrollment.begin_checkout(&c3);
            enrollment.confirm_payment();
        }

        let c3_count = enrollment.active().iter().filter(|c| c.id == "c3").count();
        assert_eq!(c3_count, 2);
        assert_eq!(enrollment.active().len(), 4);
    }

    #[test]
    fn test_enrollment_confirm_payment_resets_progress_of_enrolled_course() {
        let mut enrollment = Enrollment::default();
        let c1 = get_course("c1");
        assert_eq!(c1.progress, 75);

        enrollment.begin_checkout(&c1);
        let enrolled = enrollment.confirm_payment().expect("checkout was open");
        assert_eq!(enrolled.progress, 0);
        assert_eq!(enrollment.active()[0].progress, 75);
    }

    #[test]
    fn test_enrollment_confirm_payment_fails_without_checkout() {
        let mut enrollment = Enrollment::default();
        assert!(enrollment.confirm_payment().is_none());

        enrollment.begin_checkout(&get_course("c4"));
        enrollment.cancel_checkout();
        assert!(enrollment.confirm_payment().is_none());
        assert_eq!(enrollment.active().len(), 2);
    }

    #[test]
    fn test_inbox_default_selects_first_contact() {
        let inbox = Inbox::new();
        assert_eq!(inbox.selected_id(), 1);
        assert_eq!(
            inbox.selected_contact().map(|m| m.student.as_str()),
            Some("Alice Smith")
        );
        assert_eq!(inbox.transcript().len(), 2);
    }

    #[test]
    fn test_inbox_select_switches_transcript() {
        let mut inbox = Inbox::new();
        inbox.select(3);
        assert_eq!(
            inbox.selected_contact().map(|m| m.student.as_str()),
            Some("Emma Wilson")
        );
        assert_eq!(inbox.transcript().len(), 1);

        inbox.select(99);
        assert!(inbox.selected_contact().is_none());
        assert!(inbox.transcript().is_empty());
    }

    #[test]
    fn test_inbox_send_clears_draft() {
        let mut inbox = Inbox::new();
        inbox.set_draft("See you on Monday");
        assert!(inbox.send());
        assert_eq!(inbox.draft(), "");
        assert_eq!(inbox.transcript().len(), 2);
    }

    #[test]
    fn test_inbox_send_fails_on_blank_draft() {
        let mut inbox = Inbox::new();
        inbox.set_draft("   ");
        assert!(!inbox.send());
        assert_eq!(inbox.draft(), "   ");
    }
}
