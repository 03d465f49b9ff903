mod common;

#[cfg(test)]
pub mod fixtures_tests {
    use educonnect::fixtures::{self, *};
    use educonnect::models::*;

    #[test]
    fn test_nav_items_match_role_panels() {
        for role in Role::ALL {
            for item in fixtures::nav_items(role) {
                let has_panel = match role {
                    Role::Student => StudentView::from_view(item.id).is_some(),
                    Role::Instructor => InstructorView::from_view(item.id).is_some(),
                    Role::Admin => AdminView::from_view(item.id).is_some(),
                };
                assert!(has_panel, "{role} nav entry {} has no panel", item.id);
            }
        }
    }

    #[test]
    fn test_nav_items_contain_default_view() {
        for role in Role::ALL {
            assert!(fixtures::is_nav_member(role, role.default_view()));
        }
    }

    #[test]
    fn test_nav_items_labels() {
        let labels: Vec<_> = STUDENT_NAV.iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            [
                "Dashboard",
                "Course Catalog",
                "My Learning",
                "Exams & Tasks",
                "Certificates"
            ]
        );
        assert_eq!(INSTRUCTOR_NAV[3].label, "Messages");
        assert_eq!(ADMIN_NAV[1].label, "Class Schedule");
    }

    #[test]
    fn test_courses_fixture_success() {
        assert_eq!(COURSES.len(), 5);
        let c3 = fixtures::find_course("c3").expect("c3 exists");
        assert_eq!(c3.title, "Financial Accounting Basics");
        assert_eq!(c3.price, "RM 99");
        assert_eq!(c3.level, CourseLevel::Intermediate);
        assert!(fixtures::find_course("c9").is_none());
    }

    #[test]
    fn test_initial_enrollments_are_first_two_courses() {
        let ids: Vec<_> = fixtures::initial_enrollments()
            .into_iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, ["c1", "c2"]);
        assert_eq!(fixtures::instructor_courses().len(), 3);
    }

    #[test]
    fn test_course_new_clamps_progress_and_rating() {
        let course = Course::new(
            "x", "X", "Y", 150, 7.5, "Z", "img", "RM 1", "1 Week", CourseLevel::Beginner,
        );
        assert_eq!(course.progress, 100);
        assert_eq!(course.rating, 5.0);
        assert_eq!(course.enrolled().progress, 0);
    }

    #[test]
    fn test_notifications_have_unread() {
        assert!(has_unread(&NOTIFICATIONS));
        let all_read: Vec<_> = NOTIFICATIONS
            .iter()
            .cloned()
            .map(|mut n| {
                n.read = true;
                n
            })
            .collect();
        assert!(!has_unread(&all_read));
    }

    #[test]
    fn test_admin_stat_labels() {
        let labels: Vec<_> = ADMIN_STATS.iter().map(AdminStat::label).collect();
        assert_eq!(labels, ["revenue", "active students", "completion rate"]);
    }

    #[test]
    fn test_assessments_split_by_status() {
        let pending: Vec<_> = fixtures::assessments_with_status(AssessmentStatus::Pending)
            .map(|a| a.id)
            .collect();
        let submitted: Vec<_> = fixtures::assessments_with_status(AssessmentStatus::Submitted)
            .map(|a| a.id)
            .collect();
        assert_eq!(pending, [1, 2]);
        assert_eq!(submitted, [3]);
    }

    #[test]
    fn test_assessment_kind_messages() {
        assert_eq!(AssessmentKind::Exam.action_label(), "Start Exam");
        assert_eq!(AssessmentKind::Exam.started_message(), "Exam Started");
        assert_eq!(
            AssessmentKind::Assignment.action_label(),
            "Upload Assignment"
        );
        assert_eq!(
            AssessmentKind::Assignment.started_message(),
            "Assignment Upload Started"
        );
    }

    #[test]
    fn test_transcript_per_contact() {
        assert_eq!(fixtures::transcript(1).len(), 2);
        assert!(fixtures::transcript(1)[0].from_instructor);
        assert_eq!(fixtures::transcript(3).len(), 1);
        assert!(fixtures::transcript(42).is_empty());
    }

    #[test]
    fn test_message_avatar_uses_initials() {
        let alice = fixtures::find_message(1).expect("contact 1 exists");
        assert_eq!(alice.avatar(), "AS");
    }

    #[test]
    fn test_instructor_initials_success() {
        let initials: Vec<_> = INSTRUCTORS.iter().map(|i| i.initials()).collect();
        assert_eq!(initials, ["DSL", "MJ", "JD"]);
        assert_eq!(educonnect::models::initials(""), "");
    }

    #[test]
    fn test_mock_user_roles() {
        let roles: Vec<_> = (1..=5).map(fixtures::mock_user_role).collect();
        assert_eq!(
            roles,
            [
                Role::Admin,
                Role::Instructor,
                Role::Student,
                Role::Student,
                Role::Student
            ]
        );
    }
}
