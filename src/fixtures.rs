//! Static mock data standing in for a backend.
//!
//! Everything here is read-only. Panels that need to mutate something (the
//! student's enrolled courses, the inbox draft) copy what they need out of
//! these tables into their own local state.

use std::sync::LazyLock;

use crate::models::*;

pub const APP_NAME: &str = "EduConnect";

pub const STUDENT_NAV: [NavItem; 5] = [
    NavItem::new(ViewId::Dashboard, "Dashboard", Icon::LayoutDashboard),
    NavItem::new(ViewId::Catalog, "Course Catalog", Icon::BookOpen),
    NavItem::new(ViewId::CoursePlayer, "My Learning", Icon::PlayCircle),
    NavItem::new(ViewId::Assessments, "Exams & Tasks", Icon::PenTool),
    NavItem::new(ViewId::Profile, "Certificates", Icon::Award),
];

pub const INSTRUCTOR_NAV: [NavItem; 4] = [
    NavItem::new(ViewId::Dashboard, "Dashboard", Icon::LayoutDashboard),
    NavItem::new(ViewId::CourseManagement, "My Courses", Icon::BookOpen),
    NavItem::new(ViewId::Grading, "Grading Portal", Icon::FileText),
    NavItem::new(ViewId::Communications, "Messages", Icon::MessageSquare),
];

pub const ADMIN_NAV: [NavItem; 5] = [
    NavItem::new(ViewId::Analytics, "Analytics", Icon::BarChart),
    NavItem::new(ViewId::Coordination, "Class Schedule", Icon::Calendar),
    NavItem::new(ViewId::Evaluations, "Evaluations", Icon::Star),
    NavItem::new(ViewId::Users, "User Management", Icon::Users),
    NavItem::new(ViewId::Settings, "Settings", Icon::Settings),
];

pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Student => &STUDENT_NAV,
        Role::Instructor => &INSTRUCTOR_NAV,
        Role::Admin => &ADMIN_NAV,
    }
}

/// Whether `view` has an entry in the sidebar of `role`.
pub fn is_nav_member(role: Role, view: ViewId) -> bool {
    nav_items(role).iter().any(|item| item.id == view)
}

pub fn role_icon(role: Role) -> Icon {
    match role {
        Role::Student => Icon::GraduationCap,
        Role::Instructor => Icon::BookOpen,
        Role::Admin => Icon::ShieldCheck,
    }
}

pub static COURSES: LazyLock<Vec<Course>> = LazyLock::new(|| {
    vec![
        Course::new(
            "c1",
            "Advanced Python for Data Science",
            "Dr. Sarah Lee",
            75,
            4.8,
            "Data Science",
            "https://picsum.photos/400/250?random=1",
            "RM 199",
            "12 Weeks",
            CourseLevel::Advanced,
        ),
        Course::new(
            "c2",
            "Digital Marketing Mastery",
            "Mark Johnson",
            10,
            4.5,
            "Marketing",
            "https://picsum.photos/400/250?random=2",
            "RM 149",
            "8 Weeks",
            CourseLevel::Beginner,
        ),
        Course::new(
            "c3",
            "Financial Accounting Basics",
            "EduConnect Partner",
            0,
            4.2,
            "Finance",
            "https://picsum.photos/400/250?random=3",
            "RM 99",
            "4 Weeks",
            CourseLevel::Intermediate,
        ),
        Course::new(
            "c4",
            "UI/UX Design Principles",
            "Jane Doe",
            0,
            4.9,
            "Design",
            "https://picsum.photos/400/250?random=4",
            "RM 120",
            "6 Weeks",
            CourseLevel::Beginner,
        ),
        Course::new(
            "c5",
            "Machine Learning A-Z",
            "Dr. Alan Turing",
            0,
            4.7,
            "Data Science",
            "https://picsum.photos/400/250?random=5",
            "RM 299",
            "16 Weeks",
            CourseLevel::Advanced,
        ),
    ]
});

pub fn find_course(id: &str) -> Option<&'static Course> {
    COURSES.iter().find(|course| course.id == id)
}

/// Courses a fresh student session starts enrolled in.
pub fn initial_enrollments() -> Vec<Course> {
    COURSES.iter().take(2).cloned().collect()
}

/// Courses owned by the demo instructor.
pub fn instructor_courses() -> &'static [Course] {
    &COURSES[..3]
}

pub const CATALOG_FILTERS: [&str; 4] = ["All", "Design", "Development", "Business"];

pub static NOTIFICATIONS: LazyLock<Vec<Notification>> = LazyLock::new(|| {
    vec![
        Notification::new(
            "n1",
            "Your assignment for Python 101 has been graded.",
            "2 hours ago",
            false,
        ),
        Notification::new(
            "n2",
            "New course material available in Digital Marketing.",
            "1 day ago",
            true,
        ),
        Notification::new(
            "n3",
            "Upcoming maintenance scheduled for Sunday.",
            "2 days ago",
            true,
        ),
    ]
});

pub static ADMIN_STATS: LazyLock<Vec<AdminStat>> = LazyLock::new(|| {
    vec![
        AdminStat::new("revenue", "RM 45,200"),
        AdminStat::new("active_students", "1,240"),
        AdminStat::new("completion_rate", "92%"),
    ]
});

pub static REVENUE_DATA: LazyLock<Vec<ChartPoint>> = LazyLock::new(|| {
    vec![
        ChartPoint::new("Jan", 4000.0),
        ChartPoint::new("Feb", 3000.0),
        ChartPoint::new("Mar", 5000.0),
        ChartPoint::new("Apr", 7500.0),
        ChartPoint::new("May", 6000.0),
        ChartPoint::new("Jun", 9000.0),
    ]
});

pub static CATEGORY_DATA: LazyLock<Vec<ChartPoint>> = LazyLock::new(|| {
    vec![
        ChartPoint::new("Tech", 400.0),
        ChartPoint::new("Business", 300.0),
        ChartPoint::new("Art", 300.0),
        ChartPoint::new("Health", 200.0),
    ]
});

pub static STUDY_ACTIVITY: LazyLock<Vec<ChartPoint>> = LazyLock::new(|| {
    [("M", 2.0), ("T", 4.0), ("W", 3.0), ("T", 6.0), ("F", 4.0), ("S", 8.0), ("S", 5.0)]
        .into_iter()
        .map(|(label, value)| ChartPoint::new(label, value))
        .collect()
});

/// Donut slice colours, cycled by index.
pub const CHART_COLORS: [&str; 4] = ["#0071E3", "#5E5CE6", "#34C759", "#FF9F0A"];

pub static ASSESSMENTS: LazyLock<Vec<Assessment>> = LazyLock::new(|| {
    vec![
        Assessment::new(
            1,
            "Python Final Exam",
            "Advanced Python",
            AssessmentKind::Exam,
            "Oct 28, 2023",
            AssessmentStatus::Pending,
        ),
        Assessment::new(
            2,
            "UX Research Paper",
            "UI/UX Design",
            AssessmentKind::Assignment,
            "Oct 30, 2023",
            AssessmentStatus::Pending,
        ),
        Assessment::new(
            3,
            "Financial Report Analysis",
            "Accounting Basics",
            AssessmentKind::Assignment,
            "Oct 20, 2023",
            AssessmentStatus::Submitted,
        ),
    ]
});

pub fn assessments_with_status(
    status: AssessmentStatus,
) -> impl Iterator<Item = &'static Assessment> {
    ASSESSMENTS.iter().filter(move |a| a.status == status)
}

pub static MESSAGES: LazyLock<Vec<Message>> = LazyLock::new(|| {
    vec![
        Message::new(
            1,
            "Alice Smith",
            "Hi Professor, I had a question about module 3.",
            "10:30 AM",
            true,
        ),
        Message::new(2, "John Doe", "Thanks for the feedback!", "Yesterday", false),
        Message::new(
            3,
            "Emma Wilson",
            "When is the next live session?",
            "Oct 22",
            false,
        ),
    ]
});

pub fn find_message(id: u32) -> Option<&'static Message> {
    MESSAGES.iter().find(|m| m.id == id)
}

/// Static conversation behind each inbox entry. Unknown contacts have none.
pub fn transcript(contact_id: u32) -> Vec<TranscriptLine> {
    match contact_id {
        1 => vec![
            TranscriptLine::instructor("Hello Alice, how are you finding the course material?"),
            TranscriptLine::student(
                "Hi Professor, I had a question about module 3. Specifically about the array methods.",
            ),
        ],
        2 => vec![
            TranscriptLine::instructor("Nice work on the last assignment, John."),
            TranscriptLine::student("Thanks for the feedback!"),
        ],
        3 => vec![TranscriptLine::student("When is the next live session?")],
        _ => Vec::new(),
    }
}

pub static INSTRUCTORS: LazyLock<Vec<InstructorEvaluation>> = LazyLock::new(|| {
    vec![
        InstructorEvaluation::new(1, "Dr. Sarah Lee", "Computer Science", 4.8, 124),
        InstructorEvaluation::new(2, "Mark Johnson", "Marketing", 4.5, 89),
        InstructorEvaluation::new(3, "Jane Doe", "Design", 4.9, 210),
    ]
});

/// Role shown in row `index` (1-based) of the admin user table.
pub fn mock_user_role(index: u32) -> Role {
    match index {
        1 => Role::Admin,
        2 => Role::Instructor,
        _ => Role::Student,
    }
}

pub const SKILLS: [&str; 4] = ["Python", "React", "Design", "Data Science"];

pub const COURSE_CATEGORIES: [&str; 3] = ["Data Science", "Design", "Marketing"];
