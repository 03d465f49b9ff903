use serde::Serialize;

use crate::models::ViewId;

/// Glyphs used across the portal. Rendered as emoji so the frontend carries no
/// icon font.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    LayoutDashboard,
    BookOpen,
    PlayCircle,
    PenTool,
    Award,
    FileText,
    MessageSquare,
    BarChart,
    Calendar,
    Star,
    Users,
    Settings,
    GraduationCap,
    ShieldCheck,
    LogOut,
    Bell,
    Search,
    Mail,
    Lock,
    ChevronLeft,
    Menu,
    Check,
    Clock,
    Upload,
    Send,
    Plus,
    Download,
    CreditCard,
    Play,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::LayoutDashboard => "🏠",
            Self::BookOpen => "📖",
            Self::PlayCircle => "▶️",
            Self::PenTool => "✏️",
            Self::Award => "🏅",
            Self::FileText => "📄",
            Self::MessageSquare => "💬",
            Self::BarChart => "📊",
            Self::Calendar => "📅",
            Self::Star => "⭐",
            Self::Users => "👥",
            Self::Settings => "⚙️",
            Self::GraduationCap => "🎓",
            Self::ShieldCheck => "🛡️",
            Self::LogOut => "↩",
            Self::Bell => "🔔",
            Self::Search => "🔍",
            Self::Mail => "✉️",
            Self::Lock => "🔒",
            Self::ChevronLeft => "‹",
            Self::Menu => "☰",
            Self::Check => "✓",
            Self::Clock => "🕒",
            Self::Upload => "⬆",
            Self::Send => "➤",
            Self::Plus => "+",
            Self::Download => "⬇",
            Self::CreditCard => "💳",
            Self::Play => "▶",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct NavItem {
    pub id: ViewId,
    pub label: &'static str,
    pub icon: Icon,
}

impl NavItem {
    pub const fn new(id: ViewId, label: &'static str, icon: Icon) -> Self {
        Self { id, label, icon }
    }
}
