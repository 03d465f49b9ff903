//! Month grid behind the admin "Class Schedule" panel.

pub const GRID_CELLS: usize = 35;
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const LEADING_BLANKS: i32 = 2;
const PREVIOUS_MONTH_DAYS: i32 = 30;
const MONTH_DAYS: i32 = 31;
const TODAY: i32 = 24;

const EVENTS: [(i32, &str, EventTone); 2] = [
    (24, "Python 101", EventTone::Blue),
    (25, "UX Design Lab", EventTone::Purple),
];

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EventTone {
    Blue,
    Purple,
}

impl EventTone {
    pub fn classes(&self) -> &'static str {
        match self {
            Self::Blue => "bg-blue-100 text-blue-700",
            Self::Purple => "bg-purple-100 text-purple-700",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CalendarEvent {
    pub title: &'static str,
    pub tone: EventTone,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct CalendarCell {
    pub day: u32,
    /// False for the spill-over days of the neighbouring months.
    pub in_month: bool,
    pub is_today: bool,
    pub event: Option<CalendarEvent>,
}

pub fn month_grid() -> Vec<CalendarCell> {
    (0..GRID_CELLS as i32)
        .map(|i| {
            let day = i - LEADING_BLANKS;
            let (label, in_month) = if day <= 0 {
                (PREVIOUS_MONTH_DAYS + day, false)
            } else if day > MONTH_DAYS {
                (day - MONTH_DAYS, false)
            } else {
                (day, true)
            };
            let event = in_month
                .then(|| EVENTS.iter().find(|(d, _, _)| *d == day))
                .flatten()
                .map(|&(_, title, tone)| CalendarEvent { title, tone });

            CalendarCell {
                day: label as u32,
                in_month,
                is_today: in_month && day == TODAY,
                event,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ClassSession {
    pub month: &'static str,
    pub day: u32,
    pub title: &'static str,
    pub time: &'static str,
    pub room: &'static str,
}

/// Next three scheduled sessions, one per day after today.
pub fn upcoming_sessions() -> Vec<ClassSession> {
    (1..=3)
        .map(|i| ClassSession {
            month: "OCT",
            day: TODAY as u32 + i,
            title: "Introduction to AI",
            time: "10:00 AM",
            room: "Room A",
        })
        .collect()
}
