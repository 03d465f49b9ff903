//! Reusable UI components for the EduConnect portal

mod badge;
mod button;
mod card;
mod chart;
mod input;
mod modal;
mod progress;
mod stat_card;
mod toast;

pub use badge::{Badge, BadgeColor};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use chart::{AreaChart, DonutChart, LineChart};
pub use input::{EmailInput, PasswordInput, TextInput};
pub use modal::Modal;
pub use progress::ProgressBar;
pub use stat_card::StatCard;
pub use toast::Toast;
