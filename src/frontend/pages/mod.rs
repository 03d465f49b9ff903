//! Top-level screens of the EduConnect portal

mod login;
mod not_found;
mod portal;
mod role_select;

pub use login::LoginPage;
pub use not_found::{NotFound, ViewNotFound};
pub use portal::PortalPage;
pub use role_select::RoleSelectPage;
