pub use analytics::*;
pub use assessment::*;
pub use course::*;
pub use instructor::*;
pub use message::*;
pub use nav_item::*;
pub use notification::*;
pub use role::*;
pub use view::*;

mod analytics;
mod assessment;
mod course;
mod instructor;
mod message;
mod nav_item;
mod notification;
mod role;
mod view;
