//! Wire types of the notification receiver API.

pub mod acknowledgement;
pub mod notification;

pub use {acknowledgement::Acknowledgement, notification::Notification};
