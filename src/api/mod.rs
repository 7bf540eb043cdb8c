//! Transport layer: REST commands and the announcement event stream.
//! This is the only module that talks to the backend; everything above it
//! works on parsed models.

pub mod backend;
pub mod client;
pub mod payload;
pub mod stream;

pub use backend::AttendanceBackend;
pub use client::ApiClient;
pub use stream::{FeedConnection, NotificationStream};
