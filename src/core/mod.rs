pub mod ack_store;
pub mod aggregate;
pub mod feed;
pub mod tracker;
