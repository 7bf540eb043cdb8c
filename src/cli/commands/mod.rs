pub mod announce;
pub mod clock;
pub mod config;
pub mod employee;
pub mod employees;
pub mod export;
pub mod feed;
pub mod init;
pub mod login;
pub mod logs;
pub mod stats;
pub mod status;
pub mod today;
