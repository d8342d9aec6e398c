pub mod error;
pub mod input;
pub mod response;
pub mod uptime;
