pub mod exchange;
pub mod info;
pub mod status;
