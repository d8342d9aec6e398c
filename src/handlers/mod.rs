pub mod countries;
pub mod status;
