pub mod exchange_service;
pub mod info_service;
pub mod lookup;
pub mod neighbours;
pub mod status_service;

#[cfg(test)]
pub(crate) mod testing;
