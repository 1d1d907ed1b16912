pub mod companies;
pub mod deliveries;
pub mod employees;
pub mod health;
pub mod materials;
pub mod occurrences;
pub mod packages;
pub mod received_items;
pub mod residents;
pub mod session;
pub mod shared;
pub mod stats;
pub mod time_records;
pub mod visitors;
