pub mod company;
pub mod delivery;
pub mod employee;
pub mod macros;
pub mod material;
pub mod occurrence;
pub mod package;
pub mod received_item;
pub mod resident;
pub mod stats;
pub mod time_record;
pub mod visitor;

// Re-export all models for easy importing
pub use company::*;
pub use delivery::*;
pub use employee::*;
pub use material::*;
pub use occurrence::*;
pub use package::*;
pub use received_item::*;
pub use resident::*;
pub use stats::*;
pub use time_record::*;
pub use visitor::*;
