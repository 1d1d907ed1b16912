pub mod company;
pub mod delivery;
pub mod employee;
pub mod material;
pub mod occurrence;
pub mod package;
pub mod received_item;
pub mod resident;
pub mod stats;
pub mod time_record;
pub mod visitor;

// Re-export all repositories for easy importing
pub use company::CompanyRepository;
pub use delivery::DeliveryRepository;
pub use employee::EmployeeRepository;
pub use material::MaterialRepository;
pub use occurrence::OccurrenceRepository;
pub use package::PackageRepository;
pub use received_item::ReceivedItemRepository;
pub use resident::ResidentRepository;
pub use stats::StatsRepository;
pub use time_record::TimeRecordRepository;
pub use visitor::{NewVisitor, VisitorRepository};
