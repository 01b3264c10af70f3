pub mod kbb;
pub mod nhtsa;
pub mod vehicle_service;
pub mod vehicle_trait;

pub use kbb::KbbClient;
pub use nhtsa::NhtsaClient;
pub use vehicle_service::VehicleService;
pub use vehicle_trait::{VehicleCatalog, VehicleValuation};
