pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{MakesQuery, ModelsQuery, VehicleValueRequest};
pub use services::{KbbClient, NhtsaClient, VehicleCatalog, VehicleService, VehicleValuation};
