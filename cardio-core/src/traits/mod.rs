pub mod model;

pub use model::ModelCapability;
