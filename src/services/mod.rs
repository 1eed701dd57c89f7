// Service module exports

pub mod holiday;
pub mod layout;
pub mod moves;
pub mod settings;
pub mod snapshot;
