// Module exports for models

pub mod category;
pub mod event;
pub mod holiday;
pub mod settings;
