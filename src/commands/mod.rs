mod analyze;
mod components;
mod convert;

pub use analyze::run_analyze;
pub use components::run_components;
pub use convert::run_convert;
