pub mod config;
pub mod fetch;
pub mod normalize;
pub mod reshape;
pub mod store;

pub use config::Config;
pub use fetch::{ApiResponse, RawObservation};
pub use normalize::CpiRow;
pub use reshape::MonthlyRecord;
