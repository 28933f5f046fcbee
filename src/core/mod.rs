pub mod authorization;
pub mod capabilities;
pub mod guard;
pub mod license;
pub mod modules;
pub mod results;
pub mod shared_services;

pub use crate::domain::ports::{DataRecognizer, ResultsService};
pub use crate::utils::error::Result;
