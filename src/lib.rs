pub mod core;

pub use crate::core::config::ProvisionConfig;
pub use crate::core::error::{ProvisionError, ProvisionResult};
pub use crate::core::provision::Provisioner;
