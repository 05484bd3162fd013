pub mod app_config;
pub mod config;
pub mod form;
pub mod format;
pub mod page;
pub mod phone_list;
pub mod phones;
pub mod ports;
pub mod records;
pub mod submit;

#[cfg(test)]
mod testing;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use form::{FormError, FormField, SupplierForm, ValidationError};
pub use format::{NoMatchPolicy, PhoneFormatter, PhoneInput};
pub use page::{DeleteOutcome, PageError, SupplierPage};
pub use phone_list::{PhoneList, PhoneListError, PhoneSlot};
pub use phones::{normalize_phone_value, MalformedRecord, PhoneWireFormat};
pub use ports::{ApiError, ConfirmPrompt, NotificationSink, Severity, SupplierApi};
pub use records::{SupplierPayload, SupplierRecord, SupplierType, UnknownSupplierType};
pub use submit::{RecordSubmitter, SubmitError, SubmitOutcome, SubmitPhase};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
