pub mod api;
#[cfg(not(target_arch = "wasm32"))]
pub mod client;
pub mod config;
pub mod models;
pub mod operations;
pub mod state;

pub use api::{ApiError, ApiResult, AppointmentApi};
pub use config::ClientConfig;
pub use models::{Appointment, AppointmentDraft, Field};
pub use state::{Action, FormMode, ManagerState, Submission};
