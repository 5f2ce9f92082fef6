pub mod app;
pub mod cache;
pub mod charts;
pub mod error;
pub mod services;
pub mod survey;
pub mod uploads;

pub use app::{AppConfig, AppState};
pub use cache::{DEFAULT_CACHE_CAPACITY, DerivationCache};
pub use error::{ApiError, AppError, Result};
pub use services::{AppServices, DashboardCharts, SurveyDefinition, UploadListing};
pub use survey::{SURVEY_FILE_NAME, SurveyStore};
