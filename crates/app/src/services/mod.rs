mod analytics;
mod survey;
mod uploads;

use std::sync::Arc;

use crate::app::AppConfig;
use crate::cache::DerivationCache;

pub use analytics::{AnalyticsService, DashboardCharts};
pub use survey::{SurveyDefinition, SurveyService};
pub use uploads::{UploadListing, UploadService};

type SharedConfig = Arc<AppConfig>;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub analytics: AnalyticsService,
    pub uploads: UploadService,
    pub survey: SurveyService,
}

impl AppServices {
    pub fn new(config: &AppConfig) -> Self {
        let shared = Arc::new(config.clone());
        let cache = Arc::new(DerivationCache::new(config.cache_capacity));
        Self {
            analytics: AnalyticsService::new(shared.clone(), cache.clone()),
            uploads: UploadService::new(shared.clone(), cache),
            survey: SurveyService::new(shared),
        }
    }
}
