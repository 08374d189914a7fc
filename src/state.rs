use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::users::UserStore;
use crate::training::TrainingInfo;

/// Shared application state, built once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub training: Arc<TrainingInfo>,
    pub config: Arc<AppConfig>,
}
