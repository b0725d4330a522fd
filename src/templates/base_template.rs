use crate::config::STORE_NAME;
use crate::models::AppState;
use crate::utils::hostname_from_url;

/// Values every page layout needs, built once per request.
#[derive(Debug, Clone, Default)]
pub struct TemplateGlobals {
    pub store_name: String,
    pub api_hostname: String,
}

impl TemplateGlobals {
    pub fn from_state(state: &AppState) -> Self {
        TemplateGlobals {
            store_name: STORE_NAME.to_string(),
            api_hostname: hostname_from_url(state.catalog.base_url()),
        }
    }
}
