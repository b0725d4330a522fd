use crate::api::CatalogClient;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub custom_css: Option<String>,
}
