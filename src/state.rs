use std::sync::Arc;

use crate::{
    assistant::{ShoppingAssistant, gemini::GeminiClient},
    catalog::seed_catalog,
    config::AppConfig,
    store::Store,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub store: Arc<Store>,
    pub assistant: Arc<dyn ShoppingAssistant>,
}

impl AppState {
    /// Seeds the catalog and wires the given assistant.
    pub fn new(config: AppConfig, assistant: Arc<dyn ShoppingAssistant>) -> Self {
        let products = seed_catalog(config.catalog_size);
        tracing::debug!(count = products.len(), "catalog seeded");
        Self {
            config: Arc::new(config),
            store: Arc::new(Store::with_products(products)),
            assistant,
        }
    }

    /// State backed by the Gemini client, or a disabled assistant when no key is set.
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let assistant: Arc<dyn ShoppingAssistant> = match config.gemini.api_key.clone() {
            Some(key) => Arc::new(GeminiClient::new(key, &config.gemini)?),
            None => {
                tracing::warn!("GEMINI_API_KEY is not set; assistant disabled");
                Arc::new(crate::assistant::DisabledAssistant)
            }
        };
        Ok(Self::new(config, assistant))
    }
}
