use std::sync::Arc;

use bloombox_core::config::{AppConfig, ConfigError, LoadOptions};
use bloombox_core::{
    Catalog, InMemoryDocumentStore, MockPaymentGateway, NoopMailer, RecommendationEngine,
};
use thiserror::Error;
use tracing::info;

use crate::routes::ApiState;

pub struct Application {
    pub config: AppConfig,
    pub state: ApiState,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        "starting application bootstrap"
    );
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    // Catalog construction must complete before any route is reachable.
    let catalog = Arc::new(Catalog::new());
    info!(
        event_name = "system.bootstrap.catalog_loaded",
        correlation_id = "bootstrap",
        box_count = catalog.list_all().len(),
        "featured catalog loaded"
    );

    let state = ApiState {
        catalog,
        recommender: RecommendationEngine::new(),
        documents: Arc::new(InMemoryDocumentStore::new()),
        payments: Arc::new(MockPaymentGateway),
        mailer: Arc::new(NoopMailer),
    };

    Ok(Application { config, state })
}

#[cfg(test)]
mod tests {
    use bloombox_core::config::{ConfigOverrides, LoadOptions};

    use crate::bootstrap::bootstrap;

    #[test]
    fn bootstrap_seeds_the_catalog_before_serving() {
        let app = bootstrap(LoadOptions::default()).expect("bootstrap should succeed");

        assert_eq!(app.state.catalog.list_all().len(), 4);
        assert_eq!(app.config.server.port, 8000);
    }

    #[test]
    fn bootstrap_fails_fast_on_invalid_overrides() {
        let result = bootstrap(LoadOptions {
            overrides: ConfigOverrides {
                port: Some(9000),
                health_check_port: Some(9000),
                ..ConfigOverrides::default()
            },
            ..LoadOptions::default()
        });

        assert!(result.is_err());
        let message = result.err().expect("error").to_string();
        assert!(message.contains("health_check_port"));
    }
}
