//! Application state
//!
//! Holds the service context and the configuration it was built from.

use std::sync::Arc;

use notice_common::AppConfig;
use notice_service::{MemberService, ServiceContext};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Member use cases bound to this state
    pub fn members(&self) -> MemberService<'_> {
        MemberService::new(&self.service_context)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &self.service_context)
            .field("app", &self.config.app)
            .finish()
    }
}
