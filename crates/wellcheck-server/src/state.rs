use std::sync::Arc;

use wellcheck_export::error::ExportError;
use wellcheck_export::render::Renderer;
use wellcheck_export::view::CrisisResources;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<Renderer>,
    pub crisis: Arc<CrisisResources>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, ExportError> {
        Ok(Self {
            renderer: Arc::new(Renderer::new()?),
            crisis: Arc::new(config.crisis.clone()),
        })
    }
}
