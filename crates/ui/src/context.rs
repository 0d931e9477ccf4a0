use std::sync::Arc;

use profile_core::{ProfileRenderer, RenderedProfile, ThemeConfig};

pub trait UiApp: Send + Sync {
    fn app_name(&self) -> &str;
    fn renderer(&self) -> &ProfileRenderer;
}

/// Read-only page data shared with every component.
#[derive(Clone)]
pub struct AppContext {
    app_name: String,
    profile: Arc<RenderedProfile>,
}

impl AppContext {
    /// Renders the profile once; components only read the result.
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let profile = app.renderer().render();
        tracing::debug!(title = %profile.title, "profile context ready");

        Self {
            app_name: app.app_name().to_string(),
            profile: Arc::new(profile),
        }
    }

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn profile(&self) -> Arc<RenderedProfile> {
        Arc::clone(&self.profile)
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeConfig {
        &self.profile.theme
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
