//! Application wiring

use app_ui::{ScreenView, ThemeError, ThemeStore, ThemeToggleScreen};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `default_filter`. Output goes to stderr.
/// Returns false when a global subscriber was already installed, in which
/// case the existing one stays in place.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "Tracing subscriber already installed");
            false
        }
    }
}

/// One application session: a theme store and the screen it drives
#[derive(Debug, Clone)]
pub struct DemoApp {
    store: ThemeStore,
    screen: ThemeToggleScreen,
}

impl DemoApp {
    /// Start a session from configuration
    pub fn new(config: &DemoConfig) -> Self {
        let source = config.color_scheme_source.source();
        let store = ThemeStore::initialize(config.preferred_theme, source.as_ref());
        tracing::info!(
            theme = %store.theme(),
            source = ?config.color_scheme_source,
            "Theme toggle demo started"
        );

        let app = Self::with_store(store);
        app.store.subscribe(|snapshot| {
            tracing::info!(theme = %snapshot.theme, "Theme changed");
        });
        app
    }

    /// Session around an existing store
    pub fn with_store(store: ThemeStore) -> Self {
        Self {
            store,
            screen: ThemeToggleScreen::new(),
        }
    }

    /// The session's theme store
    pub fn store(&self) -> &ThemeStore {
        &self.store
    }

    /// Render the screen for the current theme
    pub fn render(&self) -> Result<ScreenView, ThemeError> {
        self.screen.render(&self.store.scope())
    }
}
