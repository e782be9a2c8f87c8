//! Theme store and scoped access
//!
//! [`ThemeStore`] is the single source of truth for the active theme. It is
//! created once per session and handed by reference to everything that needs
//! it. Components receive a [`ThemeScope`], which may or may not be bound to a
//! store; reading theme state from an unbound scope fails with
//! [`ThemeError::NotInitialized`].
//!
//! Changes fan out two ways:
//! - registered listeners, called synchronously in registration order
//! - a `tokio::sync::watch` signal carrying the latest [`ThemeSnapshot`]
//!
//! # Example
//!
//! ```rust
//! use app_ui::provider::ThemeStore;
//! use app_ui::theme::ThemeName;
//! use app_platform::FixedColorScheme;
//!
//! let store = ThemeStore::initialize(None, &FixedColorScheme::none());
//! assert_eq!(store.state().theme, ThemeName::Light);
//!
//! store.toggle_theme();
//! assert!(store.state().is_dark());
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use app_platform::ColorSchemeSource;
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use tokio::sync::watch;

use crate::theme::{palette_for, Palette, ThemeName};

/// Theme access errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// Theme state was read from a scope with no store attached
    #[error("Theme state accessed outside of a theme store scope")]
    NotInitialized,
}

/// Result type for theme access
pub type Result<T> = std::result::Result<T, ThemeError>;

// =============================================================================
// Snapshot
// =============================================================================

/// Current theme together with its derived palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeSnapshot {
    /// Active theme
    pub theme: ThemeName,
    /// Palette for `theme`
    pub palette: &'static Palette,
}

impl ThemeSnapshot {
    /// Build the snapshot for a theme
    pub fn for_theme(theme: ThemeName) -> Self {
        Self {
            theme,
            palette: palette_for(theme),
        }
    }

    /// Whether the dark theme is active
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}

// =============================================================================
// Store
// =============================================================================

/// Identifier returned by [`ThemeStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener = Arc<dyn Fn(&ThemeSnapshot) + Send + Sync>;

/// Where the initial theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InitialSource {
    Preference,
    Platform,
    Fallback,
}

/// Committed state; `generation` increases with every mutation
#[derive(Debug, Clone, Copy)]
struct Committed {
    snapshot: ThemeSnapshot,
    generation: u64,
}

struct StoreInner {
    state: RwLock<Committed>,
    listeners: Mutex<Vec<(ListenerId, Listener)>>,
    next_listener: AtomicU64,
    signal: watch::Sender<ThemeSnapshot>,
    publish: Mutex<()>,
}

/// Holder of the active theme
///
/// Cloning yields another handle to the same store.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<StoreInner>,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.state().theme)
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ThemeStore {
    /// Create a store with a fixed starting theme
    pub fn new(theme: ThemeName) -> Self {
        let snapshot = ThemeSnapshot::for_theme(theme);
        let (signal, _) = watch::channel(snapshot);

        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(Committed {
                    snapshot,
                    generation: 0,
                }),
                listeners: Mutex::new(Vec::new()),
                next_listener: AtomicU64::new(0),
                signal,
                publish: Mutex::new(()),
            }),
        }
    }

    /// Create a store for a new session
    ///
    /// The starting theme is `preferred` if given, otherwise whatever the
    /// platform reports, otherwise [`ThemeName::Light`].
    pub fn initialize(preferred: Option<ThemeName>, platform: &dyn ColorSchemeSource) -> Self {
        let (theme, source) = match preferred {
            Some(theme) => (theme, InitialSource::Preference),
            None => match platform.color_scheme() {
                Some(scheme) => (ThemeName::from(scheme), InitialSource::Platform),
                None => (ThemeName::default(), InitialSource::Fallback),
            },
        };
        tracing::debug!(theme = %theme, source = ?source, "Theme store initialized");
        Self::new(theme)
    }

    /// Current theme and palette
    pub fn state(&self) -> ThemeSnapshot {
        self.inner.state.read().snapshot
    }

    /// Current theme
    pub fn theme(&self) -> ThemeName {
        self.state().theme
    }

    /// Set the theme and notify dependents
    ///
    /// Setting the theme that is already active still notifies.
    pub fn set_theme(&self, theme: ThemeName) {
        let committed = self.commit(|_| theme);
        tracing::debug!(theme = %theme, "Theme set");
        self.notify(committed);
    }

    /// Switch to the other theme
    pub fn toggle_theme(&self) {
        let committed = self.commit(ThemeName::toggled);
        tracing::debug!(theme = %committed.snapshot.theme, "Theme toggled");
        self.notify(committed);
    }

    /// Register a listener called after every mutation
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&ThemeSnapshot) + Send + Sync + 'static,
    {
        let id = ListenerId(self.inner.next_listener.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was not registered
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    /// Receiver that always holds the latest snapshot
    pub fn watch(&self) -> watch::Receiver<ThemeSnapshot> {
        self.inner.signal.subscribe()
    }

    /// A scope bound to this store
    pub fn scope(&self) -> ThemeScope {
        ThemeScope::new(self.clone())
    }

    fn commit(&self, next: impl FnOnce(ThemeName) -> ThemeName) -> Committed {
        let committed = {
            let mut state = self.inner.state.write();
            state.snapshot = ThemeSnapshot::for_theme(next(state.snapshot.theme));
            state.generation += 1;
            *state
        };
        self.publish();
        committed
    }

    /// Send the latest committed state to the watch signal
    ///
    /// Publishers are serialized and always re-read the state, so the last
    /// send carries the last commit. The state lock is not held while
    /// sending, since receivers may read the store while borrowing.
    fn publish(&self) {
        let _guard = self.inner.publish.lock();
        let latest = self.state();
        self.inner.signal.send_replace(latest);
    }

    fn notify(&self, committed: Committed) {
        // Listeners may call back into the store.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::trace!(count = listeners.len(), "Notifying theme listeners");
        for listener in listeners {
            // A newer mutation has already notified every listener.
            if self.inner.state.read().generation != committed.generation {
                tracing::trace!(
                    generation = committed.generation,
                    "Theme changed during notification, stopping stale delivery"
                );
                break;
            }
            listener(&committed.snapshot);
        }
    }
}

// =============================================================================
// Scope and Context
// =============================================================================

/// Optional handle to a theme store, passed to components
#[derive(Debug, Clone, Default)]
pub struct ThemeScope {
    store: Option<ThemeStore>,
}

impl ThemeScope {
    /// Scope bound to `store`
    pub fn new(store: ThemeStore) -> Self {
        Self { store: Some(store) }
    }

    /// Scope with no store attached
    pub fn detached() -> Self {
        Self { store: None }
    }

    /// Whether a store is attached
    pub fn is_bound(&self) -> bool {
        self.store.is_some()
    }

    /// Current theme, if a store is attached
    pub fn current_theme(&self) -> Option<ThemeName> {
        self.store.as_ref().map(ThemeStore::theme)
    }

    /// Access the theme context
    ///
    /// Fails with [`ThemeError::NotInitialized`] when no store is attached.
    pub fn use_theme(&self) -> Result<ThemeContext> {
        match &self.store {
            Some(store) => Ok(ThemeContext {
                snapshot: store.state(),
                store: store.clone(),
            }),
            None => {
                tracing::warn!("use_theme called without a theme store");
                Err(ThemeError::NotInitialized)
            }
        }
    }
}

impl From<ThemeStore> for ThemeScope {
    fn from(store: ThemeStore) -> Self {
        Self::new(store)
    }
}

/// Callback invoked when a toggle control is activated
pub type ToggleCallback = Arc<dyn Fn() + Send + Sync>;

/// What a consumer sees: the theme at read time plus the store's setters
#[derive(Debug, Clone)]
pub struct ThemeContext {
    snapshot: ThemeSnapshot,
    store: ThemeStore,
}

impl ThemeContext {
    /// Theme at the time the context was read
    pub fn theme(&self) -> ThemeName {
        self.snapshot.theme
    }

    /// Palette at the time the context was read
    pub fn colors(&self) -> &'static Palette {
        self.snapshot.palette
    }

    /// Whether the dark theme was active at read time
    pub fn is_dark(&self) -> bool {
        self.snapshot.is_dark()
    }

    /// Snapshot taken at read time
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.snapshot
    }

    /// Toggle the theme on the underlying store
    pub fn toggle_theme(&self) {
        self.store.toggle_theme();
    }

    /// Set the theme on the underlying store
    pub fn set_theme(&self, theme: ThemeName) {
        self.store.set_theme(theme);
    }

    /// A callback that toggles the underlying store, for wiring into controls
    pub fn toggle_handler(&self) -> ToggleCallback {
        let store = self.store.clone();
        Arc::new(move || store.toggle_theme())
    }
}
