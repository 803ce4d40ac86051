//! The UI store: uninitialized → active
//!
//! A read-mostly singleton. Mutations happen only on discrete, infrequent
//! events — a resize, a theme toggle, a font-scale change — and each one
//! replaces the whole context atomically behind the lock. Readers clone a
//! fresh immutable snapshot and resolve against it for the rest of their
//! render pass.

use app_platform::{DisplayEvent, DisplayMetrics, DisplaySource};
use app_ui::{ThemeVariant, UiContext};
use parking_lot::RwLock;
use tracing::info;

/// Errors raised by the UI store state machine
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// A read or mutation happened before `init`
    #[error("UI store has not been initialized")]
    NotInitialized,

    /// `init` was called twice
    #[error("UI store is already initialized")]
    AlreadyInitialized,
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Process-wide holder of the current [`UiContext`]
///
/// State machine: `uninitialized → active`. Every transition is
/// synchronous; there is no intermediate state a consumer can observe.
#[derive(Debug, Default)]
pub struct UiStore {
    inner: RwLock<Option<UiContext>>,
}

impl UiStore {
    /// Create an uninitialized store
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to active with the startup display snapshot and theme
    pub fn init(&self, metrics: DisplayMetrics, variant: ThemeVariant) -> Result<()> {
        let mut guard = self.inner.write();
        if guard.is_some() {
            return Err(StoreError::AlreadyInitialized);
        }
        info!(
            %variant,
            width = metrics.width(),
            height = metrics.height(),
            platform = %metrics.platform(),
            "ui store initialized"
        );
        *guard = Some(UiContext::new(metrics, variant));
        Ok(())
    }

    /// Initialize by querying the host display source
    pub fn init_from_source(&self, source: &dyn DisplaySource, variant: ThemeVariant) -> Result<()> {
        self.init(DisplayMetrics::from_raw(source.current()), variant)
    }

    /// Whether the store has been initialized
    pub fn is_active(&self) -> bool {
        self.inner.read().is_some()
    }

    /// A fresh immutable snapshot of the current context
    pub fn snapshot(&self) -> Result<UiContext> {
        self.inner
            .read()
            .as_ref()
            .cloned()
            .ok_or(StoreError::NotInitialized)
    }

    /// The current theme variant
    pub fn theme_variant(&self) -> Result<ThemeVariant> {
        Ok(self.snapshot()?.theme().variant)
    }

    /// Switch to a specific theme variant
    pub fn set_theme(&self, variant: ThemeVariant) -> Result<()> {
        self.update(|ctx| {
            info!(from = %ctx.theme().variant, to = %variant, "theme changed");
            ctx.with_theme(variant)
        })
    }

    /// Flip between light and dark, returning the new variant
    pub fn toggle_theme(&self) -> Result<ThemeVariant> {
        let mut toggled = ThemeVariant::default();
        self.update(|ctx| {
            toggled = ctx.theme().variant.toggled();
            info!(to = %toggled, "theme toggled");
            ctx.with_theme(toggled)
        })?;
        Ok(toggled)
    }

    /// Store the user's font-scale preference
    pub fn set_font_scale(&self, font_scale: f32) -> Result<()> {
        self.update(|ctx| ctx.with_font_scale(font_scale))
    }

    /// Recompute the context for a display event
    pub fn apply_display_event(&self, event: DisplayEvent) -> Result<()> {
        self.update(|ctx| {
            let next = ctx.apply(event);
            info!(
                ?event,
                breakpoint = %next.breakpoint(),
                "display event applied"
            );
            next
        })
    }

    fn update(&self, f: impl FnOnce(&UiContext) -> UiContext) -> Result<()> {
        let mut guard = self.inner.write();
        match guard.as_ref() {
            Some(ctx) => {
                let next = f(ctx);
                *guard = Some(next);
                Ok(())
            }
            None => Err(StoreError::NotInitialized),
        }
    }
}
