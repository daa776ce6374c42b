//! The status widget use-case: configure once, re-render per host tick.

use ventcard_domain::config::CardConfig;
use ventcard_domain::error::CardError;
use ventcard_domain::id::WidgetId;
use ventcard_domain::key::SensorKeySet;
use ventcard_domain::labels::{Labels, Language};
use ventcard_domain::metric::Metric;

use crate::ports::StateView;
use crate::view::{CARD_TITLE, CardView};

/// Relative vertical footprint reported to the host's layout engine.
pub const LAYOUT_SIZE_HINT: u8 = 3;

/// A ventilation status card.
///
/// Two lifecycle phases: unconfigured after construction, configured for
/// life after a successful [`configure`](Self::configure). Rendering is
/// driven entirely by the host calling
/// [`apply_snapshot`](Self::apply_snapshot) on its refresh cadence.
#[derive(Debug, Default)]
pub struct StatusWidget {
    id: WidgetId,
    config: Option<CardConfig>,
    view: Option<CardView>,
    builds: u32,
}

impl StatusWidget {
    /// Create an unconfigured widget.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier of this widget instance.
    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Whether [`configure`](Self::configure) has succeeded.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    /// Store the host-supplied configuration. No rendering happens yet.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Config`] when the configuration violates its
    /// invariants (empty `entity`).
    pub fn configure(&mut self, config: CardConfig) -> Result<(), CardError> {
        config.validate()?;
        tracing::debug!(widget = %self.id, entity = %config.entity, "card configured");
        self.config = Some(config);
        Ok(())
    }

    /// Render the current snapshot into the card.
    ///
    /// Builds the view on the first call, then only patches text. Every
    /// caption is overwritten (the language may change between calls),
    /// the key set is re-derived from the stored configuration, and each
    /// of the eight readings is looked up fresh — missing or unset
    /// entries degrade to a placeholder without failing the render.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::NotConfigured`] when called before a
    /// successful [`configure`](Self::configure).
    pub fn apply_snapshot(
        &mut self,
        snapshot: &impl StateView,
        language: Option<&str>,
    ) -> Result<(), CardError> {
        let config = self.config.as_ref().ok_or(CardError::NotConfigured)?;
        let labels = Labels::for_language(Language::from_code(language));
        let keys = SensorKeySet::derive(&config.entity);

        if self.view.is_none() {
            self.builds += 1;
        }
        let view = self.view.get_or_insert_with(|| CardView::build(CARD_TITLE));

        view.set_labels(labels);
        for metric in Metric::ALL {
            let key = keys.key(metric);
            let reading = snapshot
                .sensor(&key)
                .and_then(|value| value.state.as_ref());
            view.set_value(metric, metric.format(reading));
        }

        tracing::trace!(widget = %self.id, stem = keys.stem(), "card refreshed");
        Ok(())
    }

    /// The rendered view, once the first snapshot has been applied.
    #[must_use]
    pub fn view(&self) -> Option<&CardView> {
        self.view.as_ref()
    }

    /// How many times the view structure has been built.
    #[must_use]
    pub fn build_count(&self) -> u32 {
        self.builds
    }

    /// Relative vertical footprint for the host's layout engine.
    #[must_use]
    pub fn layout_size_hint(&self) -> u8 {
        LAYOUT_SIZE_HINT
    }
}
