//! Card-type registration — the one-time announcement to the host.
//!
//! Dashboards learn about available widget types through a registration
//! handshake performed during process initialization. The global
//! [`register`] call is guarded so repeated initialization is a no-op.

use std::sync::OnceLock;

/// Metadata announced to the host for one widget type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardDescriptor {
    /// Stable type tag the host stores in its dashboard layouts.
    pub type_tag: &'static str,
    /// Human-readable name shown in the card picker.
    pub name: &'static str,
    /// One-line description shown next to the name.
    pub description: &'static str,
    /// Whether the host should generate a preview thumbnail.
    pub preview: bool,
}

/// Descriptor for the ventilation status card.
pub const VENTILATION_CARD: CardDescriptor = CardDescriptor {
    type_tag: "ventilation-card",
    name: "Ventilation Card",
    description: "Status card for ventilation units",
    preview: true,
};

static REGISTRATION: OnceLock<CardDescriptor> = OnceLock::new();

/// Announce the ventilation card type to the host.
///
/// Only the first call performs the registration; later calls return the
/// same descriptor without side effects.
pub fn register() -> &'static CardDescriptor {
    REGISTRATION.get_or_init(|| {
        tracing::debug!(type_tag = VENTILATION_CARD.type_tag, "card type registered");
        VENTILATION_CARD
    })
}

/// Whether the process-wide registration has happened.
#[must_use]
pub fn is_registered() -> bool {
    REGISTRATION.get().is_some()
}

/// Host-owned registry of widget types, keyed by type tag.
#[derive(Debug, Default)]
pub struct CardRegistry {
    cards: Vec<CardDescriptor>,
}

impl CardRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a widget type. Registering an already-known type tag is a
    /// no-op; returns whether the descriptor was actually added.
    pub fn register(&mut self, descriptor: CardDescriptor) -> bool {
        if self.contains(descriptor.type_tag) {
            return false;
        }
        self.cards.push(descriptor);
        true
    }

    /// Whether a type tag is known.
    #[must_use]
    pub fn contains(&self, type_tag: &str) -> bool {
        self.cards.iter().any(|card| card.type_tag == type_tag)
    }

    /// All registered widget types, in registration order.
    #[must_use]
    pub fn cards(&self) -> &[CardDescriptor] {
        &self.cards
    }
}
