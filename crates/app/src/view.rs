//! The card's owned render target.
//!
//! The structure is built exactly once, on the first render; afterwards
//! only the text content of the slots changes. The widget owns this
//! subtree for its whole lifetime and never touches anything outside it.

use std::fmt;

use ventcard_domain::labels::Labels;
use ventcard_domain::metric::Metric;

/// Title shown in the card header.
pub const CARD_TITLE: &str = "Ventilation";

/// A single mutable text slot in the card subtree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSlot {
    text: String,
}

impl TextSlot {
    fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Current text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Fixed-layout card view: a header with the unit's mode, three
/// temperature slots, and four stat slots, each with its caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    title: TextSlot,
    labels: [TextSlot; 7],
    values: [TextSlot; 8],
}

/// Position of a metric's value slot, in card order.
fn value_index(metric: Metric) -> usize {
    Metric::ALL
        .iter()
        .position(|m| *m == metric)
        .unwrap_or_default()
}

/// Position of a metric's caption slot. The mode slot has no caption.
fn label_index(metric: Metric) -> Option<usize> {
    value_index(metric).checked_sub(1)
}

impl CardView {
    /// Build the static structure. Called once per widget lifetime.
    pub(crate) fn build(title: &str) -> Self {
        let mut slot = TextSlot::default();
        slot.set(title);
        Self {
            title: slot,
            labels: std::array::from_fn(|_| TextSlot::default()),
            values: std::array::from_fn(|_| TextSlot::default()),
        }
    }

    /// Number of text slots in the subtree; fixed at build time.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        1 + self.labels.len() + self.values.len()
    }

    /// Overwrite every caption from the given label set.
    pub(crate) fn set_labels(&mut self, labels: &Labels) {
        for metric in Metric::ALL {
            if let (Some(index), Some(caption)) = (label_index(metric), labels.for_metric(metric))
            {
                self.labels[index].set(caption);
            }
        }
    }

    /// Patch one value slot.
    pub(crate) fn set_value(&mut self, metric: Metric, text: String) {
        self.values[value_index(metric)].set(text);
    }

    /// Card title text.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.text()
    }

    /// Displayed value for a metric.
    #[must_use]
    pub fn value(&self, metric: Metric) -> &str {
        self.values[value_index(metric)].text()
    }

    /// Displayed caption for a metric, if its slot carries one.
    #[must_use]
    pub fn label(&self, metric: Metric) -> Option<&str> {
        label_index(metric).map(|index| self.labels[index].text())
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} [{}]",
            self.title.text(),
            self.value(Metric::Mode)
        )?;
        writeln!(
            f,
            "{}: {}  {}: {}  {}: {}",
            self.label(Metric::SupplyTemperature).unwrap_or_default(),
            self.value(Metric::SupplyTemperature),
            self.label(Metric::ExtractTemperature).unwrap_or_default(),
            self.value(Metric::ExtractTemperature),
            self.label(Metric::OutdoorTemperature).unwrap_or_default(),
            self.value(Metric::OutdoorTemperature),
        )?;
        writeln!(
            f,
            "{}: {}  {}: {}",
            self.label(Metric::SupplyFan).unwrap_or_default(),
            self.value(Metric::SupplyFan),
            self.label(Metric::FilterContamination).unwrap_or_default(),
            self.value(Metric::FilterContamination),
        )?;
        writeln!(
            f,
            "{}: {}  {}: {}",
            self.label(Metric::PowerConsumption).unwrap_or_default(),
            self.value(Metric::PowerConsumption),
            self.label(Metric::HeatRecoveryPower).unwrap_or_default(),
            self.value(Metric::HeatRecoveryPower),
        )
    }
}

#[cfg(test)]
mod tests {
    use ventcard_domain::labels::Language;

    use super::*;

    #[test]
    fn should_start_with_empty_slots_except_title() {
        let view = CardView::build(CARD_TITLE);
        assert_eq!(view.title(), "Ventilation");
        assert_eq!(view.value(Metric::Mode), "");
        assert_eq!(view.label(Metric::SupplyTemperature), Some(""));
    }

    #[test]
    fn should_count_sixteen_slots() {
        let view = CardView::build(CARD_TITLE);
        assert_eq!(view.slot_count(), 16);
    }

    #[test]
    fn should_not_grow_when_patched() {
        let mut view = CardView::build(CARD_TITLE);
        view.set_labels(Labels::for_language(Language::En));
        view.set_value(Metric::SupplyFan, "60%".to_string());
        assert_eq!(view.slot_count(), 16);
    }

    #[test]
    fn should_overwrite_captions_from_label_set() {
        let mut view = CardView::build(CARD_TITLE);
        view.set_labels(Labels::for_language(Language::Pl));
        assert_eq!(view.label(Metric::SupplyFan), Some("Wentylator"));
        view.set_labels(Labels::for_language(Language::En));
        assert_eq!(view.label(Metric::SupplyFan), Some("Fan"));
    }

    #[test]
    fn should_render_deterministic_text() {
        let mut view = CardView::build(CARD_TITLE);
        view.set_labels(Labels::for_language(Language::En));
        view.set_value(Metric::Mode, "NORMAL".to_string());
        view.set_value(Metric::SupplyTemperature, "21.5\u{b0}C".to_string());
        view.set_value(Metric::ExtractTemperature, "?\u{b0}C".to_string());
        view.set_value(Metric::OutdoorTemperature, "?\u{b0}C".to_string());
        view.set_value(Metric::SupplyFan, "60%".to_string());
        view.set_value(Metric::FilterContamination, "?%".to_string());
        view.set_value(Metric::PowerConsumption, "120W".to_string());
        view.set_value(Metric::HeatRecoveryPower, "?W".to_string());

        let rendered = view.to_string();
        assert!(rendered.starts_with("Ventilation [NORMAL]\n"));
        assert!(rendered.contains("Supply: 21.5\u{b0}C"));
        assert!(rendered.contains("Fan: 60%  Filter: ?%"));
        assert!(rendered.contains("Power: 120W  Recovery: ?W"));
    }
}
