//! Rendering of aggregated totals
//!
//! Rendering lives apart from aggregation so a new output format never
//! requires touching [`AreaAggregator`]. The report holds a reference to an
//! aggregator and nothing else; its output is a pure function of the
//! aggregator's current total.

use crate::domain::aggregate::AreaAggregator;

/// Renders an aggregator's total area in the supported textual forms.
pub struct AreaReport<'a> {
    aggregator: &'a AreaAggregator,
}

impl<'a> AreaReport<'a> {
    /// Create a report over an aggregator.
    pub fn new(aggregator: &'a AreaAggregator) -> Self {
        Self { aggregator }
    }

    /// Plain-text rendering: `area is {total:.2}`.
    pub fn to_text(&self) -> String {
        format!("area is {:.2}", self.aggregator.total_area())
    }

    /// JSON-like rendering: `{area:{total:.2}}`.
    ///
    /// This is the legacy wire shape, reproduced verbatim. The keyless
    /// `area:` makes it invalid JSON; downstream consumers parse the literal
    /// pattern, so it must not be normalised.
    pub fn to_json(&self) -> String {
        format!("{{area:{:.2}}}", self.aggregator.total_area())
    }
}
