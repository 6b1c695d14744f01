//! Switches for the spreadsheet conventions the extractor understands.
//!
//! Two marker naming schemes and two chart placement schemes exist in the
//! field. Neither is canonical, so each is selected explicitly.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How start/end no-interference marker rows are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MarkerConvention {
    /// Any label starting with `StartNo`/`EndNo`; ordinal read from a
    /// `1st`/`2nd`/... token, defaulting to 1
    #[default]
    Generic,
    /// Only `StartNoInterference_`/`EndNoInterference_` (ordinal 1) and
    /// `StartNoInterference2nd_`/`EndNoInterference2nd_` (ordinal 2)
    Literal,
}

/// How motors are placed into chart slots on a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SlotPolicy {
    /// Per-page counter over ChartLeft, ChartRight, ChartCenter; extra motors are dropped
    #[default]
    Dynamic,
    /// First motor on ChartLeft, second motor on ChartRight
    Fixed,
}

/// How ordinal-1 and ordinal-2 tags are spread over the NoInterf columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NoInterfLayout {
    /// Both ordinals in NoInterf1, NoInterf2 left empty
    #[default]
    Merged,
    /// Ordinal 1 in NoInterf1, ordinal 2 in NoInterf2
    Split,
}

/// Convention switches for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessingOptions {
    #[serde(default)]
    pub markers: MarkerConvention,
    #[serde(default)]
    pub slots: SlotPolicy,
    #[serde(default)]
    pub no_interf_layout: NoInterfLayout,
}

impl ProcessingOptions {
    pub fn with_markers(mut self, markers: MarkerConvention) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_slots(mut self, slots: SlotPolicy) -> Self {
        self.slots = slots;
        self
    }

    pub fn with_no_interf_layout(mut self, layout: NoInterfLayout) -> Self {
        self.no_interf_layout = layout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_generic_dynamic_merged() {
        let options = ProcessingOptions::default();
        assert_eq!(options.markers, MarkerConvention::Generic);
        assert_eq!(options.slots, SlotPolicy::Dynamic);
        assert_eq!(options.no_interf_layout, NoInterfLayout::Merged);
    }

    #[test]
    fn test_lowercase_names_in_toml() {
        let options: ProcessingOptions =
            toml::from_str("markers = \"literal\"\nslots = \"fixed\"\nno_interf_layout = \"split\"")
                .unwrap();
        assert_eq!(
            options,
            ProcessingOptions::default()
                .with_markers(MarkerConvention::Literal)
                .with_slots(SlotPolicy::Fixed)
                .with_no_interf_layout(NoInterfLayout::Split)
        );
    }
}
