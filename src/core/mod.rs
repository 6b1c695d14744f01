pub mod zone_order;

pub use zone_order::{ZoneOrder, DEFAULT_ZONE_ORDER};

use serde::Serialize;

/// One record of the variables sheet.
///
/// Text fields are `None` when the cell was empty. `index` is `None` when the
/// cell was empty or did not hold a number.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    pub root: Option<String>,
    pub extension: Option<String>,
    pub data_type: Option<String>,
    pub object_type: Option<String>,
    pub index: Option<f64>,
    pub page: Option<String>,
}

impl Row {
    pub fn with_root(mut self, root: impl Into<String>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_data_type(mut self, data_type: impl Into<String>) -> Self {
        self.data_type = Some(data_type.into());
        self
    }

    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = Some(object_type.into());
        self
    }

    pub fn with_index(mut self, index: f64) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn root(&self) -> &str {
        self.root.as_deref().unwrap_or("")
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

/// Rows of one sheet, in the order they were read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowTable {
    rows: Vec<Row>,
}

impl RowTable {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Row>> for RowTable {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

impl<'a> IntoIterator for &'a RowTable {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Motor pair decoded from a root such as `MC4_MotorA_MC4_MotorB`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MotorPair {
    pub prefix: String,
    pub motor_a: String,
    pub motor_b: String,
}

impl MotorPair {
    /// Motor at `position` and its counterpart
    pub fn motor(&self, position: MotorPosition) -> (&str, &str) {
        match position {
            MotorPosition::First => (&self.motor_a, &self.motor_b),
            MotorPosition::Second => (&self.motor_b, &self.motor_a),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotorPosition {
    First,
    Second,
}

impl MotorPosition {
    pub const BOTH: [MotorPosition; 2] = [MotorPosition::First, MotorPosition::Second];

    pub fn function_type(self) -> &'static str {
        match self {
            MotorPosition::First => "Axe1_RefPosition",
            MotorPosition::Second => "Axe2_RefPosition",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ChartSlot {
    ChartLeft,
    ChartRight,
    ChartCenter,
}

impl ChartSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartSlot::ChartLeft => "ChartLeft",
            ChartSlot::ChartRight => "ChartRight",
            ChartSlot::ChartCenter => "ChartCenter",
        }
    }

    /// Slot for the n-th chart placed on a page, if the page still has room
    pub fn nth(n: usize) -> Option<Self> {
        match n {
            0 => Some(ChartSlot::ChartLeft),
            1 => Some(ChartSlot::ChartRight),
            2 => Some(ChartSlot::ChartCenter),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the chart configuration file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartRow {
    pub page: String,
    pub slot: ChartSlot,
    pub visible_plc: String,
    pub chart_type: String,
    pub rotation: String,
    pub period: String,
    pub title: String,
    pub function_type: String,
    pub no_interf1: String,
    pub no_interf2: String,
}

impl ChartRow {
    pub fn doughnut(
        page: &str,
        slot: ChartSlot,
        title: &str,
        function_type: &str,
        no_interf1: String,
        no_interf2: String,
    ) -> Self {
        Self {
            page: page.to_string(),
            slot,
            visible_plc: String::new(),
            chart_type: "Doughnut".to_string(),
            rotation: "0".to_string(),
            period: "360".to_string(),
            title: title.to_string(),
            function_type: function_type.to_string(),
            no_interf1,
            no_interf2,
        }
    }

    pub fn fields(&self) -> [&str; 10] {
        [
            &self.page,
            self.slot.as_str(),
            &self.visible_plc,
            &self.chart_type,
            &self.rotation,
            &self.period,
            &self.title,
            &self.function_type,
            &self.no_interf1,
            &self.no_interf2,
        ]
    }
}

/// One line of the interference summary file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub page: String,
    pub text: String,
}

impl SummaryRow {
    pub fn for_pair(page: &str, pair: &MotorPair) -> Self {
        Self {
            page: page.to_string(),
            text: format!("Interferences : {}/{}", pair.motor_a, pair.motor_b),
        }
    }

    pub fn fields(&self) -> [&str; 2] {
        [&self.page, &self.text]
    }
}
