use std::cmp::Ordering;

use super::markers::{classify_marker, MarkerKind};
use super::tags::{join_tags, plc_tag};
use crate::config::{MarkerConvention, NoInterfLayout};
use crate::core::{Row, RowTable};

/// Ordinals that make it into the report; later zones are ignored.
const REPORTED_ORDINALS: [u32; 2] = [1, 2];

/// Start/end tag pairs of a motor's first and second no-interference zones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoInterferenceZones {
    pub first: Vec<(String, String)>,
    pub second: Vec<(String, String)>,
}

impl NoInterferenceZones {
    /// Render the `NoInterf1`/`NoInterf2` column values
    pub fn render(&self, layout: NoInterfLayout) -> (String, String) {
        match layout {
            NoInterfLayout::Merged => (
                flatten(self.first.iter().chain(self.second.iter())),
                String::new(),
            ),
            NoInterfLayout::Split => (flatten(self.first.iter()), flatten(self.second.iter())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }
}

fn flatten<'a, I>(pairs: I) -> String
where
    I: Iterator<Item = &'a (String, String)>,
{
    join_tags(pairs.flat_map(|(start, end)| [start.as_str(), end.as_str()]))
}

/// Collect the no-interference zones of `motor` against `counterpart`.
///
/// Candidate rows belong to `<prefix>_<motor>` (or the same root with the
/// motor's underscores removed) and mention the counterpart in their label.
/// Within each ordinal, starts and ends are ordered by `Index` and paired
/// positionally; surplus markers on either side are discarded.
pub fn collect_zones(
    table: &RowTable,
    prefix: &str,
    motor: &str,
    counterpart: &str,
    convention: MarkerConvention,
) -> NoInterferenceZones {
    let root_with = format!("{}_{}", prefix, motor);
    let root_without = format!("{}_{}", prefix, motor.replace('_', ""));

    let mut starts: Vec<(u32, &Row)> = Vec::new();
    let mut ends: Vec<(u32, &Row)> = Vec::new();

    for row in table {
        let root = row.root();
        if root != root_with && root != root_without {
            continue;
        }
        let Some(label) = row.extension() else {
            continue;
        };
        if !label.contains(counterpart) {
            continue;
        }
        match classify_marker(convention, label) {
            Some(marker) if marker.kind == MarkerKind::Start => starts.push((marker.ordinal, row)),
            Some(marker) => ends.push((marker.ordinal, row)),
            None => {}
        }
    }

    let mut zones = NoInterferenceZones::default();
    for ordinal in REPORTED_ORDINALS {
        let pairs = pair_markers(&starts, &ends, ordinal);
        match ordinal {
            1 => zones.first = pairs,
            _ => zones.second = pairs,
        }
    }
    zones
}

fn pair_markers(starts: &[(u32, &Row)], ends: &[(u32, &Row)], ordinal: u32) -> Vec<(String, String)> {
    let starts = rows_for_ordinal(starts, ordinal);
    let ends = rows_for_ordinal(ends, ordinal);
    starts
        .iter()
        .zip(ends.iter())
        .map(|(start, end)| (row_tag(start), row_tag(end)))
        .collect()
}

fn rows_for_ordinal<'a>(markers: &[(u32, &'a Row)], ordinal: u32) -> Vec<&'a Row> {
    let mut rows: Vec<&Row> = markers
        .iter()
        .filter(|(o, _)| *o == ordinal)
        .map(|(_, row)| *row)
        .collect();
    rows.sort_by(|a, b| compare_index(a.index, b.index));
    rows
}

/// Ascending by index; rows without an index keep their order after the rest
fn compare_index(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn row_tag(row: &Row) -> String {
    plc_tag(
        row.object_type.as_deref(),
        row.extension().unwrap_or(""),
        row.index,
    )
}
