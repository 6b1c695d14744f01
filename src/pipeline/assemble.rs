//! Turns dynamic-interference rows into chart and summary lines.

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use super::classify::{classify_page, ZoneKey};
use crate::config::{ProcessingOptions, SlotPolicy};
use crate::core::{ChartRow, ChartSlot, MotorPosition, Row, RowTable, SummaryRow, ZoneOrder};
use crate::extraction::{collect_zones, decode_root};

/// Counters describing what the assembler did with its input
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyStats {
    pub dynamic_rows: usize,
    pub pairs_processed: usize,
    pub blank_pages: usize,
    pub malformed_roots: usize,
    pub dropped_motors: usize,
}

/// Sorted output of one run, ready to be written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Reports {
    pub chart_rows: Vec<ChartRow>,
    pub summary_rows: Vec<SummaryRow>,
    pub stats: AssemblyStats,
}

/// Hands out chart slots per page according to the slot policy
struct SlotAllocator {
    policy: SlotPolicy,
    used: HashMap<String, usize>,
}

impl SlotAllocator {
    fn new(policy: SlotPolicy) -> Self {
        Self {
            policy,
            used: HashMap::new(),
        }
    }

    fn assign(&mut self, page: &str, position: MotorPosition) -> Option<ChartSlot> {
        match self.policy {
            SlotPolicy::Fixed => Some(match position {
                MotorPosition::First => ChartSlot::ChartLeft,
                MotorPosition::Second => ChartSlot::ChartRight,
            }),
            SlotPolicy::Dynamic => {
                let used = self.used.entry(page.to_string()).or_insert(0);
                let slot = ChartSlot::nth(*used)?;
                *used += 1;
                Some(slot)
            }
        }
    }
}

/// Build chart and summary lines for the given dynamic rows.
///
/// Rows with a blank page or a malformed root are skipped. Both outputs are
/// stably sorted by the page's [`ZoneKey`], so lines on equal keys keep the
/// order in which their rows appear in the sheet.
pub fn assemble(
    table: &RowTable,
    dynamic_rows: &[&Row],
    zones: &ZoneOrder,
    options: &ProcessingOptions,
) -> Reports {
    let mut stats = AssemblyStats {
        dynamic_rows: dynamic_rows.len(),
        ..Default::default()
    };
    let mut slots = SlotAllocator::new(options.slots);
    let mut charts: Vec<(ZoneKey, ChartRow)> = Vec::new();
    let mut summaries: Vec<(ZoneKey, SummaryRow)> = Vec::new();

    for row in dynamic_rows {
        let page = row.page.as_deref().map(str::trim).unwrap_or("");
        if page.is_empty() {
            debug!(root = row.root(), "skipping dynamic row without page");
            stats.blank_pages += 1;
            continue;
        }

        let pair = match decode_root(row.root()) {
            Ok(pair) => pair,
            Err(err) => {
                debug!(page, category = err.category(), error = %err, "skipping dynamic row");
                stats.malformed_roots += 1;
                continue;
            }
        };
        stats.pairs_processed += 1;

        let key = classify_page(page, zones);
        for position in MotorPosition::BOTH {
            let (motor, counterpart) = pair.motor(position);
            let Some(slot) = slots.assign(page, position) else {
                warn!(page, motor, "page already has three charts; skipping motor");
                stats.dropped_motors += 1;
                continue;
            };

            let motor_zones =
                collect_zones(table, &pair.prefix, motor, counterpart, options.markers);
            let (no_interf1, no_interf2) = motor_zones.render(options.no_interf_layout);
            charts.push((
                key,
                ChartRow::doughnut(
                    page,
                    slot,
                    motor,
                    position.function_type(),
                    no_interf1,
                    no_interf2,
                ),
            ));

            if position == MotorPosition::First {
                summaries.push((key, SummaryRow::for_pair(page, &pair)));
            }
        }
    }

    charts.sort_by_key(|(key, _)| *key);
    summaries.sort_by_key(|(key, _)| *key);

    Reports {
        chart_rows: charts.into_iter().map(|(_, row)| row).collect(),
        summary_rows: summaries.into_iter().map(|(_, row)| row).collect(),
        stats,
    }
}
