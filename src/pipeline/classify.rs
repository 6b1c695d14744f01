use serde::Serialize;

use crate::core::ZoneOrder;
use crate::extraction::ordinal::leading_digits;

/// Sequence number used when a page carries no number after its zone name.
pub const DEFAULT_SEQUENCE: u64 = 1;

/// Sort key of an output page: zone position first, then page number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ZoneKey {
    pub zone_index: usize,
    pub sequence: u64,
}

/// Locate a page name within the zone order.
///
/// The first zone (in order) contained in the page name, ignoring case,
/// decides `zone_index`. The sequence is the digit run right after that zone
/// name, optionally behind a single `_` or `-`; each occurrence of the name,
/// overlapping ones included, is tried left to right. Numbers too large for
/// `u64` saturate. Pages matching no zone sort after every known zone.
pub fn classify_page(page: &str, zones: &ZoneOrder) -> ZoneKey {
    let page_lower = page.to_lowercase();
    for (zone_index, zone) in zones.iter().enumerate() {
        let zone_lower = zone.to_lowercase();
        if page_lower.contains(&zone_lower) {
            return ZoneKey {
                zone_index,
                sequence: sequence_after(&page_lower, &zone_lower).unwrap_or(DEFAULT_SEQUENCE),
            };
        }
    }
    ZoneKey {
        zone_index: zones.len(),
        sequence: DEFAULT_SEQUENCE,
    }
}

// Occurrences may overlap, so the scan restarts one character after each hit.
fn sequence_after(page: &str, zone: &str) -> Option<u64> {
    let mut from = 0;
    while let Some(offset) = page[from..].find(zone) {
        let start = from + offset;
        let rest = &page[start + zone.len()..];
        let rest = rest
            .strip_prefix('_')
            .or_else(|| rest.strip_prefix('-'))
            .unwrap_or(rest);
        if let Some(digits) = leading_digits(rest) {
            return Some(digits.parse().unwrap_or(u64::MAX));
        }
        from = start + page[start..].chars().next()?.len_utf8();
    }
    None
}
