use super::ordinal::ordinal_of;
use crate::config::MarkerConvention;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerKind {
    Start,
    End,
}

/// A recognized no-interference boundary label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    pub kind: MarkerKind,
    pub ordinal: u32,
}

const GENERIC_START: &str = "StartNo";
const GENERIC_END: &str = "EndNo";

const LITERAL_MARKERS: [(&str, MarkerKind, u32); 4] = [
    ("StartNoInterference2nd_", MarkerKind::Start, 2),
    ("StartNoInterference_", MarkerKind::Start, 1),
    ("EndNoInterference2nd_", MarkerKind::End, 2),
    ("EndNoInterference_", MarkerKind::End, 1),
];

/// Classify an extension label under the given naming convention
pub fn classify_marker(convention: MarkerConvention, label: &str) -> Option<Marker> {
    match convention {
        MarkerConvention::Generic => {
            let kind = if label.starts_with(GENERIC_START) {
                MarkerKind::Start
            } else if label.starts_with(GENERIC_END) {
                MarkerKind::End
            } else {
                return None;
            };
            Some(Marker {
                kind,
                ordinal: ordinal_of(label),
            })
        }
        MarkerConvention::Literal => LITERAL_MARKERS
            .iter()
            .find(|(prefix, _, _)| label.starts_with(prefix))
            .map(|&(_, kind, ordinal)| Marker { kind, ordinal }),
    }
}
