//! Decoding of motor pairs and no-interference markers out of sheet labels.

pub mod decoder;
pub mod markers;
pub mod ordinal;
pub mod tags;
pub mod zones;

pub use decoder::decode_root;
pub use markers::{classify_marker, Marker, MarkerKind};
pub use ordinal::{ordinal_of, DEFAULT_ORDINAL};
pub use tags::{join_tags, plc_tag};
pub use zones::{collect_zones, NoInterferenceZones};
