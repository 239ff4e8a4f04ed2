//! Fixed-width time string codec.
//!
//! The encoder turns duration values and absolute instants into the four
//! on-disk string shapes; the decoder parses them back. Both sides are pure
//! functions with per-value missing semantics: a bad cell becomes `None`,
//! never an error that could abort a column or a file.
//!
//! Which shape applies to which column is the routing table's decision
//! (see [`crate::routing`]); the decoder's shape-sniffing priority order
//! only matters for standalone use.

mod decode;
mod encode;

pub use decode::{IsoInstant, decode_duration, decode_instant, decode_numeric_seconds};
pub use encode::{
    encode_seconds, format_hhmmss, format_hhmmssms, format_instant_hhmmss,
    format_instant_hhmmssms, format_mmssms,
};
