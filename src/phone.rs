//! Rwandan mobile numbering shapes.
//!
//! The gateway reaches subscribers on the two national carriers only. This
//! module owns the shape checks; the request builder decides whether a
//! given input gets prefixed or rejected.

/// International prefix for Rwandan subscribers, without the `+`.
pub const COUNTRY_PREFIX: &str = "250";

/// Length of a local subscriber number, carrier prefix included.
const LOCAL_DIGITS: usize = 9;

/// National mobile carriers and the number ranges assigned to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carrier {
    /// 78x / 79x numbers.
    Mtn,
    /// 72x / 73x numbers.
    Airtel,
}

/// Matches a bare nine-digit local number (no country prefix, no leading
/// zero) against the carrier ranges.
pub fn carrier_of(local: &str) -> Option<Carrier> {
    if local.len() != LOCAL_DIGITS || !local.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match &local[..2] {
        "78" | "79" => Some(Carrier::Mtn),
        "72" | "73" => Some(Carrier::Airtel),
        _ => None,
    }
}
