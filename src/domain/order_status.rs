//! Order lifecycle status.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status of a delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Being prepared by the restaurant.
    Hazirlaniyor,
    /// Out for delivery with a courier.
    Yolda,
    /// Delivered to the customer.
    TeslimEdildi,
    /// Cancelled.
    IptalEdildi,
}

impl OrderStatus {
    /// Returns the wire string for this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hazirlaniyor => "hazirlaniyor",
            Self::Yolda => "yolda",
            Self::TeslimEdildi => "teslim-edildi",
            Self::IptalEdildi => "iptal-edildi",
        }
    }

    /// Parses a wire string, returning `None` for unknown statuses.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "hazirlaniyor" => Some(Self::Hazirlaniyor),
            "yolda" => Some(Self::Yolda),
            "teslim-edildi" => Some(Self::TeslimEdildi),
            "iptal-edildi" => Some(Self::IptalEdildi),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_round_trip() {
        for status in [
            OrderStatus::Hazirlaniyor,
            OrderStatus::Yolda,
            OrderStatus::TeslimEdildi,
            OrderStatus::IptalEdildi,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(OrderStatus::parse("kargoda"), None);
        assert_eq!(OrderStatus::parse(""), None);
    }

    #[test]
    fn serde_matches_wire_strings() {
        let json = serde_json::to_string(&OrderStatus::TeslimEdildi).unwrap_or_default();
        assert_eq!(json, "\"teslim-edildi\"");
    }
}
