//! Service status to badge mapping.

use crate::status::ServiceStatus;

/// Badge colour; [`BadgeColor::class`] is the CSS class suffix the UI uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeColor {
    Green,
    Red,
    Gray,
}

impl BadgeColor {
    pub fn class(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub text: &'static str,
    pub color: BadgeColor,
}

/// Fallback for any status without a dedicated badge.
pub const UNKNOWN_BADGE: Badge = Badge {
    text: "Unknown",
    color: BadgeColor::Gray,
};

pub fn badge_for(status: &ServiceStatus) -> Badge {
    match status {
        ServiceStatus::Active => Badge {
            text: "Active",
            color: BadgeColor::Green,
        },
        ServiceStatus::Inactive => Badge {
            text: "Inactive",
            color: BadgeColor::Red,
        },
        ServiceStatus::Other(_) => UNKNOWN_BADGE,
    }
}

/// Same as [`badge_for`] for a raw wire value.
pub fn badge_for_str(status: &str) -> Badge {
    badge_for(&ServiceStatus::from(status))
}
