//! Per-kind render styles
//!
//! One lookup keyed by the same tag the behavior policy uses. Kinds without
//! a dedicated entry share the generic hazard style, so an unclassified
//! hazard still renders instead of failing.

use crate::sim::ObstacleKind;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Palette shared across entities
pub const BACKGROUND: Rgb = Rgb(0x0f, 0x17, 0x2a);
pub const PLATFORM_BODY: Rgb = Rgb(0x37, 0x41, 0x51);
pub const PLATFORM_PHANTOM: Rgb = Rgb(0x4b, 0x55, 0x63);
pub const PLAYER_BODY: Rgb = Rgb(0x3b, 0x82, 0xf6);
pub const GOAL_REAL: Rgb = Rgb(0x05, 0x96, 0x69);
pub const GOAL_DECOY: Rgb = Rgb(0xdc, 0x26, 0x26);
pub const GOAL_POST: Rgb = Rgb(0x6b, 0x72, 0x80);
pub const LABEL: Rgb = Rgb(0xff, 0xff, 0xff);

/// How to draw one hazard kind
#[derive(Debug, Clone, Copy)]
pub struct HazardStyle {
    pub body: Rgb,
    pub label: &'static str,
}

const GENERIC: HazardStyle = HazardStyle {
    body: Rgb(0xdc, 0x26, 0x26),
    label: "OBS",
};

/// Style lookup for a hazard kind, defaulting to the generic entry
pub fn hazard_style(kind: ObstacleKind) -> HazardStyle {
    use ObstacleKind::*;
    match kind {
        Rejection => HazardStyle {
            body: Rgb(0xdc, 0x26, 0x26),
            label: "REJ",
        },
        Deadline => HazardStyle {
            body: Rgb(0xea, 0x58, 0x0c),
            label: "DL",
        },
        Requirement => HazardStyle {
            body: Rgb(0x7c, 0x2d, 0x12),
            label: "REQ",
        },
        Email => HazardStyle {
            body: Rgb(0x3b, 0x82, 0xf6),
            label: "MAIL",
        },
        Spam => HazardStyle {
            body: Rgb(0xef, 0x44, 0x44),
            label: "SPAM",
        },
        Interview => HazardStyle {
            body: Rgb(0x8b, 0x5c, 0xf6),
            label: "INT",
        },
        Reference => HazardStyle {
            body: Rgb(0x06, 0xb6, 0xd4),
            label: "REF",
        },
        Teleport => HazardStyle {
            body: Rgb(0xa8, 0x55, 0xf7),
            label: "TP",
        },
        Laser => HazardStyle {
            body: Rgb(0xef, 0x44, 0x44),
            label: "LAS",
        },
        Bomb => HazardStyle {
            body: Rgb(0xf5, 0x9e, 0x0b),
            label: "BMB",
        },
        Quicksand => HazardStyle {
            body: Rgb(0x92, 0x40, 0x0e),
            label: "QS",
        },
        Lightning => HazardStyle {
            body: Rgb(0xea, 0xb3, 0x08),
            label: "LTG",
        },
        Portal => HazardStyle {
            body: Rgb(0x8b, 0x5c, 0xf6),
            label: "PRT",
        },
        GravityWell => HazardStyle {
            body: Rgb(0x1f, 0x29, 0x37),
            label: "GW",
        },
        Virus => HazardStyle {
            body: Rgb(0x10, 0xb9, 0x81),
            label: "VIR",
        },
        Spy => HazardStyle {
            body: Rgb(0x37, 0x41, 0x51),
            label: "SPY",
        },
        DataBreach => HazardStyle {
            body: Rgb(0xf4, 0x3f, 0x5e),
            label: "DB",
        },
        Corruption => HazardStyle {
            body: Rgb(0x7c, 0x2d, 0x12),
            label: "COR",
        },
        Boss => HazardStyle {
            body: Rgb(0x99, 0x1b, 0x1b),
            label: "CEO",
        },
        #[allow(unreachable_patterns)]
        _ => GENERIC,
    }
}
