use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EQPoint {
    pub ra_deg: f64,
    pub dec_deg: f64,
}

/// Edge of the image window that tickmarks are planned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Bottom,
    Top,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Bottom, Side::Top, Side::Left, Side::Right];

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "bottom" => Some(Self::Bottom),
            "top" => Some(Self::Top),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    /// Bottom/top edges run along x and are labeled in RA; left/right run
    /// along y and are labeled in Dec.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Bottom | Self::Top)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bottom => "bottom",
            Self::Top => "top",
            Self::Left => "left",
            Self::Right => "right",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordKind {
    Ra,
    Dec,
}

/// Unit ticks are labeled in: sexagesimal, decimal degrees, or angular
/// offsets from the reference position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelUnit {
    Hms,
    Deg,
    ArcsecOffset,
    ArcminOffset,
    DegOffset,
}

impl LabelUnit {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "hms" => Some(Self::Hms),
            "deg" => Some(Self::Deg),
            "so" => Some(Self::ArcsecOffset),
            "mo" => Some(Self::ArcminOffset),
            "do" => Some(Self::DegOffset),
            _ => None,
        }
    }

    pub fn is_offset(self) -> bool {
        matches!(self, Self::ArcsecOffset | Self::ArcminOffset | Self::DegOffset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Tan,
    Linear,
}

impl Projection {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "tan" => Some(Self::Tan),
            "linear" => Some(Self::Linear),
            _ => None,
        }
    }
}

pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * 15.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;

    #[test]
    fn side_from_str_recognizes_known_values() {
        assert_eq!(Side::from_str("bottom"), Some(Side::Bottom));
        assert_eq!(Side::from_str("top"), Some(Side::Top));
        assert_eq!(Side::from_str("left"), Some(Side::Left));
        assert_eq!(Side::from_str("right"), Some(Side::Right));
    }

    #[test]
    fn side_from_str_is_case_sensitive_and_handles_unknown() {
        assert_eq!(Side::from_str("Bottom"), None);
        assert_eq!(Side::from_str("north"), None);
        assert_eq!(Side::from_str(""), None);
    }

    #[test]
    fn side_display_round_trips_through_from_str() {
        for side in Side::ALL {
            assert_eq!(Side::from_str(&side.to_string()), Some(side));
        }
    }

    #[test]
    fn horizontal_edges_are_bottom_and_top() {
        assert!(Side::Bottom.is_horizontal());
        assert!(Side::Top.is_horizontal());
        assert!(!Side::Left.is_horizontal());
        assert!(!Side::Right.is_horizontal());
    }

    #[test]
    fn label_unit_from_str_recognizes_known_values() {
        assert_eq!(LabelUnit::from_str("hms"), Some(LabelUnit::Hms));
        assert_eq!(LabelUnit::from_str("deg"), Some(LabelUnit::Deg));
        assert_eq!(LabelUnit::from_str("so"), Some(LabelUnit::ArcsecOffset));
        assert_eq!(LabelUnit::from_str("mo"), Some(LabelUnit::ArcminOffset));
        assert_eq!(LabelUnit::from_str("do"), Some(LabelUnit::DegOffset));
        assert_eq!(LabelUnit::from_str("hours"), None);
    }

    #[test]
    fn offset_units_are_flagged() {
        assert!(LabelUnit::ArcsecOffset.is_offset());
        assert!(LabelUnit::ArcminOffset.is_offset());
        assert!(LabelUnit::DegOffset.is_offset());
        assert!(!LabelUnit::Hms.is_offset());
        assert!(!LabelUnit::Deg.is_offset());
    }

    #[test]
    fn projection_from_str_recognizes_known_values() {
        assert_eq!(Projection::from_str("tan"), Some(Projection::Tan));
        assert_eq!(Projection::from_str("linear"), Some(Projection::Linear));
        assert_eq!(Projection::from_str("gnomonic"), None);
    }

    #[test]
    fn hours_to_degrees_basic_and_negative() {
        assert!(approx(hours_to_degrees(0.0), 0.0, 1e-12));
        assert!(approx(hours_to_degrees(1.0), 15.0, 1e-12));
        assert!(approx(hours_to_degrees(6.5), 97.5, 1e-12));
        assert!(approx(hours_to_degrees(-2.0), -30.0, 1e-12));
    }
}
