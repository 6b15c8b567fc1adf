use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

/// Physical orientation of a camera image or display surface.
///
/// The four variants form a cycle. Stepping forward in [`Orientation::ALL`]
/// order is a 90° clockwise turn of the physical frame, and the fourth step
/// returns to the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    LandscapeLeft,
    Portrait,
    LandscapeRight,
    PortraitUpsideDown,
}

impl Orientation {
    /// All orientations in cyclic (clockwise) order; the position of each
    /// variant is its rotation index.
    pub const ALL: [Orientation; 4] = [
        Orientation::LandscapeLeft,
        Orientation::Portrait,
        Orientation::LandscapeRight,
        Orientation::PortraitUpsideDown,
    ];

    /// Number of quarter turns from `LandscapeLeft`, in `0..4`.
    #[inline]
    pub fn rotation_index(self) -> i32 {
        match self {
            Orientation::LandscapeLeft => 0,
            Orientation::Portrait => 1,
            Orientation::LandscapeRight => 2,
            Orientation::PortraitUpsideDown => 3,
        }
    }

    /// Inverse of [`Orientation::rotation_index`], reduced mod 4 so negative and
    /// large step counts wrap around the cycle.
    pub fn from_rotation_index(index: i32) -> Orientation {
        Self::ALL[index.rem_euclid(4) as usize]
    }

    /// The orientation one quarter turn clockwise from `self`.
    #[inline]
    pub fn rotated_cw(self) -> Orientation {
        Self::from_rotation_index(self.rotation_index() + 1)
    }

    #[inline]
    pub fn is_landscape(self) -> bool {
        matches!(
            self,
            Orientation::LandscapeLeft | Orientation::LandscapeRight
        )
    }

    #[inline]
    pub fn is_portrait(self) -> bool {
        !self.is_landscape()
    }

    fn name(self) -> &'static str {
        match self {
            Orientation::LandscapeLeft => "landscape_left",
            Orientation::Portrait => "portrait",
            Orientation::LandscapeRight => "landscape_right",
            Orientation::PortraitUpsideDown => "portrait_upside_down",
        }
    }
}

/// Signed rotation, in radians, that takes orientation `from` to `to`.
///
/// The result is `(index(to) - index(from)) * 90°`, so it lies in
/// `[-3π/2, 3π/2]` and is antisymmetric in its arguments.
#[inline]
pub fn get_radians(from: Orientation, to: Orientation) -> f64 {
    f64::from(to.rotation_index() - from.rotation_index()) * FRAC_PI_2
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown orientation `{0}` (expected landscape_left, portrait, landscape_right or portrait_upside_down)")]
pub struct OrientationParseError(pub String);

impl FromStr for Orientation {
    type Err = OrientationParseError;

    /// Accepts the snake_case names; `-` may be used in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|o| o.name() == key)
            .ok_or_else(|| OrientationParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn rotation_index_matches_cyclic_order() {
        for (i, o) in Orientation::ALL.iter().enumerate() {
            assert_eq!(o.rotation_index(), i as i32);
            assert_eq!(Orientation::from_rotation_index(i as i32), *o);
        }
    }

    #[test]
    fn from_rotation_index_wraps() {
        assert_eq!(Orientation::from_rotation_index(4), Orientation::LandscapeLeft);
        assert_eq!(
            Orientation::from_rotation_index(-1),
            Orientation::PortraitUpsideDown
        );
        assert_eq!(Orientation::from_rotation_index(9), Orientation::Portrait);
    }

    #[test]
    fn four_clockwise_steps_return_to_start() {
        for o in Orientation::ALL {
            let back = o.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
            assert_eq!(back, o);
        }
    }

    #[test]
    fn landscape_and_portrait_partition_the_set() {
        let landscape: Vec<_> = Orientation::ALL
            .into_iter()
            .filter(|o| o.is_landscape())
            .collect();
        assert_eq!(
            landscape,
            vec![Orientation::LandscapeLeft, Orientation::LandscapeRight]
        );
        assert!(Orientation::Portrait.is_portrait());
        assert!(Orientation::PortraitUpsideDown.is_portrait());
    }

    #[test]
    fn radians_between_known_pairs() {
        use super::Orientation::*;
        assert_eq!(get_radians(Portrait, Portrait), 0.0);
        assert!((get_radians(LandscapeLeft, Portrait) - PI / 2.0).abs() < 1e-12);
        assert!((get_radians(Portrait, LandscapeLeft) + PI / 2.0).abs() < 1e-12);
        assert!((get_radians(LandscapeLeft, PortraitUpsideDown) - 1.5 * PI).abs() < 1e-12);
        assert!((get_radians(LandscapeRight, LandscapeLeft) + PI).abs() < 1e-12);
    }

    #[test]
    fn parses_names_and_kebab_aliases() {
        assert_eq!(
            "landscape_left".parse::<Orientation>(),
            Ok(Orientation::LandscapeLeft)
        );
        assert_eq!(
            "Portrait-Upside-Down".parse::<Orientation>(),
            Ok(Orientation::PortraitUpsideDown)
        );
        assert!("sideways".parse::<Orientation>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for o in Orientation::ALL {
            assert_eq!(o.to_string().parse::<Orientation>(), Ok(o));
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Orientation::LandscapeRight).unwrap();
        assert_eq!(json, "\"landscape_right\"");
    }
}
