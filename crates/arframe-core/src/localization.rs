//! Localization target record.
//!
//! Values are filled in from a localization service response and carried
//! through unchanged; nothing here validates or interprets them.

/// Geographic position in degrees (WGS84).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A place the device can localize against.
#[derive(Clone, Debug, PartialEq)]
pub struct LocalizationTarget {
    identifier: String,
    center: GeoPoint,
    name: String,
    image_url: String,
    default_anchor: String,
}

impl LocalizationTarget {
    pub fn new(
        identifier: impl Into<String>,
        center: GeoPoint,
        name: impl Into<String>,
        image_url: impl Into<String>,
        default_anchor: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            center,
            name: name.into(),
            image_url: image_url.into(),
            default_anchor: default_anchor.into(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Human-readable display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Identifier of the anchor to use when none is chosen explicitly.
    pub fn default_anchor(&self) -> &str {
        &self.default_anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_values_verbatim() {
        let target = LocalizationTarget::new(
            "a1b2c3.1047",
            GeoPoint::new(37.7955, -122.3937),
            "Ferry Building Clock",
            "https://example.com/ferry.jpg",
            "anchor-payload-0",
        );
        assert_eq!(target.identifier(), "a1b2c3.1047");
        assert_eq!(target.center(), GeoPoint::new(37.7955, -122.3937));
        assert_eq!(target.name(), "Ferry Building Clock");
        assert_eq!(target.image_url(), "https://example.com/ferry.jpg");
        assert_eq!(target.default_anchor(), "anchor-payload-0");
    }
}
