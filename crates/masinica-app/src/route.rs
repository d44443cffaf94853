//! Screen addresses: `/`, `/vehicle/{plate}`, `/vehicle/{plate}/{label}`

use masinica_types::ValidationError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Vehicle list
    Home,
    /// Events of one vehicle
    Vehicle { plate: String },
    /// Detail of one event
    Event { plate: String, label: String },
}

impl Route {
    pub fn vehicle(plate: impl Into<String>) -> Self {
        Route::Vehicle { plate: plate.into() }
    }

    pub fn event(plate: impl Into<String>, label: impl Into<String>) -> Self {
        Route::Event {
            plate: plate.into(),
            label: label.into(),
        }
    }

    /// The screen one level up, `None` for home
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::Home => None,
            Route::Vehicle { .. } => Some(Route::Home),
            Route::Event { plate, .. } => Some(Route::vehicle(plate.clone())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Vehicle { plate } => write!(f, "/vehicle/{}", plate),
            Route::Event { plate, label } => write!(f, "/vehicle/{}/{}", plate, label),
        }
    }
}

impl FromStr for Route {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidRoute(s.to_string());

        let path = s.trim();
        let path = path.strip_prefix('/').ok_or_else(invalid)?;
        if path.is_empty() {
            return Ok(Route::Home);
        }

        let segments: Vec<&str> = path.split('/').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(invalid());
        }

        match segments.as_slice() {
            ["vehicle", plate] => Ok(Route::vehicle(*plate)),
            ["vehicle", plate, label] => Ok(Route::event(*plate, *label)),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Home));
        assert_eq!("/vehicle/B01ABC".parse::<Route>(), Ok(Route::vehicle("B01ABC")));
        assert_eq!(
            "/vehicle/B01ABC/ITP".parse::<Route>(),
            Ok(Route::event("B01ABC", "ITP"))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_shapes() {
        for path in ["", "vehicle/X", "/garage/X", "/vehicle", "/vehicle//ITP", "/vehicle/X/ITP/more"] {
            assert!(path.parse::<Route>().is_err(), "accepted {:?}", path);
        }
    }

    #[test]
    fn test_display_round_trip() {
        for route in [Route::Home, Route::vehicle("CJ45XYZ"), Route::event("CJ45XYZ", "RCA")] {
            assert_eq!(route.to_string().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_parent() {
        assert_eq!(Route::event("X", "RCA").parent(), Some(Route::vehicle("X")));
        assert_eq!(Route::vehicle("X").parent(), Some(Route::Home));
        assert_eq!(Route::Home.parent(), None);
    }
}
