//! Naming the built-in datasets from the outside.

use std::fmt;
use std::str::FromStr;

use console_core::Error;

/// One of the dashboard's datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// The template marketplace.
    Templates,
    /// The extensions marketplace.
    Extensions,
    /// Analytics environments.
    Projects,
    /// The service catalog.
    Services,
}

impl Collection {
    /// Every dataset, in navigation order.
    pub fn all() -> [Collection; 4] {
        [
            Collection::Templates,
            Collection::Extensions,
            Collection::Projects,
            Collection::Services,
        ]
    }

    /// Lower-case name, also the member that wraps the array in an API
    /// response (`{"services": [...]}`).
    pub fn envelope(self) -> &'static str {
        match self {
            Collection::Templates => "templates",
            Collection::Extensions => "extensions",
            Collection::Projects => "projects",
            Collection::Services => "services",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.envelope())
    }
}

impl FromStr for Collection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::all()
            .into_iter()
            .find(|c| c.envelope().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_collection(s))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Services".parse::<Collection>().unwrap(), Collection::Services);
        assert_eq!(" templates ".parse::<Collection>().unwrap(), Collection::Templates);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "widgets".parse::<Collection>().unwrap_err();
        assert!(matches!(err, Error::UnknownCollection { .. }));
    }

    #[test]
    fn test_display_round_trips() {
        for c in Collection::all() {
            assert_eq!(c.to_string().parse::<Collection>().unwrap(), c);
        }
    }
}
