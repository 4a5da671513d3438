use std::borrow::Borrow;
use std::fmt;

/// An IRI identifying a graph node, predicate, or type.
///
/// Opaque and globally unique within its side of a reconciliation run.
/// Stored without angle brackets.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The namespace portion: everything up to and including the last
    /// `#` or `/`, or the whole IRI when neither occurs.
    pub fn namespace(&self) -> &str {
        match self.0.rfind(['#', '/']) {
            Some(pos) => &self.0[..=pos],
            None => &self.0,
        }
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Iri {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for Iri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_splits_on_last_separator() {
        assert_eq!(
            Iri::from("http://example.org/onto/WireFraud").namespace(),
            "http://example.org/onto/"
        );
        assert_eq!(
            Iri::from("http://example.org/onto#WireFraud").namespace(),
            "http://example.org/onto#"
        );
        assert_eq!(Iri::from("urn:no-separator").namespace(), "urn:no-separator");
    }
}
