//! Trust verdict produced by token verification.

use std::fmt;

/// Three-way classification of a verification attempt.
///
/// Every verification produces exactly one of these values; there is no
/// partial outcome and nothing is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenVerdict {
    /// The signature verifies against the service key and the token has not expired
    Valid,

    /// The expiration instant is strictly in the past. Expiration takes
    /// precedence over signature validity in the classification.
    Expired,

    /// The token is unparseable or its signature does not verify
    NotValid,
}

impl TokenVerdict {
    /// Wire label returned to HTTP callers
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenVerdict::Valid => "VALID",
            TokenVerdict::Expired => "EXPIRED",
            TokenVerdict::NotValid => "NOT_VALID",
        }
    }
}

impl fmt::Display for TokenVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_labels_are_stable() {
        assert_eq!(TokenVerdict::Valid.as_str(), "VALID");
        assert_eq!(TokenVerdict::Expired.as_str(), "EXPIRED");
        assert_eq!(TokenVerdict::NotValid.as_str(), "NOT_VALID");
    }

    #[test]
    fn display_matches_wire_label() {
        assert_eq!(TokenVerdict::Expired.to_string(), "EXPIRED");
    }
}
