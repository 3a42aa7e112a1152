use std::{fmt, net::IpAddr};

/// Remote address of the peer that issued the request. The only credential
/// the admin gate looks at.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerOrigin(String);

impl CallerOrigin {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<IpAddr> for CallerOrigin {
    fn from(value: IpAddr) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for CallerOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
