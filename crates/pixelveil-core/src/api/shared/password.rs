use std::fmt::{self, Debug, Formatter};

/// A password wrapper that keeps the secret out of `Debug` output.
pub struct Password(String);

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Password({})", "*".repeat(self.0.len()))
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self(password)
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(password.to_string())
    }
}

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
