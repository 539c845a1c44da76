//! Host information for status reporting

use serde::{Deserialize, Serialize};

/// Information about the machine running the build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostInfo {
    pub hostname: String,
    pub username: String,
}

impl HostInfo {
    /// Gather current host information
    pub fn current() -> Self {
        Self {
            hostname: whoami::fallible::hostname().unwrap_or_else(|_| "unknown".to_string()),
            username: whoami::username(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_detection() {
        let info = HostInfo::current();
        assert!(!info.hostname.is_empty());
        assert!(!info.username.is_empty());
    }
}
