//! Cross-compilation build targets

use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system a backend binary is compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
}

impl Os {
    /// Returns the OS name as the Go toolchain spells it (`GOOS`)
    pub const fn as_str(&self) -> &'static str {
        match self {
            Os::Linux => "linux",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// CPU architecture a backend binary is compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Amd64,
    Arm64,
}

impl Arch {
    /// Returns the architecture name as the Go toolchain spells it (`GOARCH`)
    pub const fn as_str(&self) -> &'static str {
        match self {
            Arch::Amd64 => "amd64",
            Arch::Arm64 => "arm64",
        }
    }

    /// Returns the architecture name as addon base images spell it
    ///
    /// The addon build configuration keys its base images by `amd64` and
    /// `aarch64`, not by the Go spelling.
    pub const fn image_arch(&self) -> &'static str {
        match self {
            Arch::Amd64 => "amd64",
            Arch::Arm64 => "aarch64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Combined (OS, architecture) pair a backend is cross-compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildTarget {
    pub os: Os,
    pub arch: Arch,
}

impl BuildTarget {
    /// Create a new build target
    pub const fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// The fixed set of targets every backend binary is built for
    pub const fn all() -> &'static [BuildTarget] {
        const ALL: &[BuildTarget] = &[
            BuildTarget::new(Os::Linux, Arch::Amd64),
            BuildTarget::new(Os::Linux, Arch::Arm64),
        ];
        ALL
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_string_format() {
        let target = BuildTarget::new(Os::Linux, Arch::Amd64);
        assert_eq!(target.to_string(), "linux/amd64");

        let target = BuildTarget::new(Os::Linux, Arch::Arm64);
        assert_eq!(target.to_string(), "linux/arm64");
    }

    #[test]
    fn test_all_targets() {
        let targets = BuildTarget::all();
        assert_eq!(targets.len(), 2);
        assert!(targets.iter().all(|t| t.os == Os::Linux));
    }

    #[test]
    fn test_image_arch_spelling() {
        assert_eq!(Arch::Amd64.image_arch(), "amd64");
        assert_eq!(Arch::Arm64.image_arch(), "aarch64");
        assert_eq!(Arch::Arm64.as_str(), "arm64");
    }
}
