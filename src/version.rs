//! Version string parsing.

use std::fmt;

use regex::Regex;

/// A `major.minor.patch` version extracted from tool output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemVer {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Extract the first `major.minor.patch` triple from command output.
///
/// Tool banners vary wildly ("13.2.0", "firebase-tools/13.2.0 linux-x64"),
/// so this scans rather than parses the whole string.
pub fn extract_semver(output: &str) -> Option<SemVer> {
    let re = Regex::new(r"(\d+)\.(\d+)\.(\d+)").ok()?;
    let caps = re.captures(output)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    let patch = caps.get(3)?.as_str().parse().ok()?;
    Some(SemVer {
        major,
        minor,
        patch,
    })
}

/// Parse the leading major component of a version like `v20.11.1`.
pub fn parse_major(version: &str) -> Option<u32> {
    let trimmed = version.trim().trim_start_matches('v');
    let digits: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_semver() {
        let version = extract_semver("13.2.0").unwrap();
        assert_eq!(version.major, 13);
        assert_eq!(version.minor, 2);
        assert_eq!(version.patch, 0);
    }

    #[test]
    fn extracts_semver_from_banner_output() {
        let version = extract_semver("firebase-tools/14.0.1 linux-x64 node-v20.11.1").unwrap();
        assert_eq!(version, SemVer { major: 14, minor: 0, patch: 1 });
    }

    #[test]
    fn extract_requires_three_components() {
        assert!(extract_semver("version 13.2").is_none());
        assert!(extract_semver("no version here").is_none());
    }

    #[test]
    fn semver_displays_dotted() {
        let version = SemVer { major: 13, minor: 2, patch: 0 };
        assert_eq!(version.to_string(), "13.2.0");
    }

    #[test]
    fn parse_major_strips_v_prefix() {
        assert_eq!(parse_major("v20.11.1"), Some(20));
        assert_eq!(parse_major("v18.17.0\n"), Some(18));
    }

    #[test]
    fn parse_major_accepts_bare_numbers() {
        assert_eq!(parse_major("22"), Some(22));
        assert_eq!(parse_major("20.1"), Some(20));
    }

    #[test]
    fn parse_major_rejects_garbage() {
        assert_eq!(parse_major("not a version"), None);
        assert_eq!(parse_major(""), None);
    }
}
