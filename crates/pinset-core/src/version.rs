//! Exact version pins.
//!
//! A pin must name one concrete release: `MAJOR.MINOR.PATCH` optionally
//! followed by a fourth numeric segment or a `postN` tag:
//! - `8.3.4`, `2.4.7.3`, `6.0.12.20240917`, `1.2.2.post1`
//! - segments are decimal integers without leading zeros (`0` itself is fine)
//! - with [`VersionPolicy::allow_short`], `MAJOR.MINOR` is accepted too

use std::fmt;

use thiserror::Error;

/// Knobs controlling how strict exact-version validation is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionPolicy {
    /// Accept two-segment releases such as `1.13`.
    pub allow_short: bool,
}

impl VersionPolicy {
    fn min_release_segments(self) -> usize {
        if self.allow_short {
            2
        } else {
            3
        }
    }
}

const MAX_SEGMENTS: usize = 4;

/// Why a version string is not an acceptable exact pin.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("version is empty")]
    Empty,

    #[error("segment '{segment}' is not a number")]
    NonNumeric { segment: String },

    #[error("segment '{segment}' has a leading zero")]
    LeadingZero { segment: String },

    #[error("expected at least {min} release segments, found {found}")]
    TooFewSegments { found: usize, min: usize },

    #[error("expected at most 4 segments, found {found}")]
    TooManySegments { found: usize },

    #[error("'{segment}' is not a valid post-release tag")]
    BadPostRelease { segment: String },
}

/// A parsed exact version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExactVersion {
    release: Vec<u64>,
    post: Option<u64>,
}

impl ExactVersion {
    pub fn parse(text: &str, policy: &VersionPolicy) -> Result<Self, VersionError> {
        if text.is_empty() {
            return Err(VersionError::Empty);
        }

        let segments: Vec<&str> = text.split('.').collect();
        if segments.len() > MAX_SEGMENTS {
            return Err(VersionError::TooManySegments {
                found: segments.len(),
            });
        }

        let (release_segments, post) = match segments.split_last() {
            Some((last, rest)) if last.starts_with("post") => {
                (rest, Some(parse_post(last)?))
            }
            _ => (segments.as_slice(), None),
        };

        let min = policy.min_release_segments();
        if release_segments.len() < min {
            return Err(VersionError::TooFewSegments {
                found: release_segments.len(),
                min,
            });
        }

        let release = release_segments
            .iter()
            .map(|s| parse_number(s))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { release, post })
    }

    /// Release segments, e.g. `[8, 3, 4]`.
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    pub fn post(&self) -> Option<u64> {
        self.post
    }
}

fn parse_number(segment: &str) -> Result<u64, VersionError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersionError::NonNumeric {
            segment: segment.to_string(),
        });
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return Err(VersionError::LeadingZero {
            segment: segment.to_string(),
        });
    }
    segment.parse().map_err(|_| VersionError::NonNumeric {
        segment: segment.to_string(),
    })
}

fn parse_post(segment: &str) -> Result<u64, VersionError> {
    let digits = &segment["post".len()..];
    parse_number(digits).map_err(|_| VersionError::BadPostRelease {
        segment: segment.to_string(),
    })
}

impl fmt::Display for ExactVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for n in &self.release {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{n}")?;
            first = false;
        }
        if let Some(post) = self.post {
            write!(f, ".post{post}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(s: &str) -> Result<ExactVersion, VersionError> {
        ExactVersion::parse(s, &VersionPolicy::default())
    }

    #[test]
    fn accepts_three_segments() {
        let v = strict("8.3.4").unwrap();
        assert_eq!(v.release(), &[8, 3, 4]);
        assert_eq!(v.post(), None);
    }

    #[test]
    fn accepts_fourth_numeric_segment() {
        assert_eq!(strict("2.4.7.3").unwrap().release(), &[2, 4, 7, 3]);
        assert_eq!(
            strict("6.0.12.20240917").unwrap().release(),
            &[6, 0, 12, 20240917]
        );
    }

    #[test]
    fn accepts_post_release() {
        let v = strict("1.2.2.post1").unwrap();
        assert_eq!(v.release(), &[1, 2, 2]);
        assert_eq!(v.post(), Some(1));
        assert_eq!(v.to_string(), "1.2.2.post1");
    }

    #[test]
    fn rejects_short_unless_allowed() {
        assert_eq!(
            strict("1.13"),
            Err(VersionError::TooFewSegments { found: 2, min: 3 })
        );
        let relaxed = VersionPolicy { allow_short: true };
        assert!(ExactVersion::parse("1.13", &relaxed).is_ok());
        assert!(ExactVersion::parse("1", &relaxed).is_err());
    }

    #[test]
    fn rejects_too_many_segments() {
        assert_eq!(
            strict("1.2.3.4.5"),
            Err(VersionError::TooManySegments { found: 5 })
        );
        assert!(strict("1.2.3.4.post1").is_err());
    }

    #[test]
    fn rejects_non_numeric_and_pre_releases() {
        assert!(matches!(strict("1.2.x"), Err(VersionError::NonNumeric { .. })));
        assert!(matches!(strict("1.0.0rc1"), Err(VersionError::NonNumeric { .. })));
        assert!(matches!(strict("1..2"), Err(VersionError::NonNumeric { .. })));
        assert_eq!(strict(""), Err(VersionError::Empty));
    }

    #[test]
    fn rejects_leading_zero() {
        assert_eq!(
            strict("2024.01.5"),
            Err(VersionError::LeadingZero {
                segment: "01".to_string()
            })
        );
        assert!(strict("0.6.6").is_ok());
    }

    #[test]
    fn rejects_bad_post_tag() {
        assert!(matches!(
            strict("1.2.2.post"),
            Err(VersionError::BadPostRelease { .. })
        ));
        assert!(matches!(
            strict("1.2.2.postx"),
            Err(VersionError::BadPostRelease { .. })
        ));
    }

    #[test]
    fn display_round_trips() {
        for s in ["8.3.4", "2.4.7.3", "1.2.2.post1", "0.27.0"] {
            assert_eq!(strict(s).unwrap().to_string(), s);
        }
    }
}
