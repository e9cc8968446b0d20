use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Longest label allowed by RFC 1035 §2.3.4.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name, length octets and root terminator included.
pub const MAX_NAME_LEN: usize = 255;

/// A domain name as an ordered list of raw labels.
///
/// Labels keep the case and bytes they were built or decoded with. Equality is
/// exact; use [`DomainName::eq_ignore_ascii_case`] for DNS name comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    pub fn root() -> Self {
        Self::default()
    }

    /// Wraps labels without validation. The encoder rejects anything that
    /// does not fit on the wire.
    pub fn from_labels(labels: Vec<Vec<u8>>) -> Self {
        Self { labels }
    }

    /// Parses a dotted presentation name such as `example.com` or
    /// `example.com.`.
    pub fn parse(name: &str) -> Result<Self, DomainError> {
        let trimmed = name.strip_suffix('.').unwrap_or(name);
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' has no labels",
                name
            )));
        }

        let mut labels = Vec::new();
        for label in trimmed.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "'{}' contains an empty label",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' is {} bytes, maximum is {}",
                    label,
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            labels.push(label.as_bytes().to_vec());
        }

        let parsed = Self { labels };
        if parsed.encoded_len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidDomainName(format!(
                "'{}' encodes to {} bytes, maximum is {}",
                name,
                parsed.encoded_len(),
                MAX_NAME_LEN
            )));
        }
        Ok(parsed)
    }

    pub fn labels(&self) -> &[Vec<u8>] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Uncompressed wire length: one length octet per label plus the root.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1
    }

    pub fn eq_ignore_ascii_case(&self, other: &DomainName) -> bool {
        self.labels.len() == other.labels.len()
            && self
                .labels
                .iter()
                .zip(&other.labels)
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Fully qualified presentation form with a trailing dot. Dots and
/// backslashes inside a label are escaped, non-printable bytes are written
/// as `\DDD`.
impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return write!(f, ".");
        }
        for label in &self.labels {
            for &byte in label {
                match byte {
                    b'.' | b'\\' => write!(f, "\\{}", byte as char)?,
                    0x21..=0x7E => write!(f, "{}", byte as char)?,
                    _ => write!(f, "\\{:03}", byte)?,
                }
            }
            write!(f, ".")?;
        }
        Ok(())
    }
}
