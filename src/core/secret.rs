use crate::core::error::CopyError;
use secrecy::SecretString;
use std::collections::BTreeMap;

// pass stores `key: value` metadata lines after the password line.
const ATTRIBUTE_SEPARATOR: &str = ": ";

/// A parsed password-store entry. Immutable once built.
#[derive(Debug)]
pub struct SecretRecord {
    pub password: SecretString,
    pub attributes: BTreeMap<String, String>,
}

impl SecretRecord {
    /// Parse raw password-store output: line 1 is the password verbatim (it
    /// may be empty), every following line must split on `": "` into exactly
    /// two parts. No trimming or normalization is applied; a line that splits
    /// into any other number of parts is a hard error rather than dropped.
    /// Duplicate keys keep the last occurrence.
    pub fn parse(raw: &str) -> Result<Self, CopyError> {
        let mut lines = raw.lines();
        let password = lines.next().unwrap_or_default().to_string();

        let mut attributes = BTreeMap::new();
        for line in lines {
            let parts: Vec<&str> = line.split(ATTRIBUTE_SEPARATOR).collect();
            if parts.len() != 2 {
                return Err(CopyError::MalformedLine(line.to_string()));
            }
            attributes.insert(parts[0].to_string(), parts[1].to_string());
        }

        Ok(SecretRecord {
            password: SecretString::from(password),
            attributes,
        })
    }
}
