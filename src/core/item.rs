use serde::{Deserialize, Serialize};

pub const LOGIN_CATEGORY: &str = "LOGIN";

/// Field kind as the vault CLI spells it. Items fetched back from the vault
/// may carry kinds beyond the two we emit (OTP, MONTH_YEAR, ...); those pass
/// through verbatim so a duplicated item round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    #[serde(rename = "CONCEALED")]
    Concealed,
    #[serde(rename = "STRING")]
    String,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemField {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: String,
}

/// Item template consumed by `op item create --template`. Doubles as the
/// decode target for `op item get --format json`; unknown keys in the
/// fetched JSON are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub fields: Vec<ItemField>,
}

/// Minimal shape of one entry of `op item list --format=json`, used only for
/// existence checks by exact title match.
#[derive(Debug, Deserialize)]
pub struct VaultListEntry {
    pub title: String,
}
