use crate::core::item::{FieldKind, ItemField, ItemTemplate, LOGIN_CATEGORY};
use crate::core::secret::SecretRecord;
use secrecy::ExposeSecret;
use std::collections::BTreeMap;

pub const PASSWORD_ID: &str = "password";
pub const USERNAME_ID: &str = "username";
const EMAIL_KEY: &str = "email";

/// Map a parsed record into a vault item template plus the leftover
/// attributes emitted as opaque `key=value` arguments on create.
///
/// The password field always comes first. Username resolution: a `username`
/// attribute wins; otherwise an `email` attribute is promoted (and dropped
/// from the attributes). An empty username emits no field. The returned
/// attributes never contain the `username` key, real or promoted.
pub fn build_item(name: &str, record: SecretRecord) -> (ItemTemplate, BTreeMap<String, String>) {
    let SecretRecord {
        password,
        mut attributes,
    } = record;

    let mut fields = vec![ItemField {
        id: PASSWORD_ID.to_string(),
        kind: FieldKind::Concealed,
        purpose: PASSWORD_ID.to_uppercase(),
        label: PASSWORD_ID.to_string(),
        value: password.expose_secret().to_string(),
    }];

    let username = match attributes.remove(USERNAME_ID) {
        Some(username) => Some(username),
        None => attributes.remove(EMAIL_KEY),
    };

    if let Some(username) = username.filter(|u| !u.is_empty()) {
        fields.push(ItemField {
            id: USERNAME_ID.to_string(),
            kind: FieldKind::String,
            purpose: USERNAME_ID.to_uppercase(),
            label: USERNAME_ID.to_string(),
            value: username,
        });
    }

    let template = ItemTemplate {
        title: name.to_string(),
        category: LOGIN_CATEGORY.to_string(),
        fields,
    };
    (template, attributes)
}
