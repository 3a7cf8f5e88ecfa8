//! Network access for the users endpoint.
//!
//! Contains no state plumbing; `LoadUsersCommand` maps the result into `UsersLoadCompute`.

use log::{info, warn};
use serde_json::Value;

use crate::UserTableConfig;
use crate::http::Client;

use super::{LoadUsersError, User};

/// GET the users list through the configured proxy.
pub async fn fetch_users(config: &UserTableConfig) -> Result<Vec<User>, LoadUsersError> {
    let url = config.request_url();
    info!("fetch_users: GET {url}");

    let response = Client::get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    if !response.is_success() {
        return Err(LoadUsersError::http_status(response.status));
    }

    parse_users(&response.body)
}

/// Accepts only a non-empty JSON array of user records.
pub fn parse_users(body: &[u8]) -> Result<Vec<User>, LoadUsersError> {
    let value: Value = serde_json::from_slice(body).map_err(|err| {
        warn!("parse_users: body is not JSON: {err}");
        LoadUsersError::DataFormat
    })?;

    match &value {
        Value::Array(items) if !items.is_empty() => {}
        Value::Array(_) => {
            warn!("parse_users: empty array");
            return Err(LoadUsersError::DataFormat);
        }
        other => {
            warn!("parse_users: expected an array, got {}", json_kind(other));
            return Err(LoadUsersError::DataFormat);
        }
    }

    serde_json::from_value(value).map_err(|err| {
        warn!("parse_users: malformed user record: {err}");
        LoadUsersError::DataFormat
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_non_empty_array() {
        let users = parse_users(br#"[{"id": 2, "firstname": "B"}, {"id": 1, "firstname": "A"}]"#)
            .unwrap();

        // response order is kept
        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2, 1]);
    }

    #[test]
    fn empty_array_is_data_format_error() {
        assert_eq!(parse_users(b"[]"), Err(LoadUsersError::DataFormat));
    }

    #[test]
    fn object_body_is_data_format_error() {
        assert_eq!(
            parse_users(br#"{"users": [{"id": 1}]}"#),
            Err(LoadUsersError::DataFormat)
        );
    }

    #[test]
    fn non_json_body_is_data_format_error() {
        assert_eq!(
            parse_users(b"<html>rate limited</html>"),
            Err(LoadUsersError::DataFormat)
        );
    }

    #[test]
    fn malformed_element_is_data_format_error() {
        assert_eq!(
            parse_users(br#"[{"id": "not-a-number"}]"#),
            Err(LoadUsersError::DataFormat)
        );
    }
}
