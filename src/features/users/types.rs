//! Wire types for the user profile API. Field names follow the backend's
//! camelCase JSON; the record id travels as `_id`.

use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Listing entry from `GET /user`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserSummary {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

/// Full record from `GET /user/{id}`. `username` and `created_at` are set at
/// registration and never change; the remaining fields are editable.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    /// The backend stores age numerically but the form edits it as text, so
    /// it is normalized to a string on deserialization.
    #[serde(deserialize_with = "string_or_number", default)]
    pub age: String,
    pub email: String,
    #[serde(default)]
    pub created_at: String,
}

/// Body for `POST /user/register`.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub email: String,
}

/// Body for `PATCH /user/update`.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    pub user_id: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub age: String,
    pub email: String,
}

/// Formats an RFC 3339 registration timestamp for display, e.g.
/// `January 01, 2023 00:00:00`. Unparseable input is shown as-is.
pub fn registration_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(timestamp) => timestamp.format("%B %d, %Y %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(value) => value,
        Raw::Number(value) => {
            if value.fract() == 0.0 {
                format!("{}", value as i64)
            } else {
                value.to_string()
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_decodes_numeric_age_and_mongo_id() {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "_id": "u1",
                "username": "bob",
                "displayName": "Bob",
                "firstName": "Bob",
                "lastName": "Lee",
                "age": 29,
                "email": "bob@x.com",
                "createdAt": "2023-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(profile.id, "u1");
        assert_eq!(profile.age, "29");
        assert_eq!(profile.created_at, "2023-01-01T00:00:00Z");
    }

    #[test]
    fn profile_decodes_string_age_and_missing_id() {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "username": "ann",
                "displayName": "Ann",
                "firstName": "Ann",
                "lastName": "Lee",
                "age": "30",
                "email": "a@b.com"
            }"#,
        )
        .unwrap();

        assert_eq!(profile.id, "");
        assert_eq!(profile.age, "30");
        assert_eq!(profile.created_at, "");
    }

    #[test]
    fn update_request_encodes_camel_case_with_user_id() {
        let body = UpdateRequest {
            user_id: "u1".to_string(),
            display_name: "Ann".to_string(),
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            age: "30".to_string(),
            email: "a@b.com".to_string(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["displayName"], "Ann");
        assert_eq!(json["firstName"], "Ann");
        assert_eq!(json["age"], "30");
    }

    #[test]
    fn registration_date_formats_rfc3339_timestamps() {
        assert_eq!(
            registration_date("2023-01-01T00:00:00Z"),
            "January 01, 2023 00:00:00"
        );
        assert_eq!(
            registration_date("2024-07-15T09:05:30.123Z"),
            "July 15, 2024 09:05:30"
        );
    }

    #[test]
    fn registration_date_passes_unparseable_input_through() {
        assert_eq!(registration_date("yesterday"), "yesterday");
        assert_eq!(registration_date(""), "");
    }

    #[test]
    fn summary_decodes_mongo_id() {
        let summary: UserSummary =
            serde_json::from_str(r#"{"_id":"u2","username":"ann"}"#).unwrap();
        assert_eq!(summary.id, "u2");
        assert_eq!(summary.username, "ann");
    }
}
