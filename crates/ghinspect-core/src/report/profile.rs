use serde::Serialize;
use serde_json::Value;

/// Public profile fields copied from the `/user` body.
///
/// Values are passed through untouched; any field missing from the body is
/// `null` in the report rather than omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserProfile {
    pub login: Value,
    pub id: Value,
    #[serde(rename = "type")]
    pub account_type: Value,
    pub name: Value,
    pub company: Value,
    pub blog: Value,
    pub location: Value,
    pub email: Value,
    pub public_repos: Value,
    pub followers: Value,
    pub created_at: Value,
    pub updated_at: Value,
}

impl UserProfile {
    /// Pick the whitelisted fields out of a parsed body.
    ///
    /// A body that is not a JSON object yields a profile of nulls.
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| body.get(name).cloned().unwrap_or(Value::Null);

        Self {
            login: field("login"),
            id: field("id"),
            account_type: field("type"),
            name: field("name"),
            company: field("company"),
            blog: field("blog"),
            location: field("location"),
            email: field("email"),
            public_repos: field("public_repos"),
            followers: field("followers"),
            created_at: field("created_at"),
            updated_at: field("updated_at"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_whitelisted_fields_only() {
        let body = json!({
            "login": "octocat",
            "id": 583231,
            "type": "User",
            "name": "The Octocat",
            "site_admin": false,
            "public_repos": 8,
            "followers": 9000,
            "created_at": "2011-01-25T18:44:36Z"
        });

        let profile = UserProfile::from_json(&body);
        assert_eq!(profile.login, json!("octocat"));
        assert_eq!(profile.id, json!(583231));
        assert_eq!(profile.account_type, json!("User"));
        assert_eq!(profile.public_repos, json!(8));

        let out = serde_json::to_value(&profile).unwrap();
        assert!(out.get("site_admin").is_none());
        assert_eq!(out["type"], json!("User"));
    }

    #[test]
    fn test_missing_fields_are_null_not_absent() {
        let profile = UserProfile::from_json(&json!({"login": "octocat"}));
        let out = serde_json::to_value(&profile).unwrap();

        assert_eq!(out["email"], Value::Null);
        assert!(out.as_object().unwrap().contains_key("email"));
        assert_eq!(out.as_object().unwrap().len(), 12);
    }

    #[test]
    fn test_non_object_body_gives_nulls() {
        assert_eq!(UserProfile::from_json(&json!([1, 2, 3])), UserProfile::default());
        assert_eq!(UserProfile::from_json(&json!("octocat")), UserProfile::default());
    }

    #[test]
    fn test_field_order_is_stable() {
        let json = serde_json::to_string(&UserProfile::default()).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"login":null,"id":null,"type":null,"name":null,"company":null,"#,
                r#""blog":null,"location":null,"email":null,"public_repos":null,"#,
                r#""followers":null,"created_at":null,"updated_at":null}"#
            )
        );
    }
}
