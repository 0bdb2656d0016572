//! Domain DTOs for the placeholder REST API.
//!
//! # Design
//! These mirror the mock-server's schema but are defined independently;
//! integration tests catch drift. Field names follow the wire format through
//! `serde(rename)`. Fields the views never read (address, phone, username)
//! are left out and ignored on deserialization.

use serde::{Deserialize, Serialize};

/// A user record, the primary entity of the dependent-fetch view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub company: Company,
    pub website: String,
}

impl User {
    pub fn company_name(&self) -> &str {
        &self.company.name
    }

    /// Case-insensitive substring match on name or email. `needle` must
    /// already be lowercased.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Company {
    pub name: String,
}

/// A post owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

/// A todo item, the resource of the basic fetch view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u32,
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

/// Payload for creating or replacing a post. Doubles as the CRUD form draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostDraft {
    #[serde(rename = "userId")]
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

impl Default for PostDraft {
    fn default() -> Self {
        Self {
            user_id: 1,
            title: String::new(),
            body: String::new(),
        }
    }
}

impl PostDraft {
    pub fn from_post(post: &Post) -> Self {
        Self {
            user_id: post.user_id,
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_ignores_unused_fields() {
        let raw = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {"street": "Kulas Light", "city": "Gwenborough"},
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered client-server neural-net"}
        }"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.company_name(), "Romaguera-Crona");
        assert_eq!(user.website, "hildegard.org");
    }

    #[test]
    fn post_uses_user_id_wire_name() {
        let post: Post =
            serde_json::from_str(r#"{"id":3,"userId":7,"title":"t","body":"b"}"#).unwrap();
        assert_eq!(post.user_id, 7);
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["userId"], 7);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn matches_name_or_email_ignoring_case() {
        let user = User {
            id: 1,
            name: "Leanne Graham".to_string(),
            email: "Sincere@april.biz".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
            },
            website: "hildegard.org".to_string(),
        };
        assert!(user.matches("leanne"));
        assert!(user.matches("april"));
        assert!(user.matches(""));
        assert!(!user.matches("romaguera"));
    }

    #[test]
    fn draft_defaults_to_first_user() {
        let draft = PostDraft::default();
        assert_eq!(draft.user_id, 1);
        assert!(draft.title.is_empty());
    }
}
