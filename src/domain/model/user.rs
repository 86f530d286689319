use super::Record;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub status: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub status: String,
    pub role: String,
}

impl Record for User {
    type Draft = UserDraft;

    const RESOURCE: &'static str = "user";

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            status: draft.status,
            role: draft.role,
        }
    }

    fn apply(&mut self, draft: UserDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.status = draft.status;
        self.role = draft.role;
    }
}

/// Search filter for `/api/users/search`.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    name: Option<String>,
}

impl UserFilter {
    pub fn from_query(name: Option<&str>) -> Self {
        Self {
            name: name.filter(|n| !n.is_empty()).map(|n| n.to_lowercase()),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        match &self.name {
            Some(fragment) => user.name.to_lowercase().contains(fragment.as_str()),
            None => true,
        }
    }

    pub fn apply(&self, users: Vec<User>) -> Vec<User> {
        users.into_iter().filter(|u| self.matches(u)).collect()
    }
}
