use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Name")]
    pub name: String,
}

impl User {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The user directory served by `GET /users`. There is no backing store;
/// a fresh list is built on every call.
pub fn fixed_users() -> Vec<User> {
    vec![User::new(1, "Alice"), User::new(2, "Bob")]
}
