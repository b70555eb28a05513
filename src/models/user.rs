use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Patient,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Patient => "patient",
        }
    }
}

/// A seeded account. Passwords are compared in plaintext; this is a demo
/// login, not a security boundary.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl User {
    pub fn seeded() -> Vec<User> {
        vec![
            User {
                id: 1,
                email: "admin@example.com".to_string(),
                password: "123".to_string(),
                role: Role::Admin,
            },
            User {
                id: 2,
                email: "patient@example.com".to_string(),
                password: "123".to_string(),
                role: Role::Patient,
            },
        ]
    }
}

/// Credentials as submitted. Fields keep whatever JSON the client sent so a
/// wrongly typed value is just a mismatch, not a malformed request.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<serde_json::Value>,
    pub password: Option<serde_json::Value>,
}

impl LoginRequest {
    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().and_then(serde_json::Value::as_str)
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_ref().and_then(serde_json::Value::as_str)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginResponse {
    pub id: i64,
    pub email: String,
    pub role: Role,
}
