use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "STUDENT")]
    Student,
    #[serde(rename = "ADMIN")]
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub role: UserRole,
    pub is_blocked: bool,
    pub name: String,
    pub email: String,
    pub password: String,
    pub student_id: String,
    pub department: String,
    pub year_section: String,
    pub mobile: String,
}

impl User {
    // Plain comparison, matching the client-storage contract (no hashing)
    pub fn verify_password(&self, password: &str) -> bool {
        self.password == password
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
