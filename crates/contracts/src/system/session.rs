use serde::{Deserialize, Serialize};

/// Response of `GET /api/auth/me`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_name: String,
    pub permissions: Vec<String>,
}

impl SessionInfo {
    /// True when the session carries the named permission
    pub fn has_permission(&self, name: &str) -> bool {
        self.permissions.iter().any(|p| p == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_permission() {
        let session = SessionInfo {
            user_name: "dewi".into(),
            permissions: vec!["category.force-delete".into()],
        };
        assert!(session.has_permission("category.force-delete"));
        assert!(!session.has_permission("product.force-delete"));
    }
}
