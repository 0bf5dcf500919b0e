use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed")]
    HashFailed,
    #[error("Password verification failed")]
    VerifyFailed,
    #[error("Hashing task failed to complete")]
    TaskFailed,
}

/// Hashing runs on the blocking pool; implementations must be cheap to clone.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
