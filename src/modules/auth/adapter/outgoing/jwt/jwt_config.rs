#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// Access token lifetime in seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret_key = std::env::var("JWT_SECRET").expect("JWT_SECRET is not set in .env file");

        let access_token_expiry = std::env::var("JWT_EXPIRES_IN")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Self {
            secret_key,
            access_token_expiry,
        }
    }
}
