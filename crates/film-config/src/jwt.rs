use std::env;

/// Every session token lives for exactly one hour.
pub const SESSION_LIFETIME_SECS: i64 = 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            token_expiry: SESSION_LIFETIME_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_lifetime_is_one_hour() {
        assert_eq!(JwtConfig::from_env().token_expiry, 3600);
    }
}
