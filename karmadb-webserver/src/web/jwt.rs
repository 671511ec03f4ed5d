use anyhow::{anyhow, Result};
use jwt_service::JwtService;
use parking_lot::{Mutex, MutexGuard};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use time::{Duration, OffsetDateTime};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The username
    sub: String,
    /// Expiry time as Unix timestamp
    exp: usize,
}

pub struct JwtState {
    jwt_service: JwtService,
    time_valid: Duration,
    blacklist: Mutex<HashSet<String>>,
}

impl JwtState {
    pub fn new(time_valid: Duration) -> Self {
        Self {
            jwt_service: JwtService::new(),
            time_valid,
            blacklist: Mutex::new(HashSet::new()),
        }
    }

    pub fn generate_token(&self, username: &str) -> Result<String> {
        let exp = usize::try_from((OffsetDateTime::now_utc() + self.time_valid).unix_timestamp())?;
        let claims = Claims {
            sub: username.to_string(),
            exp,
        };
        self.jwt_service.encode(&claims)
    }

    pub fn validate_token_and_get_username(&self, token: &str) -> Result<String> {
        if self.is_on_blacklist(token) {
            return Err(anyhow!("Token is no longer valid"));
        }
        let claims = self.jwt_service.decode(token)?;
        Ok(claims.sub)
    }

    /// Rejects the token until it expires.
    pub fn blacklist_token(&self, token: String) {
        self.remove_expired_tokens();
        self.lock().insert(token);
    }

    fn is_on_blacklist(&self, token: &str) -> bool {
        self.lock().contains(token)
    }

    // Expired tokens are rejected anyway
    fn remove_expired_tokens(&self) {
        let mut blacklist = self.lock();
        let before = blacklist.len();
        blacklist.retain(|token| self.jwt_service.decode(token).is_ok());
        if blacklist.len() < before {
            debug!(
                "Removed {} expired token(s) from the blacklist",
                before - blacklist.len()
            );
        }
    }

    fn lock(&self) -> MutexGuard<HashSet<String>> {
        self.blacklist.lock()
    }
}

mod jwt_service {
    use super::{Claims, Result};
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

    /// A random 256-bit secret for the lifetime of this process,
    /// i.e. all tokens become invalid after a restart.
    fn generate_secret() -> String {
        STANDARD.encode(rand::random::<[u8; 32]>())
    }

    pub struct Key {
        encoding_key: EncodingKey,
        decoding_key: DecodingKey,
    }

    impl Key {
        pub fn new(secret: String) -> Self {
            let encoding_key = EncodingKey::from_secret(secret.as_ref());
            let decoding_key = DecodingKey::from_secret(secret.as_ref());
            Self {
                encoding_key,
                decoding_key,
            }
        }

        pub fn random() -> Self {
            Self::new(generate_secret())
        }
    }

    pub struct JwtService {
        key: Key,
    }

    impl JwtService {
        pub fn new() -> Self {
            Self { key: Key::random() }
        }
        pub fn encode(&self, claims: &Claims) -> Result<String> {
            let token = encode(&Header::default(), claims, &self.key.encoding_key)?;
            Ok(token)
        }
        pub fn decode(&self, token: &str) -> Result<Claims> {
            let token_data =
                decode::<Claims>(token, &self.key.decoding_key, &Validation::default())?;
            Ok(token_data.claims)
        }
    }
}
