use std::sync::LazyLock;

use gamebay_server_app::domain::{UserId, user::UserRole};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use log::info;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    exp: usize,
}

/// The authenticated identity carried by a valid token.
pub struct Session {
    pub user_id: UserId,
    pub role: UserRole,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Keys {
    fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

static KEYS: LazyLock<Keys> = LazyLock::new(|| {
    let secret = read_or_generate_secret();
    Keys::new(&secret)
});

fn read_or_generate_secret() -> Vec<u8> {
    if let Ok(secret) = std::env::var("GAMEBAY_JWT_SECRET") {
        secret.as_bytes().to_vec()
    } else {
        info!("JWT secret not found, generating a random one...");
        Uuid::new_v4().as_bytes().to_vec()
    }
}

pub fn generate_jwt(user_id: UserId, role: UserRole) -> Option<String> {
    let claims = Claims {
        sub: user_id.to_string(),
        role: role.as_str().to_string(),
        exp: (chrono::Utc::now() + chrono::Duration::hours(24)).timestamp() as usize,
    };
    encode(&Header::default(), &claims, &KEYS.encoding).ok()
}

pub fn validate_jwt(token: &str) -> Option<Session> {
    let data = decode::<Claims>(token, &KEYS.decoding, &Validation::default()).ok()?;
    let uuid = Uuid::parse_str(&data.claims.sub).ok()?;
    let role = UserRole::parse(&data.claims.role)?;
    Some(Session {
        user_id: UserId(uuid),
        role,
    })
}

#[derive(Serialize)]
pub struct AuthBody {
    pub token: String,
}
