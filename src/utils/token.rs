use jsonwebtoken::{decode, encode, errors::Error, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::{Role, TokenClaims};

/// Mint a token for `user_id` carrying `role`, valid for `maxage_hour` hours.
pub fn issue_token(
    secret: &str,
    user_id: &str,
    role: Role,
    maxage_hour: i64,
) -> Result<String, Error> {
    let now = chrono::Utc::now();
    let claims = TokenClaims {
        sub: user_id.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + chrono::Duration::hours(maxage_hour)).timestamp() as usize,
        role,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
}

pub fn decode_token(secret: &str, token: &str) -> Result<TokenClaims, Error> {
    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}
