use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use std::{error::Error as StdError, fmt};

// Errors returned by admin-token verification.
//
// `Expired` is split out of the generic JWT error so callers can log it
// separately; both map to the same client-visible rejection.
#[derive(Debug)]
pub enum AdminJwtError {
    Expired,
    Jwt(jsonwebtoken::errors::Error),
}

impl fmt::Display for AdminJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expired => write!(f, "token expired"),
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
        }
    }
}

impl StdError for AdminJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AdminJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Jwt(e),
        }
    }
}

/// Decoded admin-token claims.
///
/// - `is_admin` is the authorization bit; a token without the claim decodes
///   as `false` and is treated the same as an explicit `false`.
/// - `sub` is the user id when the issuer includes one.
/// - Any other claims end up in `extra` untouched, so downstream sees the
///   decoded payload exactly as issued.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    #[serde(default, rename = "isAdmin")]
    pub is_admin: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// HS256 admin-token verifier.
///
/// - Holds the process-wide secret; constructed once at startup.
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AdminTokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for AdminTokenVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("AdminTokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AdminTokenVerifier {
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;
        // `exp` is optional on admin tokens; when present it is still enforced.
        validation.required_spec_claims.clear();

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify and decode an admin token.
    ///
    /// `jsonwebtoken::Validation` checks the signature and, when the token
    /// carries one, the `exp` window. Everything else (the admin flag) is the
    /// caller's authorization decision, not verification.
    pub fn verify(&self, token: &str) -> Result<AdminClaims, AdminJwtError> {
        let data = jsonwebtoken::decode::<AdminClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, get_current_timestamp};
    use serde_json::json;

    const SECRET: &str = "test-secret";

    fn sign(claims: &serde_json::Value, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn verifier() -> AdminTokenVerifier {
        AdminTokenVerifier::new(SECRET, 0)
    }

    #[test]
    fn valid_admin_token_decodes() {
        let token = sign(&json!({"isAdmin": true, "sub": "u-42"}), SECRET);

        let claims = verifier().verify(&token).unwrap();
        assert!(claims.is_admin);
        assert_eq!(claims.sub.as_deref(), Some("u-42"));
    }

    #[test]
    fn missing_admin_claim_decodes_as_false() {
        let token = sign(&json!({"sub": "u-42"}), SECRET);

        let claims = verifier().verify(&token).unwrap();
        assert!(!claims.is_admin);
    }

    #[test]
    fn unknown_claims_are_preserved() {
        let token = sign(
            &json!({"isAdmin": true, "sub": "u-42", "email": "a@example.com", "rooms": [1, 2]}),
            SECRET,
        );

        let claims = verifier().verify(&token).unwrap();
        assert_eq!(claims.extra["email"], "a@example.com");
        assert_eq!(claims.extra["rooms"], json!([1, 2]));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = sign(&json!({"isAdmin": true}), "other-secret");

        assert!(matches!(
            verifier().verify(&token),
            Err(AdminJwtError::Jwt(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        let token = sign(
            &json!({"isAdmin": true, "exp": get_current_timestamp() - 3600}),
            SECRET,
        );

        assert!(matches!(
            verifier().verify(&token),
            Err(AdminJwtError::Expired)
        ));
    }

    #[test]
    fn leeway_tolerates_a_just_expired_token() {
        let token = sign(
            &json!({"isAdmin": true, "exp": get_current_timestamp() - 10}),
            SECRET,
        );

        let verifier = AdminTokenVerifier::new(SECRET, 60);
        assert!(verifier.verify(&token).is_ok());
    }

    #[test]
    fn token_without_exp_verifies() {
        let token = sign(&json!({"isAdmin": true}), SECRET);

        assert!(verifier().verify(&token).is_ok());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            verifier().verify("not-a-jwt"),
            Err(AdminJwtError::Jwt(_))
        ));
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let token = sign(&json!({"isAdmin": false, "sub": "u-42"}), SECRET);

        // Swap out the payload segment while keeping the original signature.
        let forged_payload = sign(&json!({"isAdmin": true, "sub": "u-42"}), SECRET);
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged: Vec<&str> = forged_payload.split('.').collect();
        parts[1] = forged[1];
        let tampered = parts.join(".");

        assert!(matches!(
            verifier().verify(&tampered),
            Err(AdminJwtError::Jwt(_))
        ));
    }
}
