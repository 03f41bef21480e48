//! Signed Token Primitives
//!
//! Thin wrapper over HS256 JWTs, generic over the claims type. The callers
//! decide what goes into the claims and which secret signs them; this module
//! only knows how to sign, verify, and decode.
//!
//! `decode_unverified` exists for flows that must read a claim (the subject)
//! before the verification key can even be determined. It checks neither the
//! signature nor the expiry, so its output must never be trusted beyond
//! choosing which key to verify the same token against.

use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// Token signing/verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token has expired
    #[error("Token has expired")]
    Expired,

    /// Token is malformed, or its signature does not match
    #[error("Token is malformed or its signature is invalid")]
    Invalid,

    /// Signing failed (claims could not be serialized)
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// Sign claims into a compact JWT string (HS256)
pub fn sign<C: Serialize>(claims: &C, secret: &[u8]) -> Result<String, TokenError> {
    encode(&Header::default(), claims, &EncodingKey::from_secret(secret))
        .map_err(|e| TokenError::Signing(e.to_string()))
}

/// Verify signature and expiry, returning the claims
pub fn verify<C: DeserializeOwned>(token: &str, secret: &[u8]) -> Result<C, TokenError> {
    let validation = Validation::new(Algorithm::HS256);

    decode::<C>(token, &DecodingKey::from_secret(secret), &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })
}

/// Decode claims WITHOUT verifying signature or expiry
///
/// Only the token's shape is checked. See the module docs for the single
/// legitimate use of this function.
pub fn decode_unverified<C: DeserializeOwned>(token: &str) -> Result<C, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<C>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|_| TokenError::Invalid)
}
