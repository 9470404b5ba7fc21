//! Tests for token claims and compact-form parsing

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};

use crate::domain::entities::token::{Claims, SignedToken, TOKEN_ISSUER, TOKEN_SUBJECT};
use crate::errors::TokenError;

fn segment(json: &str) -> String {
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

#[test]
fn new_claims_carry_fixed_identity() {
    let claims = Claims::new(Duration::seconds(60));

    assert_eq!(claims.sub, TOKEN_SUBJECT);
    assert_eq!(claims.iss, TOKEN_ISSUER);

    let expected = Utc::now().timestamp() + 60;
    assert!((claims.exp - expected).abs() <= 1);
    assert!(!claims.is_expired());
}

#[test]
fn claims_expire_when_the_instant_passes() {
    let mut claims = Claims::new(Duration::seconds(60));

    claims.exp = Utc::now().timestamp() - 1;
    assert!(claims.is_expired());

    claims.exp = Utc::now().timestamp() + 5;
    assert!(!claims.is_expired());
}

#[test]
fn claims_serialize_to_registered_names() {
    let claims = Claims::new(Duration::seconds(60));
    let json = serde_json::to_value(&claims).unwrap();

    assert_eq!(json["sub"], TOKEN_SUBJECT);
    assert_eq!(json["iss"], TOKEN_ISSUER);
    assert!(json["exp"].is_i64());
    assert_eq!(json.as_object().unwrap().len(), 3);
}

#[test]
fn parse_requires_three_segments() {
    for input in ["abcdefg", "", "a.b", "a.b.c.d"] {
        assert!(matches!(
            SignedToken::parse(input),
            Err(TokenError::InvalidTokenFormat)
        ));
    }
}

#[test]
fn parse_rejects_undecodable_claims() {
    let header = segment(r#"{"alg":"ES256","typ":"JWT"}"#);
    let token = format!("{}.%%%.{}", header, segment("sig"));

    assert!(matches!(
        SignedToken::parse(&token),
        Err(TokenError::InvalidTokenFormat)
    ));
}

#[test]
fn parse_rejects_malformed_claim_json() {
    let header = segment(r#"{"alg":"ES256","typ":"JWT"}"#);
    let claims = segment(r#"{"sub":"testing"}"#);
    let token = format!("{}.{}.{}", header, claims, segment("sig"));

    assert!(matches!(
        SignedToken::parse(&token),
        Err(TokenError::InvalidClaims)
    ));
}

#[test]
fn parse_rejects_foreign_algorithms() {
    let claims = segment(r#"{"sub":"testing","iss":"http://localhost","exp":4102444800}"#);

    let hs256_header = segment(r#"{"alg":"HS256","typ":"JWT"}"#);
    let token = format!("{}.{}.{}", hs256_header, claims, segment("sig"));
    assert!(matches!(
        SignedToken::parse(&token),
        Err(TokenError::UnsupportedAlgorithm)
    ));

    // "none" is not a recognized algorithm tag at all
    let none_header = segment(r#"{"alg":"none"}"#);
    let token = format!("{}.{}.{}", none_header, claims, segment("sig"));
    assert!(SignedToken::parse(&token).is_err());
}

#[test]
fn parse_keeps_signed_message_intact() {
    let header = segment(r#"{"alg":"ES256","typ":"JWT","kid":"abc"}"#);
    let claims = segment(r#"{"sub":"testing","iss":"http://localhost","exp":4102444800}"#);
    let signature = segment("sig");
    let token = format!("{}.{}.{}", header, claims, signature);

    let parsed = SignedToken::parse(&token).unwrap();
    assert_eq!(parsed.message, format!("{}.{}", header, claims));
    assert_eq!(parsed.signature, signature);
    assert_eq!(parsed.header.kid.as_deref(), Some("abc"));
    assert_eq!(parsed.claims.exp, 4102444800);
}
