//! Integration tests for issuing, storing and verifying tokens

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

use chrono::{Duration, Utc};
use uuid::Uuid;

use ott_core::{
    DomainError, IssuedToken, TokenError, TokenIssuer, TokenOptions, TokenPurpose,
    TokenVerificationService, VerificationServiceConfig,
};
use ott_shared::config::TokenConfig;

/// Stand-in for the caller's persistence layer
#[derive(Default)]
struct InMemoryStore {
    records: Mutex<HashMap<Uuid, String>>,
}

impl InMemoryStore {
    fn save(&self, record: &IssuedToken) {
        let json = serde_json::to_string(record).unwrap();
        self.records.lock().unwrap().insert(record.id, json);
    }

    fn load(&self, id: Uuid) -> IssuedToken {
        let records = self.records.lock().unwrap();
        serde_json::from_str(&records[&id]).unwrap()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn test_issue_store_verify_round_trip() {
    init_tracing();
    let service = TokenVerificationService::new(VerificationServiceConfig::default()).unwrap();
    let store = InMemoryStore::default();

    let issued = service.issue(TokenPurpose::EmailVerification).unwrap();
    store.save(&issued.record);

    let loaded = store.load(issued.record.id);
    assert_eq!(loaded, issued.record);
    assert!(service.verify(&issued.token, &loaded).is_ok());
}

#[test]
fn test_stored_record_never_contains_token() {
    let service = TokenVerificationService::new(VerificationServiceConfig::default()).unwrap();
    let issued = service.issue(TokenPurpose::PasswordReset).unwrap();

    let json = serde_json::to_string(&issued.record).unwrap();
    assert!(!json.contains(&issued.token));
}

#[test]
fn test_config_driven_issuance() {
    let config = TokenConfig::from_lookup(|key| match key {
        "TOKEN_LENGTH" => Some("48".to_string()),
        "TOKEN_EXPIRY_MINUTES" => Some("30".to_string()),
        _ => None,
    });
    let service = TokenVerificationService::from_token_config(&config).unwrap();

    let issued = service.issue(TokenPurpose::EmailVerification).unwrap();
    assert_eq!(issued.token.len(), 48);

    let now = issued.record.issued_at + Duration::minutes(29);
    assert!(service.verify_at(&issued.token, &issued.record, now).is_ok());
    let now = issued.record.issued_at + Duration::minutes(30);
    assert_eq!(
        service.verify_at(&issued.token, &issued.record, now),
        Err(DomainError::Token(TokenError::TokenExpired))
    );
}

#[test]
fn test_issuer_used_directly_by_caller() {
    // A caller that manages its own storage works with the issuer alone
    let issuer = TokenIssuer::new(TokenOptions::default().with_token_length(32)).unwrap();
    let issued_at = Utc::now() - Duration::minutes(3);

    let stored_hash = issuer.database_hash().to_string();
    let submitted = issuer.token().to_string();

    assert_eq!(TokenIssuer::hash_from_token(&submitted), stored_hash);
    assert!(issuer.still_valid(issued_at));
}

#[test]
fn test_concurrent_issuance_is_unique() {
    let service = Arc::new(
        TokenVerificationService::new(VerificationServiceConfig::default()).unwrap(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                (0..50)
                    .map(|_| service.issue(TokenPurpose::EmailVerification).unwrap().token)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut tokens = std::collections::HashSet::new();
    for handle in handles {
        for token in handle.join().unwrap() {
            assert!(tokens.insert(token));
        }
    }
    assert_eq!(tokens.len(), 400);
}

#[test]
fn test_issuer_shared_across_threads() {
    let issuer = Arc::new(TokenIssuer::with_defaults().unwrap());
    let expected = issuer.token().to_string();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let issuer = Arc::clone(&issuer);
            thread::spawn(move || (issuer.token().to_string(), issuer.database_hash().to_string()))
        })
        .collect();

    for handle in handles {
        let (token, hash) = handle.join().unwrap();
        assert_eq!(token, expected);
        assert_eq!(hash, TokenIssuer::hash_from_token(&expected));
    }
}
