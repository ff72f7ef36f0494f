use std::collections::HashSet;

use base64::{Engine as _, engine::general_purpose::STANDARD};

use okx_vault_client::auth::sign_request;
use okx_vault_client::error::OkxVaultError;
use okx_vault_client::storage::{BundleStorage, InMemoryBundleStore};
use okx_vault_client::vault::{self, CredentialRecord, NONCE_SIZE, SALT_SIZE};

#[test]
fn test_round_trip_across_passphrases_and_records() {
    let long_passphrase = "a".repeat(200);
    let passphrases = ["hunter2", "", "pässwörd 密码", long_passphrase.as_str()];
    let records = [
        CredentialRecord::new("k", "s", "p"),
        CredentialRecord::new("", "", ""),
        CredentialRecord::new("key-with-unicode-→", "secret\nwith\nnewlines", "p\"quoted\""),
    ];

    for passphrase in &passphrases {
        for record in &records {
            let bundle = vault::encrypt(passphrase, record).unwrap();
            let restored = vault::decrypt(passphrase, &bundle).unwrap();
            assert_eq!(*record, restored);
        }
    }
}

#[test]
fn test_wrong_passphrase_is_decryption_error() {
    let record = CredentialRecord::new("k", "s", "p");
    let bundle = vault::encrypt("correct", &record).unwrap();

    for wrong in ["incorrect", "Correct", "correct ", ""] {
        assert!(matches!(
            vault::decrypt(wrong, &bundle),
            Err(OkxVaultError::Decryption)
        ));
    }
}

#[test]
fn test_salt_iv_and_ciphertext_unique_across_encrypts() {
    let record = CredentialRecord::new("k", "s", "p");

    let mut pairs = HashSet::new();
    let mut ciphertexts = HashSet::new();
    for _ in 0..1000 {
        let bundle = vault::encrypt("hunter2", &record).unwrap();
        assert!(pairs.insert((bundle.salt.clone(), bundle.iv.clone())));
        assert!(ciphertexts.insert(bundle.ciphertext));
    }
    assert_eq!(pairs.len(), 1000);
    assert_eq!(ciphertexts.len(), 1000);
}

#[test]
fn test_single_bit_flip_anywhere_in_ciphertext_is_detected() {
    let record = CredentialRecord::new("k", "s", "p");
    let bundle = vault::encrypt("hunter2", &record).unwrap();

    // Every bit of the first byte, plus one bit in a spread of positions
    // covering body and authentication tag.
    let mut flips: Vec<(usize, u8)> = (0..8).map(|bit| (0usize, 1u8 << bit)).collect();
    let len = bundle.ciphertext.len();
    for index in [len / 4, len / 2, len - 17, len - 16, len - 1] {
        flips.push((index, 0x01));
    }

    for (index, mask) in flips {
        let mut tampered = bundle.clone();
        tampered.ciphertext[index] ^= mask;
        assert!(
            matches!(
                vault::decrypt("hunter2", &tampered),
                Err(OkxVaultError::Decryption)
            ),
            "bit flip at byte {index} was not detected"
        );
    }
}

#[test]
fn test_tampered_salt_and_iv_are_detected() {
    let record = CredentialRecord::new("k", "s", "p");
    let bundle = vault::encrypt("hunter2", &record).unwrap();

    let mut bad_salt = bundle.clone();
    bad_salt.salt[0] ^= 0x01;
    assert!(matches!(
        vault::decrypt("hunter2", &bad_salt),
        Err(OkxVaultError::Decryption)
    ));

    let mut bad_iv = bundle.clone();
    bad_iv.iv[0] ^= 0x01;
    assert!(matches!(
        vault::decrypt("hunter2", &bad_iv),
        Err(OkxVaultError::Decryption)
    ));
}

#[test]
fn test_bundle_wire_format_round_trips_through_json() {
    let record = CredentialRecord::new("k", "s", "p");
    let bundle = vault::encrypt("hunter2", &record).unwrap();

    let json = serde_json::to_string(&bundle).unwrap();
    // Byte arrays serialize as integer arrays, not base64.
    assert!(json.contains("\"salt\":["));
    assert!(json.contains("\"iv\":["));
    assert!(json.contains("\"ct\":["));

    let reloaded: okx_vault_client::CredentialBundle = serde_json::from_str(&json).unwrap();
    assert_eq!(vault::decrypt("hunter2", &reloaded).unwrap(), record);
}

#[tokio::test]
async fn test_end_to_end_store_reload_decrypt_sign() {
    let record = CredentialRecord::new("k", "s", "p");
    let bundle = vault::encrypt("hunter2", &record).unwrap();
    assert_eq!(bundle.salt.len(), SALT_SIZE);
    assert_eq!(bundle.iv.len(), NONCE_SIZE);

    let store = InMemoryBundleStore::new();
    store.save("user-1", &bundle).await.unwrap();

    let reloaded = store.load("user-1").await.unwrap().expect("bundle stored");
    let restored = vault::decrypt("hunter2", &reloaded).unwrap();
    assert_eq!(restored, record);

    let signature = sign_request(
        &restored.secret_key,
        "2024-01-01T00:00:00.000Z",
        "GET",
        "/api/v5/account/balance",
        "",
    )
    .unwrap();

    // Well-formed base64 of an HMAC-SHA256 output.
    assert_eq!(STANDARD.decode(&signature).unwrap().len(), 32);
}
