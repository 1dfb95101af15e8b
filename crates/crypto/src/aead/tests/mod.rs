// Path: crates/crypto/src/aead/tests/mod.rs
use super::*;
use crate::kem::x25519::BoxKeyPair;

#[test]
fn test_box_opens_with_recipient_shared_key() {
    let alice = BoxKeyPair::generate();
    let bob = BoxKeyPair::generate();
    let nonce = random_nonce();
    let plain = b"12345678";

    let sealed = seal(
        plain,
        &nonce,
        bob.public_key.as_bytes(),
        alice.secret_key.as_bytes(),
    )
    .unwrap();
    assert_eq!(sealed.len(), plain.len() + TAG_LENGTH);

    let key = bob.shared_key(&alice.public_key);
    assert_eq!(open_with_shared_key(&key, &nonce, &sealed).unwrap(), plain);
}

#[test]
fn test_wrong_key_fails_authentication() {
    let alice = BoxKeyPair::generate();
    let bob = BoxKeyPair::generate();
    let nonce = random_nonce();
    let sealed = seal(
        b"12345678",
        &nonce,
        bob.public_key.as_bytes(),
        alice.secret_key.as_bytes(),
    )
    .unwrap();

    let forged = SharedKey::derive(bob.secret_key.as_bytes(), alice.public_key.as_bytes());
    assert_eq!(
        open_with_shared_key(&forged, &nonce, &sealed),
        Err(CryptoError::Authentication)
    );
}

#[test]
fn test_tampering_is_detected() {
    let kp = BoxKeyPair::generate();
    let key = kp.shared_key(&BoxKeyPair::generate().public_key);
    let nonce = random_nonce();
    let mut sealed = seal_with_shared_key(&key, &nonce, b"payload").unwrap();

    if let Some(last) = sealed.last_mut() {
        *last ^= 0x01;
    }
    assert_eq!(
        open_with_shared_key(&key, &nonce, &sealed),
        Err(CryptoError::Authentication)
    );

    let mut other_nonce = nonce;
    other_nonce[0] ^= 0x80;
    let sealed = seal_with_shared_key(&key, &nonce, b"payload").unwrap();
    assert!(open_with_shared_key(&key, &other_nonce, &sealed).is_err());
}

#[test]
fn test_rejects_bad_nonce_and_short_ciphertext() {
    let key = SharedKey::from_slice(&[3u8; 32]).unwrap();
    assert_eq!(
        seal_with_shared_key(&key, &[0u8; 12], b"x"),
        Err(CryptoError::InvalidNonce {
            expected: NONCE_LENGTH,
            got: 12
        })
    );
    assert_eq!(
        open_with_shared_key(&key, &[0u8; NONCE_LENGTH], &[0u8; 4]),
        Err(CryptoError::Authentication)
    );
}

#[test]
fn test_nacl_box_vector_prefix() {
    // Keystream prefix of the `crypto_box` vector from NaCl's tests/box.c.
    // The tag covers the full 131-byte message there, so only the encrypted
    // bytes of this shorter prefix are comparable.
    let alice_sk =
        hex::decode("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a").unwrap();
    let bob_pk =
        hex::decode("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f").unwrap();
    let nonce = hex::decode("69696ee955b62b73cd62bda875fc73d68219e0036b7a0b37").unwrap();
    let key = SharedKey::derive_from_slices(&bob_pk, &alice_sk).unwrap();

    let plain = hex::decode("be075fc53c81f2d5cf141316ebeb0c7b5228c52a4c62cbd44b66849b64244ffc").unwrap();
    let sealed = seal_with_shared_key(&key, &nonce, &plain).unwrap();
    assert_eq!(
        hex::encode(&sealed[TAG_LENGTH..TAG_LENGTH + 8]),
        "8e993b9f48681273"
    );
}
