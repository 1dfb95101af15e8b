// Path: crates/crypto/src/kem/x25519/tests/mod.rs
use super::*;

#[test]
fn test_shared_key_agrees_between_parties() {
    let alice = BoxKeyPair::generate();
    let bob = BoxKeyPair::generate();

    let at_alice = alice.shared_key(&bob.public_key);
    let at_bob = bob.shared_key(&alice.public_key);
    assert_eq!(at_alice.as_bytes(), at_bob.as_bytes());
}

#[test]
fn test_swapped_arguments_yield_a_different_key() {
    let alice = BoxKeyPair::generate();
    let bob = BoxKeyPair::generate();

    let honest = SharedKey::derive(alice.public_key.as_bytes(), bob.secret_key.as_bytes());
    let forged = SharedKey::derive(bob.secret_key.as_bytes(), alice.public_key.as_bytes());
    assert_ne!(honest.as_bytes(), forged.as_bytes());
}

#[test]
fn test_keypair_rebuilds_from_secret() {
    let kp = BoxKeyPair::generate();
    let again = BoxKeyPair::from_secret_bytes(kp.secret_key.as_bytes()).unwrap();
    assert_eq!(kp.public_key, again.public_key);
}

#[test]
fn test_nacl_box_beforenm_vector() {
    // Alice/Bob keys from the NaCl test suite (tests/box.c).
    let alice_sk =
        hex::decode("77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a").unwrap();
    let bob_pk =
        hex::decode("de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f").unwrap();
    let key = SharedKey::derive_from_slices(&bob_pk, &alice_sk).unwrap();
    assert_eq!(
        hex::encode(key.as_bytes()),
        "1b27556473e985d462cd51197a9a46c76009549eac6474f206c4ee0844f68389"
    );
}

#[test]
fn test_rejects_wrong_key_lengths() {
    assert!(matches!(
        SharedKey::derive_from_slices(&[0u8; 31], &[0u8; 32]),
        Err(CryptoError::InvalidKey(_))
    ));
    assert!(BoxPublicKey::from_slice(&[1u8; 33]).is_err());
    assert!(SharedKey::from_slice(&[0u8; 32]).is_ok());
}
