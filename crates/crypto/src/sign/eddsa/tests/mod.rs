// Path: crates/crypto/src/sign/eddsa/tests/mod.rs
use super::*;

#[test]
fn test_sign_and_verify() {
    let wallet = WalletKeyPair::generate();
    let sig = wallet.sign(b"message");
    assert!(verify(&wallet.address(), b"message", &sig).is_ok());
}

#[test]
fn test_verify_rejects_other_message_and_signer() {
    let wallet = WalletKeyPair::generate();
    let other = WalletKeyPair::generate();
    let sig = wallet.sign(b"message");

    assert_eq!(
        verify(&wallet.address(), b"messagf", &sig),
        Err(CryptoError::InvalidSignature)
    );
    assert_eq!(
        verify(&other.address(), b"message", &sig),
        Err(CryptoError::InvalidSignature)
    );
}

#[test]
fn test_seed_roundtrip() {
    let wallet = WalletKeyPair::generate();
    let again = WalletKeyPair::from_seed(&*wallet.seed()).unwrap();
    assert_eq!(wallet.address(), again.address());
    assert!(WalletKeyPair::from_seed(&[0u8; 31]).is_err());
}
