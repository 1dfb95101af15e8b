// Path: crates/services/src/commit_reveal/tests/mod.rs
use super::*;
use crate::system::SystemProgram;
use ae_api::program::ProgramDirectory;
use ae_api::state::MemoryState;
use ae_crypto::aead::{random_nonce, seal};
use ae_crypto::kem::x25519::BoxKeyPair;
use ae_types::app::AccountInfo;
use ae_types::config::ChainConfig;
use std::collections::BTreeSet;
use std::sync::Arc;

const PAYER: Address = Address([7u8; 32]);

struct Harness {
    state: MemoryState,
    config: ChainConfig,
    programs: ProgramDirectory,
    program_id: Address,
}

impl Harness {
    fn new() -> Self {
        let config = ChainConfig::default();
        let program_id = config.program_id;
        let programs = ProgramDirectory::new(vec![
            Arc::new(SystemProgram) as Arc<dyn OnChainProgram>,
            Arc::new(CommitRevealProgram::new(program_id)),
        ]);
        let mut state = MemoryState::default();
        state
            .store_account(&PAYER, &AccountInfo::wallet(10_000_000_000))
            .unwrap();
        Self {
            state,
            config,
            programs,
            program_id,
        }
    }

    async fn run(&mut self, ix: &Instruction) -> Result<(), ProgramError> {
        let signers = BTreeSet::from([PAYER]);
        let mut ctx = TxContext::new(
            1,
            PAYER,
            ix.program_id,
            signers,
            &self.config,
            &self.programs,
            false,
        );
        let program = self.programs.get_by_id(&ix.program_id).unwrap().clone();
        program
            .process_instruction(
                &mut self.state,
                &ix.accounts,
                &ix.method,
                &ix.params,
                &mut ctx,
            )
            .await
    }

    fn record(&self, address: &Address) -> EncryptedAccount {
        let account = self.state.load_account(address).unwrap().unwrap();
        decode_record(&account.data).unwrap()
    }
}

/// Alice seals `message` for Bob, as a committer would.
fn sealed_commitment(alice: &BoxKeyPair, bob: &BoxKeyPair, message: &[u8]) -> CommitValueParams {
    let nonce = random_nonce();
    let cipher_text = seal(
        message,
        &nonce,
        bob.public_key.as_bytes(),
        alice.secret_key.as_bytes(),
    )
    .unwrap();
    CommitValueParams {
        public_key: alice.public_key.0.to_vec(),
        nonce: nonce.to_vec(),
        cipher_text,
    }
}

#[tokio::test]
async fn test_commit_then_reveal_with_shared_key() {
    let mut h = Harness::new();
    let (alice, bob) = (BoxKeyPair::generate(), BoxKeyPair::generate());
    let params = sealed_commitment(&alice, &bob, b"the value");

    h.run(&commit_value_instruction(h.program_id, PAYER, params.clone()).unwrap())
        .await
        .unwrap();
    let (record, _) = record_address(&params.public_key, &h.program_id).unwrap();

    let committed = h.record(&record);
    assert_eq!(committed.public_key, params.public_key);
    assert!(!committed.is_revealed());

    let account = h.state.load_account(&record).unwrap().unwrap();
    assert_eq!(account.owner, h.program_id);
    assert_eq!(account.space, h.config.account_space);
    assert_eq!(
        account.lamports,
        h.config.rent_exempt_minimum(h.config.account_space)
    );
    assert!(account.data.starts_with(&record_discriminator()));

    let shared = bob.shared_key(&alice.public_key);
    h.run(&reveal_value_instruction(h.program_id, record, shared.as_bytes()).unwrap())
        .await
        .unwrap();

    let revealed = h.record(&record);
    assert_eq!(revealed.plain_text, b"the value");
    assert_eq!(revealed.public_key, params.public_key);
    assert_eq!(revealed.nonce, params.nonce);
    assert_eq!(revealed.cipher_text, params.cipher_text);
}

#[tokio::test]
async fn test_reveal_with_forged_key_fails_and_leaves_record() {
    let mut h = Harness::new();
    let (alice, bob) = (BoxKeyPair::generate(), BoxKeyPair::generate());
    let params = sealed_commitment(&alice, &bob, b"the value");
    h.run(&commit_value_instruction(h.program_id, PAYER, params.clone()).unwrap())
        .await
        .unwrap();
    let (record, _) = record_address(&params.public_key, &h.program_id).unwrap();
    let before = h.state.load_account(&record).unwrap();

    let forged = SharedKey::derive(bob.secret_key.as_bytes(), alice.public_key.as_bytes());
    let err = h
        .run(&reveal_value_instruction(h.program_id, record, forged.as_bytes()).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, ProgramError::DecryptionFailed);
    assert_eq!(h.state.load_account(&record).unwrap(), before);
    assert!(h.record(&record).plain_text.is_empty());
}

#[tokio::test]
async fn test_second_commit_for_same_key_is_rejected() {
    let mut h = Harness::new();
    let (alice, bob) = (BoxKeyPair::generate(), BoxKeyPair::generate());
    let first = sealed_commitment(&alice, &bob, b"first");
    let second = sealed_commitment(&alice, &bob, b"second");
    h.run(&commit_value_instruction(h.program_id, PAYER, first).unwrap())
        .await
        .unwrap();

    let err = h
        .run(&commit_value_instruction(h.program_id, PAYER, second.clone()).unwrap())
        .await
        .unwrap_err();
    let (record, _) = record_address(&second.public_key, &h.program_id).unwrap();
    assert_eq!(err, ProgramError::AccountAlreadyInUse(record));
}

#[tokio::test]
async fn test_commit_to_wrong_address_is_rejected() {
    let mut h = Harness::new();
    let (alice, bob, mallory) = (
        BoxKeyPair::generate(),
        BoxKeyPair::generate(),
        BoxKeyPair::generate(),
    );
    let params = sealed_commitment(&alice, &bob, b"value");
    let mut ix = commit_value_instruction(h.program_id, PAYER, params).unwrap();
    let (elsewhere, _) = record_address(&mallory.public_key.0, &h.program_id).unwrap();
    ix.accounts[1].address = elsewhere;

    let err = h.run(&ix).await.unwrap_err();
    assert!(matches!(err, ProgramError::InvalidSeeds { got, .. } if got == elsewhere));
    assert!(!h.state.account_exists(&elsewhere).unwrap());
}

#[tokio::test]
async fn test_commit_validates_field_lengths() {
    let mut h = Harness::new();
    let (alice, bob) = (BoxKeyPair::generate(), BoxKeyPair::generate());
    let good = sealed_commitment(&alice, &bob, b"value");

    let mut short_nonce = good.clone();
    short_nonce.nonce.truncate(12);
    let err = h
        .run(&commit_value_instruction(h.program_id, PAYER, short_nonce).unwrap())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ProgramError::InvalidLength {
            field: "nonce",
            expected: 24,
            got: 12
        }
    );

    let mut tag_only = good.clone();
    tag_only.cipher_text.truncate(TAG_LENGTH);
    let err = h
        .run(&commit_value_instruction(h.program_id, PAYER, tag_only).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProgramError::InvalidLength {
            field: "cipher_text",
            ..
        }
    ));

    // A 33-byte key is too long to be a PDA seed, so the builder refuses it;
    // assemble the instruction directly to reach the program's own check.
    let mut long_key = good;
    long_key.public_key.push(0);
    let (record, _) = record_address(&alice.public_key.0, &h.program_id).unwrap();
    let ix = Instruction::new(
        h.program_id,
        COMMIT_VALUE,
        &long_key,
        vec![
            AccountMeta::writable(PAYER, true),
            AccountMeta::writable(record, false),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID, false),
        ],
    )
    .unwrap();
    let err = h.run(&ix).await.unwrap_err();
    assert!(matches!(
        err,
        ProgramError::InvalidLength {
            field: "public_key",
            ..
        }
    ));
}

#[tokio::test]
async fn test_commit_requires_payer_signature() {
    let mut h = Harness::new();
    let (alice, bob) = (BoxKeyPair::generate(), BoxKeyPair::generate());
    let stranger = Address([8u8; 32]);
    let ix = commit_value_instruction(
        h.program_id,
        stranger,
        sealed_commitment(&alice, &bob, b"value"),
    )
    .unwrap();
    let err = h.run(&ix).await.unwrap_err();
    assert_eq!(err, ProgramError::MissingRequiredSignature(stranger));
}

#[tokio::test]
async fn test_reveal_twice_is_rejected() {
    let mut h = Harness::new();
    let (alice, bob) = (BoxKeyPair::generate(), BoxKeyPair::generate());
    let params = sealed_commitment(&alice, &bob, b"once");
    h.run(&commit_value_instruction(h.program_id, PAYER, params.clone()).unwrap())
        .await
        .unwrap();
    let (record, _) = record_address(&params.public_key, &h.program_id).unwrap();
    let reveal = reveal_value_instruction(
        h.program_id,
        record,
        alice.shared_key(&bob.public_key).as_bytes(),
    )
    .unwrap();

    h.run(&reveal).await.unwrap();
    assert_eq!(
        h.run(&reveal).await.unwrap_err(),
        ProgramError::AlreadyRevealed(record)
    );
}

#[tokio::test]
async fn test_reveal_checks_account_existence_and_owner() {
    let mut h = Harness::new();
    let key = [1u8; 32];

    let missing = Address([3u8; 32]);
    let err = h
        .run(&reveal_value_instruction(h.program_id, missing, &key).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err, ProgramError::AccountNotFound(missing));

    let err = h
        .run(&reveal_value_instruction(h.program_id, PAYER, &key).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, ProgramError::IllegalOwner { account, .. } if account == PAYER));
}

#[test]
fn test_record_data_rejects_foreign_discriminator() {
    let record = EncryptedAccount {
        public_key: vec![1; 32],
        nonce: vec![2; 24],
        cipher_text: vec![3; 20],
        plain_text: vec![],
    };
    let mut data = encode_record(&record).unwrap();
    assert_eq!(decode_record(&data).unwrap(), record);

    data[0] ^= 0xFF;
    assert!(matches!(
        decode_record(&data),
        Err(ProgramError::InvalidAccountData(_))
    ));
    assert!(decode_record(&[0u8; 4]).is_err());
}

#[tokio::test]
async fn test_commit_refuses_record_that_cannot_hold_its_plaintext() {
    let mut h = Harness::new();
    h.config.account_space = 512;
    let (alice, bob) = (BoxKeyPair::generate(), BoxKeyPair::generate());
    let params = sealed_commitment(&alice, &bob, &[1u8; 300]);
    let (record, _) = record_address(&params.public_key, &h.program_id).unwrap();

    let err = h
        .run(&commit_value_instruction(h.program_id, PAYER, params).unwrap())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProgramError::AccountDataTooSmall { space: 512, needed } if needed > 512
    ));
    assert!(!h.state.account_exists(&record).unwrap());
}
