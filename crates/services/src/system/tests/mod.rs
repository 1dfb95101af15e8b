// Path: crates/services/src/system/tests/mod.rs
use super::*;
use ae_api::program::ProgramDirectory;
use ae_api::state::MemoryState;
use ae_types::config::ChainConfig;
use std::collections::BTreeSet;

fn addr(b: u8) -> Address {
    Address([b; 32])
}

async fn run(
    state: &mut MemoryState,
    ix: &Instruction,
    signers: &[Address],
) -> Result<(), ProgramError> {
    let config = ChainConfig::default();
    let programs = ProgramDirectory::default();
    let signers: BTreeSet<Address> = signers.iter().copied().collect();
    let mut ctx = TxContext::new(
        1,
        signers.iter().next().copied().unwrap_or_default(),
        SYSTEM_PROGRAM_ID,
        signers,
        &config,
        &programs,
        false,
    );
    SystemProgram
        .process_instruction(state, &ix.accounts, &ix.method, &ix.params, &mut ctx)
        .await
}

#[tokio::test]
async fn test_create_account_charges_rent_exempt_minimum() {
    let config = ChainConfig::default();
    let (funder, fresh, owner) = (addr(1), addr(2), addr(9));
    let mut state = MemoryState::default();
    state
        .store_account(&funder, &AccountInfo::wallet(1_000_000_000))
        .unwrap();

    let ix = create_account_instruction(funder, fresh, 4096, owner, None).unwrap();
    run(&mut state, &ix, &[funder, fresh]).await.unwrap();

    let rent = config.rent_exempt_minimum(4096);
    assert_eq!(state.lamports(&funder).unwrap(), 1_000_000_000 - rent);
    let created = state.load_account(&fresh).unwrap().unwrap();
    assert_eq!(created.owner, owner);
    assert_eq!(created.space, 4096);
    assert_eq!(created.lamports, rent);
    assert!(created.data.is_empty());
}

#[tokio::test]
async fn test_create_account_rejects_existing_account() {
    let (funder, fresh) = (addr(1), addr(2));
    let mut state = MemoryState::default();
    state
        .store_account(&funder, &AccountInfo::wallet(1_000_000_000))
        .unwrap();
    state.store_account(&fresh, &AccountInfo::wallet(1)).unwrap();

    let ix = create_account_instruction(funder, fresh, 16, addr(9), None).unwrap();
    let err = run(&mut state, &ix, &[funder, fresh]).await.unwrap_err();
    assert_eq!(err, ProgramError::AccountAlreadyInUse(fresh));
}

#[tokio::test]
async fn test_create_account_requires_funds_and_signatures() {
    let (funder, fresh) = (addr(1), addr(2));
    let mut state = MemoryState::default();
    state.store_account(&funder, &AccountInfo::wallet(10)).unwrap();

    let ix = create_account_instruction(funder, fresh, 16, addr(9), None).unwrap();
    let err = run(&mut state, &ix, &[funder]).await.unwrap_err();
    assert_eq!(err, ProgramError::MissingRequiredSignature(fresh));

    let err = run(&mut state, &ix, &[funder, fresh]).await.unwrap_err();
    assert!(matches!(
        err,
        ProgramError::InsufficientFunds { available: 10, .. }
    ));
}

#[tokio::test]
async fn test_transfer_moves_lamports_and_creates_recipient() {
    let (from, to) = (addr(1), addr(2));
    let mut state = MemoryState::default();
    state.store_account(&from, &AccountInfo::wallet(100)).unwrap();

    run(&mut state, &transfer_instruction(from, to, 40).unwrap(), &[from])
        .await
        .unwrap();
    assert_eq!(state.lamports(&from).unwrap(), 60);
    assert_eq!(state.lamports(&to).unwrap(), 40);

    let err = run(&mut state, &transfer_instruction(from, to, 61).unwrap(), &[from])
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ProgramError::InsufficientFunds {
            needed: 61,
            available: 60
        }
    );
}

#[tokio::test]
async fn test_self_transfer_is_a_no_op() {
    let from = addr(1);
    let mut state = MemoryState::default();
    state.store_account(&from, &AccountInfo::wallet(100)).unwrap();
    run(&mut state, &transfer_instruction(from, from, 30).unwrap(), &[from])
        .await
        .unwrap();
    assert_eq!(state.lamports(&from).unwrap(), 100);
}

#[tokio::test]
async fn test_unknown_method_is_rejected() {
    let mut state = MemoryState::default();
    let mut ix = transfer_instruction(addr(1), addr(2), 1).unwrap();
    ix.method = "close_account@v1".into();
    let err = run(&mut state, &ix, &[addr(1)]).await.unwrap_err();
    assert!(matches!(err, ProgramError::UnknownMethod(_)));
}
