// Path: crates/chain/src/local/tests/mod.rs
use super::*;
use crate::signing::sign_transaction;
use ae_api::program::OnChainProgram;
use ae_crypto::sign::eddsa::WalletKeyPair;
use ae_services::system::{transfer_instruction, SystemProgram};
use ae_types::app::{AccountMeta, Instruction, Message, SYSTEM_PROGRAM_ID};
use ae_types::error::ProgramError;
use async_trait::async_trait;
use std::any::Any;

const FUNDS: u64 = 1_000_000;

fn funded_chain() -> (LocalChain, WalletKeyPair) {
    let mut chain = LocalChain::new(ChainConfig::default());
    let payer = WalletKeyPair::generate();
    chain.airdrop(&payer.address(), FUNDS).unwrap();
    (chain, payer)
}

fn signed(chain: &LocalChain, payer: &WalletKeyPair, ixs: Vec<Instruction>) -> Transaction {
    let msg = Message::new(payer.address(), chain.height().unwrap(), ixs);
    sign_transaction(msg, &[payer]).unwrap()
}

#[test]
fn test_new_registers_builtin_programs() {
    let chain = LocalChain::new(ChainConfig::default());
    assert!(chain.programs().contains(&SYSTEM_PROGRAM_ID));
    assert!(chain.programs().contains(&chain.config().program_id));
    assert!(chain.programs().get::<CommitRevealProgram>().is_some());
    assert_eq!(chain.height().unwrap(), 0);
}

#[tokio::test]
async fn test_transfer_commits_and_charges_fee() {
    let (mut chain, payer) = funded_chain();
    let to = Address([2u8; 32]);
    let tx = signed(&chain, &payer, vec![transfer_instruction(payer.address(), to, 500).unwrap()]);

    let receipt = chain.process_transaction(&tx).await.unwrap();
    let fee = chain.config().lamports_per_signature;
    assert_eq!(receipt.fee, fee);
    assert_eq!(receipt.height, 1);
    assert_eq!(chain.height().unwrap(), 1);
    assert_eq!(chain.get_balance(&payer.address()).unwrap(), FUNDS - 500 - fee);
    assert_eq!(chain.get_balance(&to).unwrap(), 500);
    assert!(receipt.logs.iter().any(|l| l.ends_with("success")));
}

#[tokio::test]
async fn test_failed_transaction_changes_nothing() {
    let (mut chain, payer) = funded_chain();
    let to = Address([2u8; 32]);
    let tx = signed(
        &chain,
        &payer,
        vec![
            transfer_instruction(payer.address(), to, 100).unwrap(),
            transfer_instruction(payer.address(), to, FUNDS).unwrap(),
        ],
    );

    let err = chain.process_transaction(&tx).await.unwrap_err();
    assert!(matches!(
        err,
        TransactionError::InstructionFailed {
            index: 1,
            source: ProgramError::InsufficientFunds { .. }
        }
    ));
    assert_eq!(chain.get_balance(&payer.address()).unwrap(), FUNDS);
    assert_eq!(chain.get_account(&to).unwrap(), None);
    assert_eq!(chain.height().unwrap(), 0);
}

#[tokio::test]
async fn test_replayed_transaction_is_rejected() {
    let (mut chain, payer) = funded_chain();
    let tx = signed(
        &chain,
        &payer,
        vec![transfer_instruction(payer.address(), Address([2u8; 32]), 1).unwrap()],
    );
    chain.process_transaction(&tx).await.unwrap();
    assert_eq!(
        chain.process_transaction(&tx).await.unwrap_err(),
        TransactionError::AlreadyProcessed
    );
}

#[tokio::test]
async fn test_tampered_transaction_is_rejected() {
    let (mut chain, payer) = funded_chain();
    let to = Address([2u8; 32]);
    let mut tx = signed(&chain, &payer, vec![transfer_instruction(payer.address(), to, 1).unwrap()]);
    tx.message.instructions = vec![transfer_instruction(payer.address(), to, 900_000).unwrap()];

    assert_eq!(
        chain.process_transaction(&tx).await.unwrap_err(),
        TransactionError::InvalidSignature(payer.address())
    );
    assert_eq!(chain.get_balance(&payer.address()).unwrap(), FUNDS);

    tx.signatures.clear();
    assert_eq!(
        chain.process_transaction(&tx).await.unwrap_err(),
        TransactionError::SignatureMismatch
    );
}

#[tokio::test]
async fn test_stale_and_future_heights_expire() {
    let config = ChainConfig {
        max_transaction_age: 1,
        ..ChainConfig::default()
    };
    let mut chain = LocalChain::new(config);
    let payer = WalletKeyPair::generate();
    chain.airdrop(&payer.address(), FUNDS).unwrap();
    let to = Address([2u8; 32]);

    let future = sign_transaction(
        Message::new(payer.address(), 5, vec![transfer_instruction(payer.address(), to, 1).unwrap()]),
        &[&payer],
    )
    .unwrap();
    assert_eq!(
        chain.process_transaction(&future).await.unwrap_err(),
        TransactionError::Expired {
            recent: 5,
            current: 0
        }
    );

    let stale = signed(&chain, &payer, vec![transfer_instruction(payer.address(), to, 1).unwrap()]);
    for amount in [2, 3] {
        let tx = signed(&chain, &payer, vec![transfer_instruction(payer.address(), to, amount).unwrap()]);
        chain.process_transaction(&tx).await.unwrap();
    }
    assert!(matches!(
        chain.process_transaction(&stale).await.unwrap_err(),
        TransactionError::Expired { recent: 0, .. }
    ));
}

fn processed_signatures(chain: &LocalChain) -> Vec<Vec<u8>> {
    chain
        .state
        .prefix_scan(PROCESSED_SIGNATURE_PREFIX)
        .unwrap()
        .map(|entry| entry.unwrap().0.to_vec())
        .collect()
}

#[tokio::test]
async fn test_expired_signatures_are_pruned_on_commit() {
    let config = ChainConfig {
        max_transaction_age: 2,
        ..ChainConfig::default()
    };
    let mut chain = LocalChain::new(config);
    let payer = WalletKeyPair::generate();
    chain.airdrop(&payer.address(), FUNDS).unwrap();
    let to = Address([2u8; 32]);

    let mut committed = Vec::new();
    for amount in 1..=5 {
        let tx = signed(&chain, &payer, vec![transfer_instruction(payer.address(), to, amount).unwrap()]);
        chain.process_transaction(&tx).await.unwrap();
        committed.push(tx);
        assert!(processed_signatures(&chain).len() <= 2);
    }

    // Only the last two inclusions can still pass the expiry check.
    let retained = processed_signatures(&chain);
    assert_eq!(retained.len(), 2);
    for tx in &committed[3..] {
        let id = tx.id().unwrap();
        let key = [PROCESSED_SIGNATURE_PREFIX, id.as_slice()].concat();
        assert!(retained.contains(&key));
    }

    // A pruned transaction is still refused, now as expired.
    assert!(matches!(
        chain.process_transaction(&committed[0]).await.unwrap_err(),
        TransactionError::Expired { recent: 0, current: 5 }
    ));
    assert_eq!(
        chain.process_transaction(&committed[4]).await.unwrap_err(),
        TransactionError::AlreadyProcessed
    );
}

#[tokio::test]
async fn test_fee_payer_must_cover_fee() {
    let mut chain = LocalChain::new(ChainConfig::default());
    let payer = WalletKeyPair::generate();
    chain.airdrop(&payer.address(), 10).unwrap();
    let tx = signed(
        &chain,
        &payer,
        vec![transfer_instruction(payer.address(), Address([2u8; 32]), 1).unwrap()],
    );
    assert!(matches!(
        chain.process_transaction(&tx).await.unwrap_err(),
        TransactionError::InsufficientFundsForFee { available: 10, .. }
    ));
}

#[tokio::test]
async fn test_structural_checks() {
    let (mut chain, payer) = funded_chain();

    let empty = signed(&chain, &payer, vec![]);
    assert_eq!(
        chain.process_transaction(&empty).await.unwrap_err(),
        TransactionError::Empty
    );

    let unknown = Address([0xEE; 32]);
    let tx = signed(
        &chain,
        &payer,
        vec![Instruction {
            program_id: unknown,
            accounts: vec![],
            method: "noop@v1".into(),
            params: vec![],
        }],
    );
    assert_eq!(
        chain.process_transaction(&tx).await.unwrap_err(),
        TransactionError::UnknownProgram(unknown)
    );

    let mut huge = transfer_instruction(payer.address(), Address([2u8; 32]), 1).unwrap();
    huge.params = vec![0u8; 2048];
    let tx = signed(&chain, &payer, vec![huge]);
    assert!(matches!(
        chain.process_transaction(&tx).await.unwrap_err(),
        TransactionError::TooLarge { max: 1232, .. }
    ));
}

#[tokio::test]
async fn test_simulation_discards_writes() {
    let (mut chain, payer) = funded_chain();
    let to = Address([2u8; 32]);
    let tx = signed(&chain, &payer, vec![transfer_instruction(payer.address(), to, 7).unwrap()]);

    let preview = chain.simulate_transaction(&tx).await.unwrap();
    assert_eq!(preview.height, 1);
    assert_eq!(chain.get_balance(&to).unwrap(), 0);
    assert_eq!(chain.height().unwrap(), 0);

    // The simulated signature is not consumed.
    chain.process_transaction(&tx).await.unwrap();
    assert_eq!(chain.get_balance(&to).unwrap(), 7);
}

/// Credits one lamport to its first account, ignoring the writable flag.
struct Scribbler;

#[async_trait]
impl OnChainProgram for Scribbler {
    fn id(&self) -> &str {
        "scribbler"
    }
    fn program_id(&self) -> Address {
        Address([0x5C; 32])
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    async fn process_instruction(
        &self,
        state: &mut dyn StateAccess,
        accounts: &[AccountMeta],
        _method: &str,
        _params: &[u8],
        _ctx: &mut TxContext<'_>,
    ) -> Result<(), ProgramError> {
        let target = accounts
            .first()
            .ok_or(ProgramError::NotEnoughAccountKeys {
                expected: 1,
                got: 0,
            })?
            .address;
        let mut account = state.load_account(&target)?.unwrap_or_default();
        account.lamports += 1;
        state.store_account(&target, &account)?;
        Ok(())
    }
}

#[tokio::test]
async fn test_write_to_readonly_account_is_rejected() {
    let mut chain = LocalChain::with_programs(
        ChainConfig::default(),
        vec![
            Arc::new(SystemProgram) as Arc<dyn OnChainProgram>,
            Arc::new(Scribbler),
        ],
    );
    let payer = WalletKeyPair::generate();
    chain.airdrop(&payer.address(), FUNDS).unwrap();
    let victim = Address([3u8; 32]);

    let scribble = |meta: AccountMeta| Instruction {
        program_id: Address([0x5C; 32]),
        accounts: vec![meta],
        method: "scribble@v1".into(),
        params: vec![],
    };

    let tx = signed(&chain, &payer, vec![scribble(AccountMeta::readonly(victim, false))]);
    assert_eq!(
        chain.process_transaction(&tx).await.unwrap_err(),
        TransactionError::ReadonlyAccountModified {
            index: 0,
            account: victim
        }
    );

    let tx = signed(&chain, &payer, vec![scribble(AccountMeta::writable(victim, false))]);
    chain.process_transaction(&tx).await.unwrap();
    assert_eq!(chain.get_balance(&victim).unwrap(), 1);
}
