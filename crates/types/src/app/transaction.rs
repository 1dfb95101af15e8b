// Path: crates/types/src/app/transaction.rs
//! Instructions, messages and signed transactions.

use super::Address;
use crate::codec;
use parity_scale_codec::{Decode, Encode};

/// Describes one account an instruction touches and how.
#[derive(Encode, Decode, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccountMeta {
    /// The account's address.
    pub address: Address,
    /// Whether the transaction must carry a signature for this address.
    pub is_signer: bool,
    /// Whether the instruction may modify the account.
    pub is_writable: bool,
}

impl AccountMeta {
    /// A writable account reference.
    pub fn writable(address: Address, is_signer: bool) -> Self {
        Self {
            address,
            is_signer,
            is_writable: true,
        }
    }

    /// A read-only account reference.
    pub fn readonly(address: Address, is_signer: bool) -> Self {
        Self {
            address,
            is_signer,
            is_writable: false,
        }
    }
}

/// A single call into an on-chain program.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The program that executes this instruction.
    pub program_id: Address,
    /// The accounts the program may read or write, in the order it expects them.
    pub accounts: Vec<AccountMeta>,
    /// The versioned method name, e.g. `commit_value@v1`.
    pub method: String,
    /// SCALE-encoded method parameters.
    pub params: Vec<u8>,
}

impl Instruction {
    /// Builds an instruction, encoding `params` canonically.
    pub fn new<P: Encode>(
        program_id: Address,
        method: &str,
        params: &P,
        accounts: Vec<AccountMeta>,
    ) -> Result<Self, String> {
        Ok(Self {
            program_id,
            accounts,
            method: method.to_string(),
            params: codec::to_bytes_canonical(params)?,
        })
    }
}

/// The signed portion of a transaction.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// The fee payer. Always the first required signer.
    pub payer: Address,
    /// The chain height the client observed when building the message.
    pub recent_height: u64,
    /// Instructions, executed in order and atomically.
    pub instructions: Vec<Instruction>,
}

impl Message {
    /// Creates a message paid for by `payer`.
    pub fn new(payer: Address, recent_height: u64, instructions: Vec<Instruction>) -> Self {
        Self {
            payer,
            recent_height,
            instructions,
        }
    }

    /// The canonical bytes every signer signs.
    pub fn to_sign_bytes(&self) -> Result<Vec<u8>, String> {
        codec::to_bytes_canonical(self)
    }

    /// Every address that must sign, payer first, without duplicates.
    pub fn required_signers(&self) -> Vec<Address> {
        let mut signers = vec![self.payer];
        for meta in self.instructions.iter().flat_map(|ix| ix.accounts.iter()) {
            if meta.is_signer && !signers.contains(&meta.address) {
                signers.push(meta.address);
            }
        }
        signers
    }
}

/// A detached ed25519 signature by `signer` over the message bytes.
#[derive(Encode, Decode, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxSignature {
    /// The signing address (an ed25519 public key).
    pub signer: Address,
    /// The 64-byte ed25519 signature.
    pub signature: [u8; 64],
}

/// A message together with its signatures.
#[derive(Encode, Decode, Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// The signed content.
    pub message: Message,
    /// Signatures, in `Message::required_signers` order.
    pub signatures: Vec<TxSignature>,
}

impl Transaction {
    /// Wraps a message without any signatures yet.
    pub fn unsigned(message: Message) -> Self {
        Self {
            message,
            signatures: Vec::new(),
        }
    }

    /// The payer's signature, which doubles as the transaction id.
    pub fn id(&self) -> Option<[u8; 64]> {
        self.signatures.first().map(|s| s.signature)
    }

    /// Size of the canonical wire encoding.
    pub fn encoded_len(&self) -> usize {
        self.encoded_size()
    }
}

/// The result of a committed transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxReceipt {
    /// The transaction id (payer signature).
    pub signature: [u8; 64],
    /// The block height the transaction was committed at.
    pub height: u64,
    /// Lamports charged to the payer.
    pub fee: u64,
    /// Program log lines emitted while executing.
    pub logs: Vec<String>,
}

impl TxReceipt {
    /// The transaction id rendered in base58.
    pub fn signature_b58(&self) -> String {
        bs58::encode(self.signature).into_string()
    }
}
