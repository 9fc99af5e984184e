//! The two fixed-shape XDR values the bootstrap needs.
//!
//! - `HashIdPreimage::ContractId`, hashed to obtain a contract id.
//! - `LedgerKey::ContractData` for a contract's instance entry, sent to RPC to
//!   check whether the contract exists.
//!
//! Both are plain concatenations of big-endian `u32` discriminants and fixed
//! 32-byte opaques, so they are written directly.

use crate::address::ChainAddress;

const ENVELOPE_TYPE_CONTRACT_ID: u32 = 8;
const CONTRACT_ID_PREIMAGE_FROM_ADDRESS: u32 = 0;

const SC_ADDRESS_TYPE_ACCOUNT: u32 = 0;
const SC_ADDRESS_TYPE_CONTRACT: u32 = 1;
const PUBLIC_KEY_TYPE_ED25519: u32 = 0;

const LEDGER_ENTRY_TYPE_CONTRACT_DATA: u32 = 6;
const SCV_LEDGER_KEY_CONTRACT_INSTANCE: u32 = 20;
const CONTRACT_DATA_DURABILITY_PERSISTENT: u32 = 1;

fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn write_sc_address(out: &mut Vec<u8>, address: &ChainAddress) {
    match address {
        ChainAddress::Account(key) => {
            write_u32(out, SC_ADDRESS_TYPE_ACCOUNT);
            write_u32(out, PUBLIC_KEY_TYPE_ED25519);
            out.extend_from_slice(key);
        }
        ChainAddress::Contract(id) => {
            write_u32(out, SC_ADDRESS_TYPE_CONTRACT);
            out.extend_from_slice(id);
        }
    }
}

/// Preimage whose SHA-256 is the id of a contract deployed by `deployer`
/// with `salt` on the network identified by `network_id`.
pub fn contract_id_preimage(
    network_id: &[u8; 32],
    deployer: &ChainAddress,
    salt: &[u8; 32],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(112);
    write_u32(&mut out, ENVELOPE_TYPE_CONTRACT_ID);
    out.extend_from_slice(network_id);
    write_u32(&mut out, CONTRACT_ID_PREIMAGE_FROM_ADDRESS);
    write_sc_address(&mut out, deployer);
    out.extend_from_slice(salt);
    out
}

/// Ledger key of the persistent instance entry every live contract has.
pub fn contract_instance_key(contract: &ChainAddress) -> Vec<u8> {
    let mut out = Vec::with_capacity(48);
    write_u32(&mut out, LEDGER_ENTRY_TYPE_CONTRACT_DATA);
    write_sc_address(&mut out, contract);
    write_u32(&mut out, SCV_LEDGER_KEY_CONTRACT_INSTANCE);
    write_u32(&mut out, CONTRACT_DATA_DURABILITY_PERSISTENT);
    out
}
