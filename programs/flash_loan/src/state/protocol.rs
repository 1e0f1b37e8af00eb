//! The protocol PDA is a data-less system account that owns one
//! associated token account per lent mint and signs transfers out of it.

use anchor_lang::constant;

#[constant]
pub const PROTOCOL_SEED: &[u8] = b"protocol";
