use anchor_lang::prelude::*;
use core::mem::size_of;

pub trait AnchorLen {
    const LEN: usize;
}

/// 8-byte discriminator + borsh-serialized size.
/// Only valid for accounts whose fields have no padding and no
/// variable-length members.
impl<T: AccountSerialize + AccountDeserialize> AnchorLen for T {
    const LEN: usize = 8 + size_of::<Self>();
}
