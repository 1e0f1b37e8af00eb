//! Instructions sysvar introspection for the borrow/repay pair.
//!
//! Borrow checks
//! - it is executing as a top-level instruction of this program, not through CPI
//! - it is the only top-level borrow in the transaction
//! - the last instruction of the transaction is a repay using the same token accounts
//!
//! Repay
//! - looks up the borrow that precedes it to learn how much must be paid back

use anchor_lang::{
    prelude::*,
    solana_program::{
        instruction::Instruction,
        sysvar::instructions::{load_current_index_checked, load_instruction_at_checked},
    },
    Discriminator,
};

use crate::{
    errors::FlashLoanError,
    instruction,
    instructions::{BORROWER_ATA_ACCOUNT_IDX, PROTOCOL_ATA_ACCOUNT_IDX},
};

/// Read access to the top-level instructions of the executing transaction
pub trait InstructionSource {
    fn num_instructions(&self) -> Result<usize>;

    fn current_index(&self) -> Result<usize>;

    fn instruction_at(&self, index: usize) -> Result<Instruction>;
}

impl<T: InstructionSource + ?Sized> InstructionSource for &T {
    fn num_instructions(&self) -> Result<usize> {
        (*self).num_instructions()
    }

    fn current_index(&self) -> Result<usize> {
        (*self).current_index()
    }

    fn instruction_at(&self, index: usize) -> Result<Instruction> {
        (*self).instruction_at(index)
    }
}

/// The instructions sysvar account
impl<'info> InstructionSource for AccountInfo<'info> {
    fn num_instructions(&self) -> Result<usize> {
        let data = self.try_borrow_data()?;
        let len: [u8; 2] = data
            .get(0..2)
            .and_then(|s| s.try_into().ok())
            .ok_or(FlashLoanError::InvalidInstructionsSysvar)?;
        Ok(u16::from_le_bytes(len).into())
    }

    fn current_index(&self) -> Result<usize> {
        Ok(load_current_index_checked(self)?.into())
    }

    fn instruction_at(&self, index: usize) -> Result<Instruction> {
        load_instruction_at_checked(index, self)
            .map_err(|_| FlashLoanError::InvalidInstructionIndex.into())
    }
}

/// The token accounts a borrow/repay pair must agree on
#[derive(Clone, Copy, Debug)]
pub struct LoanTokenAccounts {
    pub borrower_ata: Pubkey,
    pub protocol_ata: Pubkey,
}

impl LoanTokenAccounts {
    /// Checks `ix`'s accounts at the fixed `Loan` positions
    pub fn check(&self, ix: &Instruction) -> Result<()> {
        require_keys_eq!(
            ix.accounts
                .get(BORROWER_ATA_ACCOUNT_IDX)
                .ok_or(FlashLoanError::InvalidBorrowerAta)?
                .pubkey,
            self.borrower_ata,
            FlashLoanError::InvalidBorrowerAta
        );
        require_keys_eq!(
            ix.accounts
                .get(PROTOCOL_ATA_ACCOUNT_IDX)
                .ok_or(FlashLoanError::InvalidProtocolAta)?
                .pubkey,
            self.protocol_ata,
            FlashLoanError::InvalidProtocolAta
        );
        Ok(())
    }
}

pub fn is_borrow_ix(ix: &Instruction) -> bool {
    ix.program_id == crate::ID && ix.data.starts_with(&instruction::Borrow::DISCRIMINATOR)
}

pub fn is_repay_ix(ix: &Instruction) -> bool {
    ix.program_id == crate::ID && ix.data.starts_with(&instruction::Repay::DISCRIMINATOR)
}

/// Reads the u64 `borrow_amount` arg following the discriminator
pub fn borrow_amount(borrow_ix: &Instruction) -> Result<u64> {
    let amount: [u8; 8] = borrow_ix
        .data
        .get(8..16)
        .and_then(|s| s.try_into().ok())
        .ok_or(FlashLoanError::InvalidIx)?;
    Ok(u64::from_le_bytes(amount))
}

pub fn check_repay_ix(repay_ix: &Instruction, token_accounts: &LoanTokenAccounts) -> Result<()> {
    require_keys_eq!(
        repay_ix.program_id,
        crate::ID,
        FlashLoanError::InvalidProgram
    );
    require!(is_repay_ix(repay_ix), FlashLoanError::InvalidIx);
    // checking the ATAs covers both the wallet and the mint
    token_accounts.check(repay_ix)
}

pub fn check_borrow<S: InstructionSource>(
    ixs: S,
    token_accounts: &LoanTokenAccounts,
) -> Result<()> {
    let len = ixs.num_instructions()?;
    let current = ixs.current_index()?;
    require!(current < len, FlashLoanError::InvalidInstructionIndex);

    let current_ix = ixs.instruction_at(current)?;
    require!(is_borrow_ix(&current_ix), FlashLoanError::ProgramMismatch);

    for i in (0..len).filter(|i| *i != current) {
        require!(
            !is_borrow_ix(&ixs.instruction_at(i)?),
            FlashLoanError::DuplicateBorrowIx
        );
    }

    // current < len so len >= 1
    let last = len - 1;
    require!(last > current, FlashLoanError::MissingRepayIx);
    let repay_ix = ixs
        .instruction_at(last)
        .map_err(|_| FlashLoanError::MissingRepayIx)?;
    check_repay_ix(&repay_ix, token_accounts)
}

/// Returns the amount lent out by the borrow preceding the current instruction.
///
/// A transaction holds at most one borrow, so a borrow whose token accounts
/// differ from `token_accounts` is an error rather than skipped.
pub fn find_borrowed_amount<S: InstructionSource>(
    ixs: S,
    token_accounts: &LoanTokenAccounts,
) -> Result<u64> {
    let current = ixs.current_index()?;
    for i in 0..current {
        let ix = ixs.instruction_at(i)?;
        if is_borrow_ix(&ix) {
            token_accounts.check(&ix)?;
            return borrow_amount(&ix);
        }
    }
    Err(FlashLoanError::MissingBorrowIx.into())
}
