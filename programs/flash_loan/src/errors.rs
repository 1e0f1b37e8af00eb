use anchor_lang::prelude::*;

/// Order is part of the on-chain ABI, keep in sync with
/// `flash_loan_interface::FlashLoanError`
#[error_code]
pub enum FlashLoanError {
    #[msg("Invalid instruction")]
    InvalidIx, // 0x1770

    #[msg("Invalid instruction index")]
    InvalidInstructionIndex, // 0x1771

    #[msg("Invalid amount")]
    InvalidAmount, // 0x1772

    #[msg("Not enough funds")]
    NotEnoughFunds, // 0x1773

    #[msg("Program Mismatch")]
    ProgramMismatch, // 0x1774

    #[msg("Invalid program")]
    InvalidProgram, // 0x1775

    #[msg("Invalid borrower ATA")]
    InvalidBorrowerAta, // 0x1776

    #[msg("Invalid protocol ATA")]
    InvalidProtocolAta, // 0x1777

    #[msg("Missing repay instruction")]
    MissingRepayIx, // 0x1778

    #[msg("Missing borrow instruction")]
    MissingBorrowIx, // 0x1779

    #[msg("Overflow")]
    Overflow, // 0x177a

    #[msg("The provided fee is invalid")]
    InvalidFee, // 0x177b

    #[msg("The provided fee authority does not have the authority over the flash loan fee account")]
    InvalidFeeAuthority, // 0x177c

    #[msg("Only one borrow instruction is allowed per transaction")]
    DuplicateBorrowIx, // 0x177d

    #[msg("Could not find PDA bump")]
    PdaBumpNotCached, // 0x177e

    #[msg("Wrong instructions sysvar account")]
    InvalidInstructionsSysvar, // 0x177f
}
