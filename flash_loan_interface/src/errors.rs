use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, Error, num_derive::FromPrimitive, PartialEq)]
pub enum FlashLoanError {
    #[error("Invalid instruction")]
    InvalidIx = 6000,
    #[error("Invalid instruction index")]
    InvalidInstructionIndex = 6001,
    #[error("Invalid amount")]
    InvalidAmount = 6002,
    #[error("Not enough funds")]
    NotEnoughFunds = 6003,
    #[error("Program Mismatch")]
    ProgramMismatch = 6004,
    #[error("Invalid program")]
    InvalidProgram = 6005,
    #[error("Invalid borrower ATA")]
    InvalidBorrowerAta = 6006,
    #[error("Invalid protocol ATA")]
    InvalidProtocolAta = 6007,
    #[error("Missing repay instruction")]
    MissingRepayIx = 6008,
    #[error("Missing borrow instruction")]
    MissingBorrowIx = 6009,
    #[error("Overflow")]
    Overflow = 6010,
    #[error("The provided fee is invalid")]
    InvalidFee = 6011,
    #[error("The provided fee authority does not have the authority over the flash loan fee account")]
    InvalidFeeAuthority = 6012,
    #[error("Only one borrow instruction is allowed per transaction")]
    DuplicateBorrowIx = 6013,
    #[error("Could not find PDA bump")]
    PdaBumpNotCached = 6014,
    #[error("Wrong instructions sysvar account")]
    InvalidInstructionsSysvar = 6015,
}

impl From<FlashLoanError> for ProgramError {
    fn from(e: FlashLoanError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for FlashLoanError {
    fn type_of() -> &'static str {
        "FlashLoanError"
    }
}

impl PrintProgramError for FlashLoanError {
    fn print<E>(&self)
    where
        E: 'static
            + std::error::Error
            + DecodeError<E>
            + PrintProgramError
            + num_traits::FromPrimitive,
    {
        msg!(&self.to_string());
    }
}

#[cfg(test)]
mod tests {
    use num_traits::FromPrimitive;

    use super::*;

    #[test]
    fn decodes_custom_codes() {
        assert_eq!(
            FlashLoanError::from_u32(6008),
            Some(FlashLoanError::MissingRepayIx)
        );
        assert_eq!(FlashLoanError::from_u32(6100), None);
        assert_eq!(
            ProgramError::from(FlashLoanError::Overflow),
            ProgramError::Custom(6010)
        );
    }
}
