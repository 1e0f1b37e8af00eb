use crate::*;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

pub const FLASH_LOAN_FEE_SEED: &[u8] = b"flashloanfee";
pub const PROTOCOL_SEED: &[u8] = b"protocol";

pub const FLASH_LOAN_FEE_ACCOUNT_DISCM: [u8; 8] = [211, 113, 211, 138, 191, 108, 64, 160];
#[derive(Clone, Debug, PartialEq, BorshDeserialize, BorshSerialize)]
pub struct FlashLoanFee {
    pub fee_authority: Pubkey,
    pub fee_ratio: Rational,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlashLoanFeeAccount(pub FlashLoanFee);
impl BorshSerialize for FlashLoanFeeAccount {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        FLASH_LOAN_FEE_ACCOUNT_DISCM.serialize(writer)?;
        self.0.serialize(writer)
    }
}
impl FlashLoanFeeAccount {
    pub fn deserialize(buf: &mut &[u8]) -> std::io::Result<Self> {
        let maybe_discm = <[u8; 8]>::deserialize(buf)?;
        if maybe_discm != FLASH_LOAN_FEE_ACCOUNT_DISCM {
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!(
                    "discm does not match. Expected: {:?}. Received: {:?}",
                    FLASH_LOAN_FEE_ACCOUNT_DISCM, maybe_discm
                ),
            ));
        }
        Ok(Self(FlashLoanFee::deserialize(buf)?))
    }
}

pub fn find_flash_loan_fee_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[FLASH_LOAN_FEE_SEED], &crate::ID)
}

pub fn find_protocol_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROTOCOL_SEED], &crate::ID)
}
