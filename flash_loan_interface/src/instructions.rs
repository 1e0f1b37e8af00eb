use crate::*;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::AccountInfo,
    entrypoint::ProgramResult,
    instruction::{AccountMeta, Instruction},
    program::{invoke, invoke_signed},
    pubkey::Pubkey,
};
pub const INITIALIZE_IX_ACCOUNTS_LEN: usize = 3usize;
#[derive(Copy, Clone, Debug)]
pub struct InitializeKeys {
    pub payer: Pubkey,
    pub flash_loan_fee_account: Pubkey,
    pub system_program: Pubkey,
}
impl From<&InitializeKeys> for [AccountMeta; INITIALIZE_IX_ACCOUNTS_LEN] {
    fn from(keys: &InitializeKeys) -> Self {
        [
            AccountMeta::new(keys.payer, true),
            AccountMeta::new(keys.flash_loan_fee_account, false),
            AccountMeta::new_readonly(keys.system_program, false),
        ]
    }
}
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug)]
pub struct InitializeIxArgs {}
#[derive(Copy, Clone, Debug)]
pub struct InitializeIxData<'me>(pub &'me InitializeIxArgs);
pub const INITIALIZE_IX_DISCM: [u8; 8] = [175, 175, 109, 31, 13, 152, 155, 237];
impl<'me> From<&'me InitializeIxArgs> for InitializeIxData<'me> {
    fn from(args: &'me InitializeIxArgs) -> Self {
        Self(args)
    }
}
impl BorshSerialize for InitializeIxData<'_> {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&INITIALIZE_IX_DISCM)?;
        self.0.serialize(writer)
    }
}
pub fn initialize_ix<K: Into<InitializeKeys>, A: Into<InitializeIxArgs>>(
    accounts: K,
    args: A,
) -> std::io::Result<Instruction> {
    let keys: InitializeKeys = accounts.into();
    let metas: [AccountMeta; INITIALIZE_IX_ACCOUNTS_LEN] = (&keys).into();
    let args_full: InitializeIxArgs = args.into();
    let data: InitializeIxData = (&args_full).into();
    Ok(Instruction {
        program_id: crate::ID,
        accounts: Vec::from(metas),
        data: data.try_to_vec()?,
    })
}
pub const SET_FLASH_LOAN_FEE_IX_ACCOUNTS_LEN: usize = 2usize;
#[derive(Copy, Clone, Debug)]
pub struct SetFlashLoanFeeKeys {
    pub fee_authority: Pubkey,
    pub flash_loan_fee_account: Pubkey,
}
impl From<&SetFlashLoanFeeKeys> for [AccountMeta; SET_FLASH_LOAN_FEE_IX_ACCOUNTS_LEN] {
    fn from(keys: &SetFlashLoanFeeKeys) -> Self {
        [
            AccountMeta::new_readonly(keys.fee_authority, true),
            AccountMeta::new(keys.flash_loan_fee_account, false),
        ]
    }
}
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug)]
pub struct SetFlashLoanFeeIxArgs {
    pub fee_ratio: Rational,
}
#[derive(Copy, Clone, Debug)]
pub struct SetFlashLoanFeeIxData<'me>(pub &'me SetFlashLoanFeeIxArgs);
pub const SET_FLASH_LOAN_FEE_IX_DISCM: [u8; 8] = [21, 27, 137, 29, 226, 149, 221, 100];
impl<'me> From<&'me SetFlashLoanFeeIxArgs> for SetFlashLoanFeeIxData<'me> {
    fn from(args: &'me SetFlashLoanFeeIxArgs) -> Self {
        Self(args)
    }
}
impl BorshSerialize for SetFlashLoanFeeIxData<'_> {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&SET_FLASH_LOAN_FEE_IX_DISCM)?;
        self.0.serialize(writer)
    }
}
pub fn set_flash_loan_fee_ix<K: Into<SetFlashLoanFeeKeys>, A: Into<SetFlashLoanFeeIxArgs>>(
    accounts: K,
    args: A,
) -> std::io::Result<Instruction> {
    let keys: SetFlashLoanFeeKeys = accounts.into();
    let metas: [AccountMeta; SET_FLASH_LOAN_FEE_IX_ACCOUNTS_LEN] = (&keys).into();
    let args_full: SetFlashLoanFeeIxArgs = args.into();
    let data: SetFlashLoanFeeIxData = (&args_full).into();
    Ok(Instruction {
        program_id: crate::ID,
        accounts: Vec::from(metas),
        data: data.try_to_vec()?,
    })
}
pub const SET_FEE_AUTHORITY_IX_ACCOUNTS_LEN: usize = 3usize;
#[derive(Copy, Clone, Debug)]
pub struct SetFeeAuthorityKeys {
    pub fee_authority: Pubkey,
    pub flash_loan_fee_account: Pubkey,
    pub new_fee_authority: Pubkey,
}
impl From<&SetFeeAuthorityKeys> for [AccountMeta; SET_FEE_AUTHORITY_IX_ACCOUNTS_LEN] {
    fn from(keys: &SetFeeAuthorityKeys) -> Self {
        [
            AccountMeta::new_readonly(keys.fee_authority, true),
            AccountMeta::new(keys.flash_loan_fee_account, false),
            AccountMeta::new_readonly(keys.new_fee_authority, false),
        ]
    }
}
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug)]
pub struct SetFeeAuthorityIxArgs {}
#[derive(Copy, Clone, Debug)]
pub struct SetFeeAuthorityIxData<'me>(pub &'me SetFeeAuthorityIxArgs);
pub const SET_FEE_AUTHORITY_IX_DISCM: [u8; 8] = [31, 1, 50, 87, 237, 101, 97, 132];
impl<'me> From<&'me SetFeeAuthorityIxArgs> for SetFeeAuthorityIxData<'me> {
    fn from(args: &'me SetFeeAuthorityIxArgs) -> Self {
        Self(args)
    }
}
impl BorshSerialize for SetFeeAuthorityIxData<'_> {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&SET_FEE_AUTHORITY_IX_DISCM)?;
        self.0.serialize(writer)
    }
}
pub fn set_fee_authority_ix<K: Into<SetFeeAuthorityKeys>, A: Into<SetFeeAuthorityIxArgs>>(
    accounts: K,
    args: A,
) -> std::io::Result<Instruction> {
    let keys: SetFeeAuthorityKeys = accounts.into();
    let metas: [AccountMeta; SET_FEE_AUTHORITY_IX_ACCOUNTS_LEN] = (&keys).into();
    let args_full: SetFeeAuthorityIxArgs = args.into();
    let data: SetFeeAuthorityIxData = (&args_full).into();
    Ok(Instruction {
        program_id: crate::ID,
        accounts: Vec::from(metas),
        data: data.try_to_vec()?,
    })
}
pub const DEPOSIT_IX_ACCOUNTS_LEN: usize = 8usize;
#[derive(Copy, Clone, Debug)]
pub struct DepositKeys {
    pub depositor: Pubkey,
    pub protocol: Pubkey,
    pub mint: Pubkey,
    pub depositor_ata: Pubkey,
    pub protocol_ata: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
}
impl From<&DepositKeys> for [AccountMeta; DEPOSIT_IX_ACCOUNTS_LEN] {
    fn from(keys: &DepositKeys) -> Self {
        [
            AccountMeta::new(keys.depositor, true),
            AccountMeta::new_readonly(keys.protocol, false),
            AccountMeta::new_readonly(keys.mint, false),
            AccountMeta::new(keys.depositor_ata, false),
            AccountMeta::new(keys.protocol_ata, false),
            AccountMeta::new_readonly(keys.token_program, false),
            AccountMeta::new_readonly(keys.associated_token_program, false),
            AccountMeta::new_readonly(keys.system_program, false),
        ]
    }
}
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug)]
pub struct DepositIxArgs {
    pub amount: u64,
}
#[derive(Copy, Clone, Debug)]
pub struct DepositIxData<'me>(pub &'me DepositIxArgs);
pub const DEPOSIT_IX_DISCM: [u8; 8] = [242, 35, 198, 137, 82, 225, 242, 182];
impl<'me> From<&'me DepositIxArgs> for DepositIxData<'me> {
    fn from(args: &'me DepositIxArgs) -> Self {
        Self(args)
    }
}
impl BorshSerialize for DepositIxData<'_> {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&DEPOSIT_IX_DISCM)?;
        self.0.serialize(writer)
    }
}
pub fn deposit_ix<K: Into<DepositKeys>, A: Into<DepositIxArgs>>(
    accounts: K,
    args: A,
) -> std::io::Result<Instruction> {
    let keys: DepositKeys = accounts.into();
    let metas: [AccountMeta; DEPOSIT_IX_ACCOUNTS_LEN] = (&keys).into();
    let args_full: DepositIxArgs = args.into();
    let data: DepositIxData = (&args_full).into();
    Ok(Instruction {
        program_id: crate::ID,
        accounts: Vec::from(metas),
        data: data.try_to_vec()?,
    })
}
pub const WITHDRAW_IX_ACCOUNTS_LEN: usize = 7usize;
#[derive(Copy, Clone, Debug)]
pub struct WithdrawKeys {
    pub fee_authority: Pubkey,
    pub flash_loan_fee_account: Pubkey,
    pub protocol: Pubkey,
    pub mint: Pubkey,
    pub protocol_ata: Pubkey,
    pub destination: Pubkey,
    pub token_program: Pubkey,
}
impl From<&WithdrawKeys> for [AccountMeta; WITHDRAW_IX_ACCOUNTS_LEN] {
    fn from(keys: &WithdrawKeys) -> Self {
        [
            AccountMeta::new_readonly(keys.fee_authority, true),
            AccountMeta::new_readonly(keys.flash_loan_fee_account, false),
            AccountMeta::new_readonly(keys.protocol, false),
            AccountMeta::new_readonly(keys.mint, false),
            AccountMeta::new(keys.protocol_ata, false),
            AccountMeta::new(keys.destination, false),
            AccountMeta::new_readonly(keys.token_program, false),
        ]
    }
}
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug)]
pub struct WithdrawIxArgs {
    pub amount: u64,
}
#[derive(Copy, Clone, Debug)]
pub struct WithdrawIxData<'me>(pub &'me WithdrawIxArgs);
pub const WITHDRAW_IX_DISCM: [u8; 8] = [183, 18, 70, 156, 148, 109, 161, 34];
impl<'me> From<&'me WithdrawIxArgs> for WithdrawIxData<'me> {
    fn from(args: &'me WithdrawIxArgs) -> Self {
        Self(args)
    }
}
impl BorshSerialize for WithdrawIxData<'_> {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&WITHDRAW_IX_DISCM)?;
        self.0.serialize(writer)
    }
}
pub fn withdraw_ix<K: Into<WithdrawKeys>, A: Into<WithdrawIxArgs>>(
    accounts: K,
    args: A,
) -> std::io::Result<Instruction> {
    let keys: WithdrawKeys = accounts.into();
    let metas: [AccountMeta; WITHDRAW_IX_ACCOUNTS_LEN] = (&keys).into();
    let args_full: WithdrawIxArgs = args.into();
    let data: WithdrawIxData = (&args_full).into();
    Ok(Instruction {
        program_id: crate::ID,
        accounts: Vec::from(metas),
        data: data.try_to_vec()?,
    })
}
/// Shared by `borrow` and `repay`.
/// The program reads `borrower_ata` and `protocol_ata` of the repay
/// instruction by position, so this order must not change.
pub const LOAN_IX_ACCOUNTS_LEN: usize = 10usize;
pub const LOAN_BORROWER_ATA_IDX: usize = 3usize;
pub const LOAN_PROTOCOL_ATA_IDX: usize = 4usize;
#[derive(Copy, Clone, Debug)]
pub struct LoanAccounts<'me, 'info> {
    pub borrower: &'me AccountInfo<'info>,
    pub protocol: &'me AccountInfo<'info>,
    pub mint: &'me AccountInfo<'info>,
    pub borrower_ata: &'me AccountInfo<'info>,
    pub protocol_ata: &'me AccountInfo<'info>,
    pub instructions: &'me AccountInfo<'info>,
    pub token_program: &'me AccountInfo<'info>,
    pub associated_token_program: &'me AccountInfo<'info>,
    pub system_program: &'me AccountInfo<'info>,
    pub flash_loan_fee_account: &'me AccountInfo<'info>,
}
#[derive(Copy, Clone, Debug)]
pub struct LoanKeys {
    pub borrower: Pubkey,
    pub protocol: Pubkey,
    pub mint: Pubkey,
    pub borrower_ata: Pubkey,
    pub protocol_ata: Pubkey,
    pub instructions: Pubkey,
    pub token_program: Pubkey,
    pub associated_token_program: Pubkey,
    pub system_program: Pubkey,
    pub flash_loan_fee_account: Pubkey,
}
impl From<&LoanAccounts<'_, '_>> for LoanKeys {
    fn from(accounts: &LoanAccounts<'_, '_>) -> Self {
        Self {
            borrower: *accounts.borrower.key,
            protocol: *accounts.protocol.key,
            mint: *accounts.mint.key,
            borrower_ata: *accounts.borrower_ata.key,
            protocol_ata: *accounts.protocol_ata.key,
            instructions: *accounts.instructions.key,
            token_program: *accounts.token_program.key,
            associated_token_program: *accounts.associated_token_program.key,
            system_program: *accounts.system_program.key,
            flash_loan_fee_account: *accounts.flash_loan_fee_account.key,
        }
    }
}
impl From<&LoanKeys> for [AccountMeta; LOAN_IX_ACCOUNTS_LEN] {
    fn from(keys: &LoanKeys) -> Self {
        [
            AccountMeta::new(keys.borrower, true),
            AccountMeta::new_readonly(keys.protocol, false),
            AccountMeta::new_readonly(keys.mint, false),
            AccountMeta::new(keys.borrower_ata, false),
            AccountMeta::new(keys.protocol_ata, false),
            AccountMeta::new_readonly(keys.instructions, false),
            AccountMeta::new_readonly(keys.token_program, false),
            AccountMeta::new_readonly(keys.associated_token_program, false),
            AccountMeta::new_readonly(keys.system_program, false),
            AccountMeta::new_readonly(keys.flash_loan_fee_account, false),
        ]
    }
}
impl<'info> From<&LoanAccounts<'_, 'info>> for [AccountInfo<'info>; LOAN_IX_ACCOUNTS_LEN] {
    fn from(accounts: &LoanAccounts<'_, 'info>) -> Self {
        [
            accounts.borrower.clone(),
            accounts.protocol.clone(),
            accounts.mint.clone(),
            accounts.borrower_ata.clone(),
            accounts.protocol_ata.clone(),
            accounts.instructions.clone(),
            accounts.token_program.clone(),
            accounts.associated_token_program.clone(),
            accounts.system_program.clone(),
            accounts.flash_loan_fee_account.clone(),
        ]
    }
}
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug)]
pub struct BorrowIxArgs {
    pub borrow_amount: u64,
}
#[derive(Copy, Clone, Debug)]
pub struct BorrowIxData<'me>(pub &'me BorrowIxArgs);
pub const BORROW_IX_DISCM: [u8; 8] = [228, 253, 131, 202, 207, 116, 89, 18];
impl<'me> From<&'me BorrowIxArgs> for BorrowIxData<'me> {
    fn from(args: &'me BorrowIxArgs) -> Self {
        Self(args)
    }
}
impl BorshSerialize for BorrowIxData<'_> {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&BORROW_IX_DISCM)?;
        self.0.serialize(writer)
    }
}
pub fn borrow_ix<K: Into<LoanKeys>, A: Into<BorrowIxArgs>>(
    accounts: K,
    args: A,
) -> std::io::Result<Instruction> {
    let keys: LoanKeys = accounts.into();
    let metas: [AccountMeta; LOAN_IX_ACCOUNTS_LEN] = (&keys).into();
    let args_full: BorrowIxArgs = args.into();
    let data: BorrowIxData = (&args_full).into();
    Ok(Instruction {
        program_id: crate::ID,
        accounts: Vec::from(metas),
        data: data.try_to_vec()?,
    })
}
pub fn borrow_invoke<'info, A: Into<BorrowIxArgs>>(
    accounts: &LoanAccounts<'_, 'info>,
    args: A,
) -> ProgramResult {
    let ix = borrow_ix(accounts, args)?;
    let account_info: [AccountInfo<'info>; LOAN_IX_ACCOUNTS_LEN] = accounts.into();
    invoke(&ix, &account_info)
}
pub fn borrow_invoke_signed<'info, A: Into<BorrowIxArgs>>(
    accounts: &LoanAccounts<'_, 'info>,
    args: A,
    seeds: &[&[&[u8]]],
) -> ProgramResult {
    let ix = borrow_ix(accounts, args)?;
    let account_info: [AccountInfo<'info>; LOAN_IX_ACCOUNTS_LEN] = accounts.into();
    invoke_signed(&ix, &account_info, seeds)
}
#[derive(BorshDeserialize, BorshSerialize, Clone, Debug)]
pub struct RepayIxArgs {}
#[derive(Copy, Clone, Debug)]
pub struct RepayIxData<'me>(pub &'me RepayIxArgs);
pub const REPAY_IX_DISCM: [u8; 8] = [234, 103, 67, 82, 208, 234, 219, 166];
impl<'me> From<&'me RepayIxArgs> for RepayIxData<'me> {
    fn from(args: &'me RepayIxArgs) -> Self {
        Self(args)
    }
}
impl BorshSerialize for RepayIxData<'_> {
    fn serialize<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&REPAY_IX_DISCM)?;
        self.0.serialize(writer)
    }
}
pub fn repay_ix<K: Into<LoanKeys>, A: Into<RepayIxArgs>>(
    accounts: K,
    args: A,
) -> std::io::Result<Instruction> {
    let keys: LoanKeys = accounts.into();
    let metas: [AccountMeta; LOAN_IX_ACCOUNTS_LEN] = (&keys).into();
    let args_full: RepayIxArgs = args.into();
    let data: RepayIxData = (&args_full).into();
    Ok(Instruction {
        program_id: crate::ID,
        accounts: Vec::from(metas),
        data: data.try_to_vec()?,
    })
}
pub fn repay_invoke<'info, A: Into<RepayIxArgs>>(
    accounts: &LoanAccounts<'_, 'info>,
    args: A,
) -> ProgramResult {
    let ix = repay_ix(accounts, args)?;
    let account_info: [AccountInfo<'info>; LOAN_IX_ACCOUNTS_LEN] = accounts.into();
    invoke(&ix, &account_info)
}
pub fn repay_invoke_signed<'info, A: Into<RepayIxArgs>>(
    accounts: &LoanAccounts<'_, 'info>,
    args: A,
    seeds: &[&[&[u8]]],
) -> ProgramResult {
    let ix = repay_ix(accounts, args)?;
    let account_info: [AccountInfo<'info>; LOAN_IX_ACCOUNTS_LEN] = accounts.into();
    invoke_signed(&ix, &account_info, seeds)
}
