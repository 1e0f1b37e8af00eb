#![allow(dead_code)]

use std::fmt::Debug;

use flash_loan::errors::FlashLoanError;
use flash_loan_interface::{
    borrow_ix, deposit_ix, find_flash_loan_fee_address, find_protocol_address, initialize_ix,
    repay_ix, BorrowIxArgs, DepositIxArgs, DepositKeys, FlashLoanFee, FlashLoanFeeAccount,
    InitializeIxArgs, InitializeKeys, LoanKeys, RepayIxArgs,
};
use solana_program_test::{processor, BanksClient, BanksClientError, ProgramTest};
use solana_sdk::{
    hash::Hash,
    instruction::{Instruction, InstructionError},
    native_token::LAMPORTS_PER_SOL,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    system_instruction, system_program, sysvar,
    transaction::{Transaction, TransactionError},
};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account,
};

pub const MINT_DECIMALS: u8 = 6;

/// Tokens minted to the payer's ATA by `setup_pool`
pub const PAYER_TOKENS: u64 = 1_000_000;

pub struct TestContext {
    pub banks_client: BanksClient,
    pub payer: Keypair,
    pub recent_blockhash: Hash,
}

pub async fn start() -> TestContext {
    let pt = ProgramTest::new("flash_loan", flash_loan::ID, processor!(flash_loan::entry));
    let (banks_client, payer, recent_blockhash) = pt.start().await;
    TestContext {
        banks_client,
        payer,
        recent_blockhash,
    }
}

/// Initialized program, with the payer as fee authority
pub async fn start_initialized() -> TestContext {
    let mut context = start().await;
    context.initialize(None).await.unwrap();
    context
}

pub struct PoolContext {
    pub context: TestContext,
    pub mint: Pubkey,
    pub payer_ata: Pubkey,
}

/// Initialized program with `liquidity` tokens of a fresh mint deposited by the payer
pub async fn setup_pool(liquidity: u64) -> PoolContext {
    let mut context = start_initialized().await;
    let mint = context.create_mint().await;
    let payer = context.payer.pubkey();
    let payer_ata = context.create_ata(&payer, &mint).await;
    context.mint_to(&mint, &payer_ata, PAYER_TOKENS).await;
    let deposit = context.deposit_ix(&mint, liquidity);
    context.process(&[deposit], &[]).await.unwrap();
    PoolContext {
        context,
        mint,
        payer_ata,
    }
}

pub fn protocol_ata(mint: &Pubkey) -> Pubkey {
    get_associated_token_address(&find_protocol_address().0, mint)
}

pub fn loan_keys(borrower: Pubkey, mint: Pubkey) -> LoanKeys {
    LoanKeys {
        borrower,
        protocol: find_protocol_address().0,
        mint,
        borrower_ata: get_associated_token_address(&borrower, &mint),
        protocol_ata: protocol_ata(&mint),
        instructions: sysvar::instructions::id(),
        token_program: spl_token::id(),
        associated_token_program: spl_associated_token_account::id(),
        system_program: system_program::id(),
        flash_loan_fee_account: find_flash_loan_fee_address().0,
    }
}

pub fn borrow(keys: LoanKeys, borrow_amount: u64) -> Instruction {
    borrow_ix(keys, BorrowIxArgs { borrow_amount }).unwrap()
}

pub fn repay(keys: LoanKeys) -> Instruction {
    repay_ix(keys, RepayIxArgs {}).unwrap()
}

impl TestContext {
    /// Sends `ixs` in a single tx paid for by `self.payer`,
    /// additionally signed by `signers`
    pub async fn process(
        &mut self,
        ixs: &[Instruction],
        signers: &[&Keypair],
    ) -> Result<Signature, BanksClientError> {
        let mut all_signers = vec![&self.payer];
        all_signers.extend(signers.iter().copied());
        let tx = Transaction::new_signed_with_payer(
            ixs,
            Some(&self.payer.pubkey()),
            &all_signers,
            self.recent_blockhash,
        );
        let signature = tx.signatures[0];
        self.banks_client.process_transaction(tx).await?;
        Ok(signature)
    }

    /// `payer` defaults to `self.payer`
    pub async fn initialize(
        &mut self,
        payer: Option<&Keypair>,
    ) -> Result<Signature, BanksClientError> {
        let payer_pubkey = payer.map_or(self.payer.pubkey(), |p| p.pubkey());
        let ix = initialize_ix(
            InitializeKeys {
                payer: payer_pubkey,
                flash_loan_fee_account: find_flash_loan_fee_address().0,
                system_program: system_program::id(),
            },
            InitializeIxArgs {},
        )
        .unwrap();
        match payer {
            Some(payer) => self.process(&[ix], &[payer]).await,
            None => self.process(&[ix], &[]).await,
        }
    }

    /// New keypair holding 1 SOL
    pub async fn funded_keypair(&mut self) -> Keypair {
        let keypair = Keypair::new();
        self.process(
            &[system_instruction::transfer(
                &self.payer.pubkey(),
                &keypair.pubkey(),
                LAMPORTS_PER_SOL,
            )],
            &[],
        )
        .await
        .unwrap();
        keypair
    }

    /// New mint with the payer as mint authority
    pub async fn create_mint(&mut self) -> Pubkey {
        let mint = Keypair::new();
        let rent = self.banks_client.get_rent().await.unwrap();
        let payer = self.payer.pubkey();
        self.process(
            &[
                system_instruction::create_account(
                    &payer,
                    &mint.pubkey(),
                    rent.minimum_balance(spl_token::state::Mint::LEN),
                    spl_token::state::Mint::LEN as u64,
                    &spl_token::id(),
                ),
                spl_token::instruction::initialize_mint(
                    &spl_token::id(),
                    &mint.pubkey(),
                    &payer,
                    None,
                    MINT_DECIMALS,
                )
                .unwrap(),
            ],
            &[&mint],
        )
        .await
        .unwrap();
        mint.pubkey()
    }

    pub async fn create_ata(&mut self, wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
        let ix = create_associated_token_account(&self.payer.pubkey(), wallet, mint, &spl_token::id());
        self.process(&[ix], &[]).await.unwrap();
        get_associated_token_address(wallet, mint)
    }

    pub async fn mint_to(&mut self, mint: &Pubkey, destination: &Pubkey, amount: u64) {
        let ix = spl_token::instruction::mint_to(
            &spl_token::id(),
            mint,
            destination,
            &self.payer.pubkey(),
            &[],
            amount,
        )
        .unwrap();
        self.process(&[ix], &[]).await.unwrap();
    }

    /// Deposit of `amount` from the payer's ATA
    pub fn deposit_ix(&self, mint: &Pubkey, amount: u64) -> Instruction {
        let depositor = self.payer.pubkey();
        deposit_ix(
            DepositKeys {
                depositor,
                protocol: find_protocol_address().0,
                mint: *mint,
                depositor_ata: get_associated_token_address(&depositor, mint),
                protocol_ata: protocol_ata(mint),
                token_program: spl_token::id(),
                associated_token_program: spl_associated_token_account::id(),
                system_program: system_program::id(),
            },
            DepositIxArgs { amount },
        )
        .unwrap()
    }

    pub async fn token_balance(&mut self, token_account: &Pubkey) -> u64 {
        let account = self
            .banks_client
            .get_account(*token_account)
            .await
            .unwrap()
            .expect("token account not found");
        spl_token::state::Account::unpack(&account.data)
            .unwrap()
            .amount
    }

    pub async fn account_exists(&mut self, address: &Pubkey) -> bool {
        self.banks_client
            .get_account(*address)
            .await
            .unwrap()
            .is_some()
    }

    pub async fn flash_loan_fee(&mut self) -> FlashLoanFee {
        let account = self
            .banks_client
            .get_account(find_flash_loan_fee_address().0)
            .await
            .unwrap()
            .expect("flash loan fee account not found");
        FlashLoanFeeAccount::deserialize(&mut account.data.as_slice())
            .unwrap()
            .0
    }
}

pub fn assert_flash_loan_error<R: Debug>(
    res: Result<R, BanksClientError>,
    expected_instruction_index: u8,
    expected_error: FlashLoanError,
) {
    assert_eq!(
        res.unwrap_err().unwrap(),
        TransactionError::InstructionError(
            expected_instruction_index,
            InstructionError::Custom(expected_error.into())
        )
    );
}
