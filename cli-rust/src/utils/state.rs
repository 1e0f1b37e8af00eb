use flash_loan_interface::{find_flash_loan_fee_address, FlashLoanFee, FlashLoanFeeAccount};
use solana_client::rpc_client::RpcClient;
use solana_program::{program_pack::Pack, pubkey::Pubkey};
use spl_token::state::Mint;

pub fn fetch_flash_loan_fee(client: &RpcClient) -> FlashLoanFee {
    let (flash_loan_fee_pk, _) = find_flash_loan_fee_address();
    let account = client
        .get_account(&flash_loan_fee_pk)
        .expect("Failed to fetch flash loan fee account through RPC call. Was the program initialized?");
    FlashLoanFeeAccount::deserialize(&mut account.data.as_slice())
        .expect("Failed to deserialize flash loan fee account data")
        .0
}

pub fn fetch_mint(client: &RpcClient, mint: &Pubkey) -> Mint {
    let account = client
        .get_account(mint)
        .unwrap_or_else(|e| panic!("Failed to fetch mint {}: {}", mint, e));
    Mint::unpack(&account.data).unwrap_or_else(|e| panic!("{} is not a mint: {}", mint, e))
}

/// Converts a UI token amount into the mint's base units
pub fn to_base_units(client: &RpcClient, mint: &Pubkey, ui_amount: f64) -> u64 {
    let decimals = fetch_mint(client, mint).decimals;
    spl_token::ui_amount_to_amount(ui_amount, decimals)
}
