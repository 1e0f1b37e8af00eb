mod common;

use assert_matches::assert_matches;
use flash_loan_interface::Rational;
use solana_program_test::tokio;
use solana_sdk::{
    signature::{Signature, Signer},
    transaction::TransactionError,
};

use crate::common::start;

#[tokio::test]
async fn initialize_returns_signature_and_creates_default_fee() {
    let mut context = start().await;

    let signature = context.initialize(None).await.unwrap();
    assert_ne!(signature, Signature::default());
    assert!(!signature.to_string().is_empty());
    assert!(context
        .banks_client
        .get_transaction_status(signature)
        .await
        .unwrap()
        .is_some());

    let fee = context.flash_loan_fee().await;
    assert_eq!(fee.fee_authority, context.payer.pubkey());
    assert_eq!(
        fee.fee_ratio,
        Rational {
            num: 500,
            denom: 10_000
        }
    );
}

#[tokio::test]
async fn initialize_twice_fails() {
    let mut context = start().await;
    context.initialize(None).await.unwrap();

    let other_payer = context.funded_keypair().await;
    let res = context.initialize(Some(&other_payer)).await;
    assert_matches!(
        res.unwrap_err().unwrap(),
        TransactionError::InstructionError(0, _)
    );

    // fee authority is not taken over by the second payer
    assert_eq!(
        context.flash_loan_fee().await.fee_authority,
        context.payer.pubkey()
    );
}
