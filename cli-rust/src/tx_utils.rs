use solana_client::rpc_client::RpcClient;
use solana_program::{instruction::Instruction, message::Message};
use solana_sdk::{signer::Signer, transaction::Transaction};

pub fn send_or_sim_tx(args: &crate::Args, rpc_client: &RpcClient, tx: &Transaction) {
    if args.dry_run {
        let result = rpc_client
            .simulate_transaction(tx)
            .expect("Failed to simulate transaction");
        println!("Simulate result: {:?}", result);
    } else {
        let signature = rpc_client
            .send_and_confirm_transaction(tx)
            .expect("Failed to send transaction");
        println!("Signature: {}", signature);
    }
}

pub fn unique_signers(vec: &mut Vec<Box<dyn Signer>>) {
    vec.sort_by_key(|l| l.pubkey());
    vec.dedup_by(|a, b| a.pubkey() == b.pubkey());
}

/// First signer is the fee payer
pub fn batch_ixs(
    client: &RpcClient,
    mut signers: Vec<Box<dyn Signer>>,
    ixs: &[Instruction],
) -> Transaction {
    let payer = signers[0].pubkey();
    unique_signers(&mut signers);
    let msg = Message::new(ixs, Some(&payer));
    let blockhash = client
        .get_latest_blockhash()
        .expect("Failed to fetch latest blockhash");
    Transaction::new(&signers, msg, blockhash)
}
