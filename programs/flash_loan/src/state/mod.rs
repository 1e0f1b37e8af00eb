mod flash_loan_fee;
mod protocol;

pub use flash_loan_fee::*;
pub use protocol::*;
