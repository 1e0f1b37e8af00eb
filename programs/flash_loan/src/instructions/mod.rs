mod deposit;
mod initialize;
mod loan;
mod set_fee_authority;
mod set_flash_loan_fee;
mod withdraw;

pub use deposit::*;
pub use initialize::*;
pub use loan::*;
pub use set_fee_authority::*;
pub use set_flash_loan_fee::*;
pub use withdraw::*;
