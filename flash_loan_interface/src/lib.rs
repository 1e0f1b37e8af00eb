#[cfg(feature = "local-testing")]
solana_program::declare_id!("22222222222222222222222222222222222222222222");

#[cfg(not(feature = "local-testing"))]
solana_program::declare_id!("AA9Sps4rRupDiRDdv5jemxHCD9ecKgeont8wYu5qu1sv");

pub mod accounts;
pub use accounts::*;
pub mod errors;
pub use errors::*;
pub mod instructions;
pub use instructions::*;
pub mod typedefs;
pub use typedefs::*;
