use clap::Subcommand;

mod deposit;
mod flash_loan;
mod init;
mod set_fee_authority;
mod set_flash_loan_fee;
mod view_config;
mod withdraw;

pub use deposit::*;
pub use flash_loan::*;
pub use init::*;
pub use set_fee_authority::*;
pub use set_flash_loan_fee::*;
pub use view_config::*;
pub use withdraw::*;

#[derive(Debug, Subcommand)]
pub enum Subcmd {
    Init(InitArgs),
    SetFlashLoanFee(SetFlashLoanFeeArgs),
    SetFeeAuthority(SetFeeAuthorityArgs),
    Deposit(DepositArgs),
    Withdraw(WithdrawArgs),
    FlashLoan(FlashLoanArgs),
    ViewConfig(ViewConfigArgs),
}

pub trait SubcmdExec {
    fn process_cmd(&self, args: &crate::Args);
}

impl SubcmdExec for Subcmd {
    fn process_cmd(&self, args: &crate::Args) {
        match self {
            Self::Init(a) => a.process_cmd(args),
            Self::SetFlashLoanFee(a) => a.process_cmd(args),
            Self::SetFeeAuthority(a) => a.process_cmd(args),
            Self::Deposit(a) => a.process_cmd(args),
            Self::Withdraw(a) => a.process_cmd(args),
            Self::FlashLoan(a) => a.process_cmd(args),
            Self::ViewConfig(a) => a.process_cmd(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use flash_loan_interface::Rational;

    use super::*;

    /// `crate::Args` loads the solana config while parsing,
    /// so subcommands are parsed on their own here
    #[derive(Parser, Debug)]
    struct SubcmdOnly {
        #[command(subcommand)]
        subcmd: Subcmd,
    }

    fn parse(argv: &[&str]) -> Subcmd {
        SubcmdOnly::try_parse_from(std::iter::once("flashloan").chain(argv.iter().copied()))
            .unwrap()
            .subcmd
    }

    #[test]
    fn init_takes_no_args() {
        assert!(matches!(parse(&["init"]), Subcmd::Init(_)));
        assert!(SubcmdOnly::try_parse_from(["flashloan", "init", "extra"]).is_err());
    }

    #[test]
    fn set_flash_loan_fee_parses_ratio() {
        match parse(&["set-flash-loan-fee", "0.0005"]) {
            Subcmd::SetFlashLoanFee(a) => assert_eq!(
                a.fee_ratio,
                Rational {
                    num: 5,
                    denom: 10_000
                }
            ),
            other => panic!("unexpected {:?}", other),
        }
        assert!(SubcmdOnly::try_parse_from(["flashloan", "set-flash-loan-fee", "2"]).is_err());
    }

    #[test]
    fn flash_loan_args() {
        match parse(&[
            "flash-loan",
            "So11111111111111111111111111111111111111112",
            "1.5",
        ]) {
            Subcmd::FlashLoan(a) => {
                assert_eq!(a.mint, "So11111111111111111111111111111111111111112");
                assert_eq!(a.amount, 1.5);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
