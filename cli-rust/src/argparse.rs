use std::{io, str::FromStr};

use clap2::ArgMatches;
use derive_more::{AsRef, Deref};
use flash_loan_interface::Rational;
use solana_clap_utils::keypair::signer_from_path;
use solana_cli_config::{Config, CONFIG_FILE};
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::{CommitmentConfig, CommitmentLevel},
    signer::Signer,
};

/// clap requires arg types to impl Clone, but solana doesnt do it
#[derive(AsRef, Debug, Deref)]
pub struct ConfigWrapper(Config);

impl Clone for ConfigWrapper {
    fn clone(&self) -> Self {
        Self(Config {
            json_rpc_url: self.0.json_rpc_url.clone(),
            websocket_url: self.0.websocket_url.clone(),
            keypair_path: self.0.keypair_path.clone(),
            address_labels: self.0.address_labels.clone(),
            commitment: self.0.commitment.clone(),
        })
    }
}

impl ConfigWrapper {
    pub fn rpc_client(&self) -> RpcClient {
        let commitment = CommitmentLevel::from_str(&self.commitment).unwrap_or_else(|e| {
            panic!("Invalid commitment {} in solana config: {}", self.commitment, e)
        });
        RpcClient::new_with_commitment(&self.json_rpc_url, CommitmentConfig { commitment })
    }

    pub fn signer(&self) -> Box<dyn Signer> {
        // Only file and usb keypair paths are meaningful here since the CLI
        // exposes neither --skip-seed-phrase-validation nor --sign-only.
        // See: https://docs.rs/solana-clap-utils/latest/src/solana_clap_utils/keypair.rs.html#752-820
        let empty_argmatches = ArgMatches::default();
        signer_from_path(&empty_argmatches, &self.0.keypair_path, "wallet", &mut None)
            .unwrap_or_else(|e| panic!("Could not load wallet {}: {}", self.0.keypair_path, e))
    }
}

pub fn parse_solana_cli_config_from_path(path: &str) -> Result<ConfigWrapper, io::Error> {
    let p = if path.is_empty() {
        CONFIG_FILE.as_ref().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::Other,
                "Solana CONFIG_FILE could not identify the user's home directory",
            )
        })?
    } else {
        path
    };
    Ok(ConfigWrapper(Config::load(p)?))
}

/// Parses a decimal fee ratio such as `0.05` into an exact rational
/// `5/100`. Only ratios in `[0, 1]` are accepted.
pub fn parse_fee_ratio(s: &str) -> Result<Rational, String> {
    let s = s.trim();
    let (int_part, frac_part) = s.split_once('.').unwrap_or((s, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(format!("Could not convert {:?} to rational", s));
    }
    if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
        return Err(format!("Only non-negative decimal numbers allowed, {} given", s));
    }
    let frac_part = frac_part.trim_end_matches('0');
    let denom = u32::try_from(frac_part.len())
        .ok()
        .and_then(|dps| 10u64.checked_pow(dps))
        .ok_or_else(|| format!("Too many decimal places in {}", s))?;
    let digits = format!("{}{}", int_part, frac_part);
    let num: u64 = match digits.trim_start_matches('0') {
        "" => 0,
        d => d
            .parse()
            .map_err(|e| format!("Could not convert {} to rational: {}", s, e))?,
    };
    if num > denom {
        return Err(format!("Fee ratio must be <= 1, {} given", s));
    }
    Ok(Rational { num, denom })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_fee_ratios() {
        assert_eq!(
            parse_fee_ratio("0.05").unwrap(),
            Rational { num: 5, denom: 100 }
        );
        assert_eq!(
            parse_fee_ratio("0.0005").unwrap(),
            Rational {
                num: 5,
                denom: 10_000
            }
        );
        assert_eq!(
            parse_fee_ratio(".50").unwrap(),
            Rational { num: 5, denom: 10 }
        );
        assert_eq!(parse_fee_ratio("1").unwrap(), Rational { num: 1, denom: 1 });
        assert_eq!(parse_fee_ratio("0").unwrap(), Rational { num: 0, denom: 1 });
        assert_eq!(
            parse_fee_ratio("1.000").unwrap(),
            Rational { num: 1, denom: 1 }
        );
    }

    #[test]
    fn rejects_bad_fee_ratios() {
        assert!(parse_fee_ratio("").is_err());
        assert!(parse_fee_ratio(".").is_err());
        assert!(parse_fee_ratio("-0.1").is_err());
        assert!(parse_fee_ratio("1.5").is_err());
        assert!(parse_fee_ratio("abc").is_err());
        assert!(parse_fee_ratio("0.00000000000000000001").is_err());
    }
}
