//! Contract configuration

use serde::{Deserialize, Serialize};

/// How `charge` treats a stored balance that is not an integer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorruptBalancePolicy {
    /// Replace the stored value with the charge amount
    #[default]
    Lenient,
    /// Fail the charge without writing
    Strict,
}

/// Contract configuration
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Handling of corrupt stored balances during charge
    #[serde(default)]
    pub corrupt_balance: CorruptBalancePolicy,
}

impl ContractConfig {
    /// Config that rejects corrupt balances
    pub fn strict() -> Self {
        Self {
            corrupt_balance: CorruptBalancePolicy::Strict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lenient() {
        assert_eq!(ContractConfig::default().corrupt_balance, CorruptBalancePolicy::Lenient);
        assert_eq!(ContractConfig::strict().corrupt_balance, CorruptBalancePolicy::Strict);
    }

    #[test]
    fn test_config_json() {
        let config: ContractConfig = serde_json::from_str(r#"{"corrupt_balance":"strict"}"#).unwrap();
        assert_eq!(config, ContractConfig::strict());

        let config: ContractConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ContractConfig::default());

        assert!(serde_json::from_str::<ContractConfig>(r#"{"corrupt_balance":"loose"}"#).is_err());
    }
}
