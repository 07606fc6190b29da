//! Option type definitions.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Option type (Call or Put).
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
///
/// assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert!("invalid".parse::<OptionType>().is_err());
/// assert_eq!(OptionType::Put.to_string(), "put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Payoff direction: +1 for call, -1 for put.
    #[inline]
    pub fn phi(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Payoff at expiry for the given terminal price: max(φ(S - K), 0).
    #[inline]
    pub fn payoff(&self, terminal: f64, strike: f64) -> f64 {
        (self.phi() * (terminal - strike)).max(0.0)
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phi() {
        assert_eq!(OptionType::Call.phi(), 1.0);
        assert_eq!(OptionType::Put.phi(), -1.0);
    }

    #[test]
    fn test_payoff() {
        assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
        assert_eq!(OptionType::Put.payoff(90.0, 100.0), 10.0);
        assert_eq!(OptionType::Call.payoff(90.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("CALL".parse::<OptionType>(), Ok(OptionType::Call));
        assert_eq!(" put ".parse::<OptionType>(), Ok(OptionType::Put));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "invalid".parse::<OptionType>(),
            Err(PricingError::InvalidOptionType("invalid".to_string()))
        );
        assert!("".parse::<OptionType>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for option_type in [OptionType::Call, OptionType::Put] {
            assert_eq!(option_type.to_string().parse(), Ok(option_type));
        }
    }
}
