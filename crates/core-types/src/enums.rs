use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The direction of a journaled trade.
///
/// The storage and API layers speak the broker tokens `"BUY"` / `"SELL"`,
/// so that is the serialized form; in code the semantic names are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeDirection {
    #[serde(rename = "BUY")]
    Long,
    #[serde(rename = "SELL")]
    Short,
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeDirection::Long => write!(f, "BUY"),
            TradeDirection::Short => write!(f, "SELL"),
        }
    }
}

impl FromStr for TradeDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(TradeDirection::Long),
            "SELL" => Ok(TradeDirection::Short),
            other => Err(CoreError::InvalidInput(
                "direction".to_string(),
                format!("expected BUY or SELL, got '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_broker_tokens() {
        assert_eq!("BUY".parse::<TradeDirection>().unwrap(), TradeDirection::Long);
        assert_eq!("SELL".parse::<TradeDirection>().unwrap(), TradeDirection::Short);
        assert!("HOLD".parse::<TradeDirection>().is_err());
    }

    #[test]
    fn display_matches_wire_format() {
        assert_eq!(TradeDirection::Long.to_string(), "BUY");
        assert_eq!(TradeDirection::Short.to_string(), "SELL");
    }
}
