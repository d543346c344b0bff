//! Y-axis scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    #[default]
    Linear,
    Logarithmic,
}

impl Scale {
    pub fn key(&self) -> &'static str {
        match self {
            Scale::Linear => "linear",
            Scale::Logarithmic => "logarithmic",
        }
    }
}

impl FromStr for Scale {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Scale::Linear),
            "logarithmic" => Ok(Scale::Logarithmic),
            other => Err(DashboardError::UnknownScale(other.to_string())),
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("linear".parse::<Scale>().unwrap(), Scale::Linear);
        assert_eq!("logarithmic".parse::<Scale>().unwrap(), Scale::Logarithmic);
        assert_eq!(
            "log".parse::<Scale>().unwrap_err(),
            DashboardError::UnknownScale("log".to_string())
        );
    }

    #[test]
    fn test_default_is_linear() {
        assert_eq!(Scale::default(), Scale::Linear);
    }
}
