//! Relative virtual addresses of hooked `set_Text` methods.

use serde::{Deserialize, Serialize};

use crate::error::RvaError;

/// A relative virtual address inside the target binary.
///
/// Parses from `0x`-prefixed hex or plain decimal and always renders as
/// lowercase hex, so round-tripping through the config normalizes the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rva(pub u64);

impl std::str::FromStr for Rva {
    type Err = RvaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(RvaError::Empty);
        }

        let parsed = if let Some(hex) = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
        {
            u64::from_str_radix(hex, 16)
        } else {
            value.parse::<u64>()
        };

        parsed
            .map(Rva)
            .map_err(|_| RvaError::Invalid(value.to_string()))
    }
}

impl std::fmt::Display for Rva {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

impl TryFrom<String> for Rva {
    type Error = RvaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rva> for String {
    fn from(rva: Rva) -> Self {
        rva.to_string()
    }
}
