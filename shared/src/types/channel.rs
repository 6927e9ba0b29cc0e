//! Delivery channel for one-time codes

use serde::{Deserialize, Serialize};

/// How the verification provider delivers the code to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Sms,
    Call,
    Whatsapp,
}

impl Default for Channel {
    fn default() -> Self {
        Channel::Sms
    }
}

impl Channel {
    /// Wire name understood by the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Sms => "sms",
            Channel::Call => "call",
            Channel::Whatsapp => "whatsapp",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Channel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sms" => Ok(Channel::Sms),
            "call" | "voice" => Ok(Channel::Call),
            "whatsapp" => Ok(Channel::Whatsapp),
            _ => Err(format!("Unsupported delivery channel: {}", s)),
        }
    }
}
