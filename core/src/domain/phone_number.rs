//! E.164 phone number value object

use serde::{Deserialize, Serialize};

use otp_shared::phone::{is_valid_e164, mask_phone_number, with_default_country_code};

use crate::errors::ValidationError;

/// A phone number in E.164 form (`+` followed by 7-15 digits)
///
/// Only constructible through validation, so holders never need to
/// re-check the format. Deserialization validates as well, which keeps a
/// hand-edited session value from reaching the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize user input into E.164.
    ///
    /// Formatting characters are dropped; input without a leading `+` gets
    /// `+<default_country_code>` prepended.
    pub fn parse(raw: &str, default_country_code: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::RequiredField {
                field: "phone".to_string(),
            });
        }

        Self::from_e164(&with_default_country_code(raw, default_country_code))
    }

    /// Accept an already normalized number
    pub fn from_e164(value: &str) -> Result<Self, ValidationError> {
        if is_valid_e164(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ValidationError::InvalidPhoneNumber {
                masked: mask_phone_number(value),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Representation safe for logs and pages
    pub fn masked(&self) -> String {
        mask_phone_number(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_e164(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(phone: PhoneNumber) -> Self {
        phone.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
