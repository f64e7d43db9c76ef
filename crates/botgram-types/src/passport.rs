//! Telegram Passport data shared with the bot.

use serde::{Deserialize, Serialize};

/// Passport data shared with the bot by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassportData {
    pub data: Vec<EncryptedPassportElement>,
    pub credentials: EncryptedCredentials,
}

/// A file uploaded to Telegram Passport; encrypted with the
/// credentials accompanying it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassportFile {
    pub file_id: String,
    pub file_unique_id: String,
    pub file_size: i64,
    /// Unix time when the file was uploaded.
    pub file_date: i64,
}

/// Kind of a Telegram Passport element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncryptedPassportElementKind {
    PersonalDetails,
    Passport,
    DriverLicense,
    IdentityCard,
    InternalPassport,
    Address,
    UtilityBill,
    BankStatement,
    RentalAgreement,
    PassportRegistration,
    TemporaryRegistration,
    PhoneNumber,
    Email,
}

/// Documents or other Telegram Passport elements shared with the bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedPassportElement {
    #[serde(rename = "type")]
    pub kind: EncryptedPassportElementKind,
    /// Base64-encoded encrypted element data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<PassportFile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_side: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse_side: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selfie: Option<PassportFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<Vec<PassportFile>>,
    /// Base64-encoded element hash for
    /// `PassportElementError::Unspecified`.
    pub hash: String,
}

/// Data required for decrypting and authenticating
/// [`EncryptedPassportElement`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedCredentials {
    pub data: String,
    pub hash: String,
    pub secret: String,
}

/// An error in a Telegram Passport element submitted by a user,
/// tagged by `source` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum PassportElementError {
    /// A data field does not satisfy validation.
    #[serde(rename = "data")]
    DataField {
        #[serde(rename = "type")]
        kind: EncryptedPassportElementKind,
        field_name: String,
        data_hash: String,
        message: String,
    },
    FrontSide {
        #[serde(rename = "type")]
        kind: EncryptedPassportElementKind,
        file_hash: String,
        message: String,
    },
    ReverseSide {
        #[serde(rename = "type")]
        kind: EncryptedPassportElementKind,
        file_hash: String,
        message: String,
    },
    Selfie {
        #[serde(rename = "type")]
        kind: EncryptedPassportElementKind,
        file_hash: String,
        message: String,
    },
    File {
        #[serde(rename = "type")]
        kind: EncryptedPassportElementKind,
        file_hash: String,
        message: String,
    },
    Files {
        #[serde(rename = "type")]
        kind: EncryptedPassportElementKind,
        file_hashes: Vec<String>,
        message: String,
    },
    TranslationFile {
        #[serde(rename = "type")]
        kind: EncryptedPassportElementKind,
        file_hash: String,
        message: String,
    },
    TranslationFiles {
        #[serde(rename = "type")]
        kind: EncryptedPassportElementKind,
        file_hashes: Vec<String>,
        message: String,
    },
    Unspecified {
        #[serde(rename = "type")]
        kind: EncryptedPassportElementKind,
        element_hash: String,
        message: String,
    },
}
