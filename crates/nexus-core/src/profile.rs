//! Wallet profile decoded from the identity library's user data.

use serde::{Deserialize, Serialize};

use crate::error::SessionResult;

/// Number of address characters shown in the navbar badge.
pub const BADGE_PREFIX_LEN: usize = 4;

/// STX address pair attached to a signed-in profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StxAddress {
    pub mainnet: String,
    pub testnet: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRecord {
    stx_address: StxAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct UserDataRecord {
    profile: ProfileRecord,
}

/// The user-identifying part of a wallet session.
///
/// Only the STX addresses are kept; the rest of the library's user data
/// (keys, hub URLs, decentralized ID) is ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    stx_address: StxAddress,
}

impl UserProfile {
    /// Creates a profile from an address pair.
    pub fn new(mainnet: impl Into<String>, testnet: impl Into<String>) -> Self {
        Self {
            stx_address: StxAddress {
                mainnet: mainnet.into(),
                testnet: testnet.into(),
            },
        }
    }

    /// Decodes the JSON user data returned by the wallet library.
    ///
    /// Anything that does not carry `profile.stxAddress.{mainnet,testnet}`
    /// is rejected as a decode error.
    pub fn from_user_data_json(json: &str) -> SessionResult<Self> {
        let record: UserDataRecord = serde_json::from_str(json)?;
        Ok(Self {
            stx_address: record.profile.stx_address,
        })
    }

    /// Encodes the profile in the same shape the wallet library persists.
    pub fn to_user_data_json(&self) -> SessionResult<String> {
        let record = UserDataRecord {
            profile: ProfileRecord {
                stx_address: self.stx_address.clone(),
            },
        };
        Ok(serde_json::to_string(&record)?)
    }

    /// Both network addresses.
    pub fn stx_address(&self) -> &StxAddress {
        &self.stx_address
    }

    /// The address shown to the user (mainnet).
    pub fn wallet_address(&self) -> &str {
        &self.stx_address.mainnet
    }

    /// Truncated address for the navbar badge, e.g. `SP2J...`.
    pub fn badge_label(&self) -> String {
        let prefix: String = self
            .wallet_address()
            .chars()
            .take(BADGE_PREFIX_LEN)
            .collect();
        format!("{}...", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_DATA: &str = r#"{
        "appPrivateKey": "ab12",
        "hubUrl": "https://hub.blockstack.org",
        "decentralizedID": "did:btc-addr:1abc",
        "profile": {
            "stxAddress": {
                "mainnet": "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7",
                "testnet": "ST2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKQ9H6DPR"
            },
            "btcAddress": {}
        }
    }"#;

    #[test]
    fn test_decode_user_data() {
        let profile = UserProfile::from_user_data_json(USER_DATA).unwrap();
        assert_eq!(
            profile.wallet_address(),
            "SP2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKNRV9EJ7"
        );
        assert_eq!(
            profile.stx_address().testnet,
            "ST2J6ZY48GV1EZ5V2V5RB9MP66SW86PYKKQ9H6DPR"
        );
    }

    #[test]
    fn test_decode_rejects_missing_address() {
        let err = UserProfile::from_user_data_json(r#"{"profile":{}}"#).unwrap_err();
        assert!(matches!(err, crate::SessionError::Decode(_)));

        let err = UserProfile::from_user_data_json("not json").unwrap_err();
        assert!(matches!(err, crate::SessionError::Decode(_)));
    }

    #[test]
    fn test_badge_label() {
        let profile = UserProfile::new("SP2J6ZY48GV1", "ST2J6ZY48GV1");
        assert_eq!(profile.badge_label(), "SP2J...");

        let short = UserProfile::new("SP", "ST");
        assert_eq!(short.badge_label(), "SP...");
    }

    #[test]
    fn test_json_shape_matches_library() {
        let profile = UserProfile::new("SP1", "ST1");
        let json = profile.to_user_data_json().unwrap();
        assert_eq!(
            json,
            r#"{"profile":{"stxAddress":{"mainnet":"SP1","testnet":"ST1"}}}"#
        );
    }
}
