/*
[INPUT]:  Wallet address (generation) or signed challenge text (parsing)
[OUTPUT]: Rendered challenge with nonce/timestamp, or recovered nonce/timestamp
[POS]:    Auth layer - challenge message codec
[UPDATE]: When the challenge template or its parsed fields change
*/

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const NONCE_PREFIX: &str = "Nonce:";
const TIMESTAMP_PREFIX: &str = "Timestamp:";

/// A challenge message ready to be signed by a wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub address: String,
    pub nonce: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Exact text the wallet signs
    pub text: String,
}

/// Fields recovered from a challenge text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedChallenge {
    pub nonce: String,
    pub timestamp: i64,
}

impl Challenge {
    /// Render a challenge from caller-supplied parts
    pub fn from_parts(
        address: impl Into<String>,
        nonce: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        let address = address.into();
        let nonce = nonce.into();
        let text = render(&address, &nonce, timestamp);
        Self {
            address,
            nonce,
            timestamp,
            text,
        }
    }
}

/// Generate a fresh challenge for `address` with a random v4 UUID nonce
/// and the current wall-clock time.
pub fn generate_challenge(address: &str) -> Challenge {
    let nonce = Uuid::new_v4().to_string();
    let timestamp = Utc::now().timestamp_millis();
    Challenge::from_parts(address, nonce, timestamp)
}

/// Recover the nonce and timestamp from a challenge text.
///
/// The last `Nonce:` and `Timestamp:` lines win: they follow the `Wallet:`
/// line, so an address containing line breaks cannot override them.
///
/// Returns `None` when either line is missing or malformed; callers must
/// treat that as an untrusted message.
pub fn parse_challenge(text: &str) -> Option<ParsedChallenge> {
    let nonce = field(text, NONCE_PREFIX).filter(|value| is_nonce_token(value))?;
    let timestamp = field(text, TIMESTAMP_PREFIX)
        .filter(|value| value.bytes().all(|b| b.is_ascii_digit()))?
        .parse::<i64>()
        .ok()?;

    Some(ParsedChallenge {
        nonce: nonce.to_string(),
        timestamp,
    })
}

fn render(address: &str, nonce: &str, timestamp: i64) -> String {
    format!(
        "Welcome to INTUITION Founders Totem!\n\
         \n\
         Sign this message to prove you own this wallet.\n\
         \n\
         Wallet: {address}\n\
         {NONCE_PREFIX} {nonce}\n\
         {TIMESTAMP_PREFIX} {timestamp}\n\
         \n\
         This request will not trigger a blockchain transaction or cost any gas fees."
    )
}

fn field<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    text.lines()
        .rev()
        .find_map(|line| line.trim().strip_prefix(prefix))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn is_nonce_token(value: &str) -> bool {
    value.bytes().all(|b| b.is_ascii_hexdigit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDRESS: &str = "0xABCD000000000000000000000000000000001234";

    #[test]
    fn test_render_template() {
        let challenge = Challenge::from_parts(
            ADDRESS,
            "11111111-2222-3333-4444-555555555555",
            1_700_000_000_000,
        );

        let lines: Vec<&str> = challenge.text.lines().collect();
        assert_eq!(lines[0], "Welcome to INTUITION Founders Totem!");
        assert!(lines.contains(&"Wallet: 0xABCD000000000000000000000000000000001234"));
        assert!(lines.contains(&"Nonce: 11111111-2222-3333-4444-555555555555"));
        assert!(lines.contains(&"Timestamp: 1700000000000"));
        assert!(challenge.text.ends_with("cost any gas fees."));
    }

    #[test]
    fn test_generate_uses_uuid_v4_nonce() {
        let challenge = generate_challenge(ADDRESS);
        let uuid = Uuid::parse_str(&challenge.nonce).unwrap();
        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(challenge.nonce.len(), 36);
        assert_eq!(challenge.address, ADDRESS);
    }

    #[test]
    fn test_generate_produces_distinct_nonces() {
        let a = generate_challenge(ADDRESS);
        let b = generate_challenge(ADDRESS);
        assert_ne!(a.nonce, b.nonce);
    }

    #[test]
    fn test_generate_timestamp_is_now() {
        let before = Utc::now().timestamp_millis();
        let challenge = generate_challenge(ADDRESS);
        let after = Utc::now().timestamp_millis();
        assert!(challenge.timestamp >= before && challenge.timestamp <= after);
    }

    #[test]
    fn test_parse_round_trip() {
        let challenge = generate_challenge(ADDRESS);
        let parsed = parse_challenge(&challenge.text).unwrap();
        assert_eq!(parsed.nonce, challenge.nonce);
        assert_eq!(parsed.timestamp, challenge.timestamp);
    }

    #[test]
    fn test_parse_tolerates_crlf() {
        let challenge =
            Challenge::from_parts(ADDRESS, "11111111-2222-3333-4444-555555555555", 42);
        let crlf = challenge.text.replace('\n', "\r\n");
        let parsed = parse_challenge(&crlf).unwrap();
        assert_eq!(parsed.timestamp, 42);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(parse_challenge("").is_none());
    }

    #[test]
    fn test_parse_rejects_timestamp_overflow() {
        let text = "Nonce: abc-123\nTimestamp: 99999999999999999999999";
        assert!(parse_challenge(text).is_none());
    }

    #[test]
    fn test_serialize_camel_case() {
        let challenge = Challenge::from_parts(ADDRESS, "abc", 7);
        let json = serde_json::to_value(&challenge).unwrap();
        assert_eq!(json["nonce"], "abc");
        assert_eq!(json["timestamp"], 7);
        assert_eq!(json["text"], challenge.text);
    }
}
