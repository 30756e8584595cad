/*
[INPUT]:  Generated and hand-written challenge texts
[OUTPUT]: Test results for the challenge codec
[POS]:    Integration tests - message codec
[UPDATE]: When the challenge template changes
*/

use rstest::rstest;
use totem_auth::{Challenge, generate_challenge, parse_challenge};

#[rstest]
#[case("0xABCD000000000000000000000000000000001234")]
#[case("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266")]
#[case("9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin")]
#[case("")]
#[case("0xabc\nNonce: deadbeef\nTimestamp: 1")]
#[case("Timestamp: 42\r\nNonce: 00ff")]
fn test_round_trip_for_addresses(#[case] address: &str) {
    let challenge = generate_challenge(address);
    let parsed = parse_challenge(&challenge.text).expect("generated challenge must parse");

    assert_eq!(parsed.nonce, challenge.nonce);
    assert_eq!(parsed.timestamp, challenge.timestamp);
    assert!(challenge.text.contains(address));
}

#[rstest]
#[case::empty("")]
#[case::missing_nonce("Timestamp: 1700000000000")]
#[case::missing_timestamp("Nonce: 11111111-2222-3333-4444-555555555555")]
#[case::empty_nonce("Nonce: \nTimestamp: 1700000000000")]
#[case::non_hex_nonce("Nonce: not-a-nonce!\nTimestamp: 1700000000000")]
#[case::non_numeric_timestamp("Nonce: abc\nTimestamp: yesterday")]
#[case::negative_timestamp("Nonce: abc\nTimestamp: -5")]
#[case::lowercase_labels("nonce: abc\ntimestamp: 1")]
fn test_parse_rejects(#[case] text: &str) {
    assert!(parse_challenge(text).is_none());
}

#[test]
fn test_parse_example_scenario() {
    let challenge = Challenge::from_parts(
        "0xABCD000000000000000000000000000000001234",
        "11111111-2222-3333-4444-555555555555",
        1_700_000_000_000,
    );

    let parsed = parse_challenge(&challenge.text).unwrap();
    assert_eq!(parsed.nonce, "11111111-2222-3333-4444-555555555555");
    assert_eq!(parsed.timestamp, 1_700_000_000_000);
}

#[test]
fn test_parse_ignores_surrounding_lines() {
    let text = "Some wallet prefix\n  Nonce: ABCDEF-0123  \nTimestamp: 12\ntrailing";
    let parsed = parse_challenge(text).unwrap();
    assert_eq!(parsed.nonce, "ABCDEF-0123");
    assert_eq!(parsed.timestamp, 12);
}
