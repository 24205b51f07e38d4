//! Unit tests for the pipe-delimited data parser

use std::collections::HashMap;

use plugboard_domain::{DataParserExt, PipeDataParser};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "PascalCase")]
struct User {
    id: i32,
    name: String,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
struct Endpoint {
    host: String,
    port: u16,
    secure: bool,
    timeout: Option<u32>,
    mode: Mode,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
enum Mode {
    #[default]
    Push,
    Pull,
}

#[test]
fn test_parse_matches_fields_case_insensitively() {
    let user: User = PipeDataParser.parse("id:1|name:John Doe").expect("should parse");
    assert_eq!(
        user,
        User {
            id: 1,
            name: "John Doe".to_owned()
        }
    );
}

#[test]
fn test_parse_trims_and_ignores_unknown_fields() {
    let user: User = PipeDataParser
        .parse("  ID : 7 | Name :  Ada | nickname: countess")
        .expect("should parse");
    assert_eq!(user.id, 7);
    assert_eq!(user.name, "Ada");
}

#[test]
fn test_unmatched_fields_keep_zero_value() {
    let endpoint: Endpoint = PipeDataParser.parse("host:example.org").expect("should parse");
    assert_eq!(endpoint.host, "example.org");
    assert_eq!(endpoint.port, 0);
    assert!(!endpoint.secure);
    assert_eq!(endpoint.timeout, None);
    assert_eq!(endpoint.mode, Mode::Push);
}

#[test]
fn test_parse_converts_scalars_and_enums() {
    let endpoint: Endpoint = PipeDataParser
        .parse("host:h|port:8443|secure:True|timeout:30|mode:pull")
        .expect("should parse");
    assert_eq!(endpoint.port, 8443);
    assert!(endpoint.secure);
    assert_eq!(endpoint.timeout, Some(30));
    assert_eq!(endpoint.mode, Mode::Pull);
}

#[test]
fn test_empty_data_returns_default() {
    let user: User = PipeDataParser.parse("").expect("should parse");
    assert_eq!(user, User::default());
}

#[test]
fn test_malformed_field_is_data_parse_error() {
    let err = PipeDataParser.parse::<User>("id:1|name").unwrap_err();
    assert!(err.is_data_parse());
}

#[test]
fn test_conversion_failure_is_data_parse_error() {
    let err = PipeDataParser.parse::<User>("id:one").unwrap_err();
    assert!(err.is_data_parse());
    let source = std::error::Error::source(&err).expect("should carry its cause");
    assert!(source.to_string().contains("one"));
}

#[test]
fn test_parse_into_map() {
    let map: HashMap<String, String> = PipeDataParser
        .parse("region:eu|tier:gold")
        .expect("should parse");
    assert_eq!(map.get("region").map(String::as_str), Some("eu"));
    assert_eq!(map.get("tier").map(String::as_str), Some("gold"));
}

#[derive(Debug, Default, Deserialize, PartialEq)]
struct Credentials {
    user: String,
    port: u16,
}

#[test]
fn test_missing_fields_zero_fill_without_serde_default() {
    let credentials: Credentials = PipeDataParser.parse("user:admin").expect("should bind");
    assert_eq!(
        credentials,
        Credentials {
            user: "admin".to_owned(),
            port: 0
        }
    );
    assert_eq!(
        PipeDataParser.parse::<Credentials>("   ").expect("blank data"),
        Credentials::default()
    );
}
