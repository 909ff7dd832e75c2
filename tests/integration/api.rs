//! Integration tests for the public tokenizer API

use std::collections::BTreeSet;
use strlist::{
    next_token, parse_list, parse_list_ignoring, parse_list_into, parse_set, tokens, DelimiterSet,
};

#[test]
fn test_host_list() {
    assert_eq!(
        parse_list("mon.a=10.0.0.1:6789; mon.b=10.0.0.2:6789"),
        vec!["mon.a", "10.0.0.1:6789", "mon.b", "10.0.0.2:6789"]
    );
}

#[test]
fn test_key_value_pairs_kept_whole() {
    assert_eq!(
        parse_list_ignoring("rw,noatime debug_ms=1 ; log_file=/var/log/x", "="),
        vec!["rw", "noatime", "debug_ms=1", "log_file=/var/log/x"]
    );
}

#[test]
fn test_flag_set() {
    let flags = parse_set("noout nodown noout\tnoup");
    let expected: BTreeSet<String> = ["nodown", "noout", "noup"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(flags, expected);
}

#[test]
fn test_buffer_reuse() {
    let mut out = Vec::new();
    for (input, expected) in [("a b", 2), ("", 0), ("x;y;z", 3)] {
        parse_list_into(input, "", &mut out);
        assert_eq!(out.len(), expected, "input {:?}", input);
    }
}

#[test]
fn test_manual_cursor_threading() {
    let input = "a;;b , c";
    let mut cursor = 0;
    let mut raw = Vec::new();
    while cursor < input.len() {
        match next_token(input, cursor, DelimiterSet::DEFAULT) {
            Some((token, next)) => {
                raw.push(token);
                cursor = next;
            }
            None => break,
        }
    }
    assert_eq!(raw, vec!["a", "", "b", ",", "c"]);
    assert_eq!(raw, tokens(input, DelimiterSet::DEFAULT).collect::<Vec<_>>());
}

#[test]
fn test_whitespace_tail_terminates() {
    assert_eq!(parse_list("a \t \t "), vec!["a"]);
    assert_eq!(parse_set("a   ").len(), 1);
}
