use pretty_assertions::assert_eq;

use crate::strings::{framed_lines, from_c_buffer};
use crate::OptExt;

#[test]
fn c_buffer_stops_at_nul() {
    let bytes = b"0:1(1): error: syntax error\0\0\0garbage".to_vec();
    assert_eq!(from_c_buffer(bytes), "0:1(1): error: syntax error");
}

#[test]
fn c_buffer_trims_trailing_whitespace() {
    let bytes = b"first line\nsecond line\n\n  ".to_vec();
    assert_eq!(from_c_buffer(bytes), "first line\nsecond line");
}

#[test]
fn c_buffer_replaces_invalid_utf8() {
    let bytes = vec![b'o', b'k', 0xff, b'!'];
    assert_eq!(from_c_buffer(bytes), "ok\u{fffd}!");
}

#[test]
fn c_buffer_empty() {
    assert_eq!(from_c_buffer(Vec::new()), "");
    assert_eq!(from_c_buffer(vec![0; 16]), "");
}

#[test]
fn framing() {
    assert_eq!(framed_lines("a\nb"), " | \n | a\n | b\n | ");
    assert_eq!(framed_lines(""), " | \n | ");
}

#[test]
fn unwrap_unreach_some() {
    assert_eq!(Some(3).unwrap_unreach(), 3);
    let ok: Result<u8, ()> = Ok(7);
    assert_eq!(ok.unwrap_unreach(), 7);
}

#[test]
#[should_panic]
fn unwrap_unreach_none() {
    let none: Option<u8> = None;
    none.unwrap_unreach();
}
