//! RFC 6901 token escaping and iteration.
//!
//! A reference token is the text between two slashes of a pointer. In encoded
//! form, `'~'` is written `~0` and `'/'` is written `~1`; every other
//! character stands for itself. [`encode`] and [`decode`] convert between the
//! two forms, and [`Tokens`] iterates the decoded tokens of a
//! [`Pointer`](crate::Pointer).

use crate::Pointer;
use alloc::{borrow::Cow, string::String, vec::Vec};

pub(crate) const ENC_PREFIX: u8 = b'~';
pub(crate) const TILDE_ENC: u8 = b'0';
pub(crate) const SLASH_ENC: u8 = b'1';

const ENCODED_TILDE: &[u8] = b"~0";
const ENCODED_SLASH: &[u8] = b"~1";

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                               encode / decode                                ║
║                              ¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯¯                               ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// Encodes a raw token per RFC 6901, replacing `'~'` with `~0` and `'/'` with
/// `~1`.
///
/// Does not allocate unless the input contains a character that needs
/// encoding.
///
/// # Examples
///
/// ```
/// # use chainptr::token::encode;
/// assert_eq!(encode("a/b"), "a~1b");
/// assert_eq!(encode("~bar"), "~0bar");
/// assert_eq!(encode("plain"), "plain");
/// ```
pub fn encode(token: &str) -> Cow<'_, str> {
    let Some(i) = token.bytes().position(|b| b == b'/' || b == b'~') else {
        return Cow::Borrowed(token);
    };
    let input = token.as_bytes();
    // we could copy the entire string and overwrite in place, but the output
    // grows past the input anyway, so instead we allocate a new buffer and
    // copy only the prefix up to the first encoded character
    // NOTE: the output is at least as large as the input + 1, so we allocate
    // that much capacity ahead of time
    let mut bytes = Vec::with_capacity(input.len() + 1);
    bytes.extend_from_slice(&input[..i]);
    for &b in &input[i..] {
        match b {
            b'/' => bytes.extend_from_slice(ENCODED_SLASH),
            b'~' => bytes.extend_from_slice(ENCODED_TILDE),
            other => bytes.push(other),
        }
    }
    // SAFETY: we started from a valid UTF-8 sequence of bytes, and only
    // replaced some ASCII characters with other two ASCII characters, so the
    // output is guaranteed valid UTF-8.
    Cow::Owned(unsafe { String::from_utf8_unchecked(bytes) })
}

/// Decodes an RFC 6901 encoded token, replacing `~0` with `'~'` and `~1` with
/// `'/'`.
///
/// Decoding is lenient: a `'~'` followed by anything other than `'0'` or
/// `'1'` is kept literally, as is a trailing `'~'`. Does not allocate unless
/// the input contains a `'~'`.
///
/// # Examples
///
/// ```
/// # use chainptr::token::decode;
/// assert_eq!(decode("~1foo~1~0bar"), "/foo/~bar");
/// assert_eq!(decode("a~2b"), "a~2b");
/// assert_eq!(decode("trailing~"), "trailing~");
/// ```
pub fn decode(token: &str) -> Cow<'_, str> {
    let Some(i) = token.bytes().position(|b| b == ENC_PREFIX) else {
        return Cow::Borrowed(token);
    };
    let input = token.as_bytes();
    let mut bytes = Vec::with_capacity(input.len());
    bytes.extend_from_slice(&input[..i]);
    let mut pos = i;
    while pos < input.len() {
        let b = input[pos];
        if b == ENC_PREFIX && pos + 1 < input.len() {
            match input[pos + 1] {
                TILDE_ENC => {
                    bytes.push(b'~');
                    pos += 2;
                    continue;
                }
                SLASH_ENC => {
                    bytes.push(b'/');
                    pos += 2;
                    continue;
                }
                _ => {}
            }
        }
        bytes.push(b);
        pos += 1;
    }
    // SAFETY: we start from a valid UTF-8 sequence and only collapse pairs of
    // ASCII characters into single ASCII characters.
    Cow::Owned(unsafe { String::from_utf8_unchecked(bytes) })
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Tokens                                    ║
║                                   ¯¯¯¯¯¯¯¯                                   ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

/// An iterator over the decoded tokens of a [`Pointer`].
///
/// ```
/// # use chainptr::Pointer;
/// let ptr = Pointer::parse("/a~1b/c").unwrap();
/// let tokens: Vec<_> = ptr.tokens().collect();
/// assert_eq!(tokens, vec!["a/b", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    cursor: &'a Pointer,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;
    fn next(&mut self) -> Option<Self::Item> {
        let (token, tail) = self.cursor.split_first()?;
        self.cursor = tail;
        Some(token)
    }
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(cursor: &'a Pointer) -> Self {
        Self { cursor }
    }
}

/*
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
╔══════════════════════════════════════════════════════════════════════════════╗
║                                                                              ║
║                                    Tests                                     ║
║                                   ¯¯¯¯¯¯¯                                    ║
╚══════════════════════════════════════════════════════════════════════════════╝
░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
*/

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{borrow::ToOwned, vec, vec::Vec};
    use quickcheck_macros::quickcheck;

    #[test]
    fn encode_escapes() {
        assert_eq!(encode("/"), "~1");
        assert_eq!(encode("~/"), "~0~1");
        assert_eq!(encode("~1"), "~01");
        assert_eq!(encode("a/b"), "a~1b");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn encode_borrows_when_clean() {
        assert!(matches!(encode("plain"), Cow::Borrowed(_)));
        assert!(matches!(encode("a/b"), Cow::Owned(_)));
    }

    #[test]
    fn decode_unescapes() {
        assert_eq!(decode("~1"), "/");
        assert_eq!(decode("~0~1"), "~/");
        assert_eq!(decode("a~1b"), "a/b");
        assert_eq!(decode("~01"), "~1");
    }

    #[test]
    fn decode_is_lenient() {
        assert_eq!(decode("~"), "~");
        assert_eq!(decode("~2"), "~2");
        assert_eq!(decode("a~~1b"), "a~/b");
        assert_eq!(decode("a~x~0"), "a~x~");
    }

    #[quickcheck]
    fn encode_decode(s: String) -> bool {
        decode(&encode(&s)) == s
    }

    #[test]
    fn tokens() {
        let ptr = crate::Pointer::parse("/a/b/c").unwrap();
        let tokens: Vec<_> = ptr.tokens().collect();
        assert_eq!(tokens, vec!["a", "b", "c"]);

        let ptr = crate::Pointer::parse("/a~1b//~0").unwrap();
        let tokens: Vec<_> = ptr.tokens().collect();
        assert_eq!(tokens, vec!["a/b".to_owned(), "".to_owned(), "~".to_owned()]);

        assert_eq!(crate::Pointer::empty().tokens().count(), 0);
    }
}
