//! Dictionary compression codec (LZW family).
//!
//! A single-pass adaptive encoder and its symmetric decoder. The dictionary
//! is seeded with all 256 single-byte values (codes 0-255); longer phrases
//! are assigned codes from 256 upward as they are first observed. Codes are
//! emitted as plain integers rather than a packed bitstream, which keeps the
//! output trivially embeddable in a JSON artifact as a comma-joined string
//! (see [`to_code_string`] / [`parse_code_string`]).
//!
//! The codec operates on the UTF-8 **bytes** of the input, so the round-trip
//! law `decode(encode(s)) == s` holds for every string, including text far
//! outside Latin-1. [`decode`] validates that the reconstructed bytes form
//! valid UTF-8 and reports malformed streams instead of producing garbage.
//!
//! No cap is imposed on dictionary size: the dictionary and the code values
//! grow without bound with input length. That is a deliberate simplification
//! for the short conversation payloads this crate targets; feeding multi-
//! gigabyte inputs through it would want an eviction or reset policy this
//! module does not have.
//!
//! # Examples
//!
//! ```
//! use chatlift::codec;
//!
//! let codes = codec::encode("AAA");
//! assert_eq!(codes, vec![65, 256]);
//! assert_eq!(codec::decode(&codes)?, "AAA");
//! # Ok::<(), chatlift::ChatliftError>(())
//! ```

use std::collections::HashMap;

use crate::error::{ChatliftError, Result};

/// Encodes a string into a sequence of dictionary codes.
///
/// Scans the input bytes left to right, always holding the longest phrase
/// already present in the dictionary. When the next byte breaks the match,
/// the phrase's code is emitted, the extended phrase is inserted under the
/// next free code, and scanning restarts at the breaking byte.
///
/// Empty input yields an empty sequence.
///
/// # Examples
///
/// ```
/// use chatlift::codec;
///
/// assert_eq!(codec::encode(""), Vec::<u32>::new());
/// assert_eq!(codec::encode("AAA"), vec![65, 256]);
/// assert_eq!(codec::encode("AAAA"), vec![65, 256, 65]);
/// ```
pub fn encode(input: &str) -> Vec<u32> {
    let bytes = input.as_bytes();
    let Some((&first, rest)) = bytes.split_first() else {
        return Vec::new();
    };

    let mut dict: HashMap<Vec<u8>, u32> = (0u32..256).map(|i| (vec![i as u8], i)).collect();
    let mut next_code: u32 = 256;

    let mut phrase: Vec<u8> = vec![first];
    let mut phrase_code = u32::from(first);
    let mut output = Vec::new();

    for &byte in rest {
        phrase.push(byte);
        if let Some(&code) = dict.get(&phrase) {
            phrase_code = code;
        } else {
            output.push(phrase_code);
            dict.insert(std::mem::take(&mut phrase), next_code);
            next_code += 1;
            phrase.push(byte);
            phrase_code = u32::from(byte);
        }
    }

    // The accumulator is never empty here: single bytes are always in the dictionary.
    output.push(phrase_code);
    output
}

/// Decodes a sequence of dictionary codes back into the original string.
///
/// Rebuilds the same dictionary the encoder built, one entry per code
/// consumed. A code equal to the next unassigned code refers to the entry
/// being built right now (the classic LZW corner case); its value is the
/// previous phrase extended by its own first byte.
///
/// # Errors
///
/// Returns [`ChatliftError::MalformedStream`] if a code is neither a known
/// entry nor the next code to be assigned, or if the reconstructed bytes are
/// not valid UTF-8.
///
/// # Examples
///
/// ```
/// use chatlift::codec;
///
/// assert_eq!(codec::decode(&[])?, "");
/// assert_eq!(codec::decode(&[72, 105])?, "Hi");
/// assert!(codec::decode(&[72, 999]).is_err());
/// # Ok::<(), chatlift::ChatliftError>(())
/// ```
pub fn decode(codes: &[u32]) -> Result<String> {
    if codes.is_empty() {
        return Ok(String::new());
    }

    let mut dict: Vec<Vec<u8>> = (0u32..256).map(|i| vec![i as u8]).collect();
    let mut output: Vec<u8> = Vec::new();
    let mut prev: Vec<u8> = Vec::new();

    for &code in codes {
        let next_code = dict.len() as u32;
        let entry = if let Some(known) = dict.get(code as usize) {
            known.clone()
        } else if code == next_code && !prev.is_empty() {
            // Code for the entry currently being assembled: prev + prev[0].
            let mut assembled = prev.clone();
            assembled.push(prev[0]);
            assembled
        } else {
            return Err(ChatliftError::code_out_of_range(code, next_code));
        };

        if !prev.is_empty() {
            let mut new_entry = prev;
            new_entry.push(entry[0]);
            dict.push(new_entry);
        }

        output.extend_from_slice(&entry);
        prev = entry;
    }

    Ok(String::from_utf8(output)?)
}

/// Joins codes into the compact comma-separated form used in artifacts.
///
/// # Example
///
/// ```
/// use chatlift::codec;
///
/// assert_eq!(codec::to_code_string(&[65, 256, 65]), "65,256,65");
/// assert_eq!(codec::to_code_string(&[]), "");
/// ```
pub fn to_code_string(codes: &[u32]) -> String {
    codes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses the comma-separated code form back into a code sequence.
///
/// Whitespace around tokens is tolerated; an empty string parses to an
/// empty sequence.
///
/// # Errors
///
/// Returns [`ChatliftError::MalformedStream`] if any token is not a
/// non-negative integer that fits a code.
///
/// # Example
///
/// ```
/// use chatlift::codec;
///
/// assert_eq!(codec::parse_code_string("65,256,65")?, vec![65, 256, 65]);
/// assert!(codec::parse_code_string("65,x,65").is_err());
/// # Ok::<(), chatlift::ChatliftError>(())
/// ```
pub fn parse_code_string(s: &str) -> Result<Vec<u32>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<u32>()
                .map_err(|_| ChatliftError::invalid_token(token))
        })
        .collect()
}

/// Encodes a string straight to the comma-joined artifact form.
///
/// Equivalent to [`to_code_string`] over [`encode`].
pub fn compress_to_string(input: &str) -> String {
    to_code_string(&encode(input))
}

/// Decodes the comma-joined artifact form straight back to the string.
///
/// Equivalent to [`decode`] over [`parse_code_string`].
///
/// # Errors
///
/// Returns [`ChatliftError::MalformedStream`] for unparseable tokens or an
/// undecodable code sequence.
pub fn decompress_from_string(s: &str) -> Result<String> {
    decode(&parse_code_string(s)?)
}
