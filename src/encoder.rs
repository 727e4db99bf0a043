use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet};

use crate::parameters::ParameterValue;

// https://tools.ietf.org/html/rfc3986#section-2.3
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
// * All other characters MUST be encoded.
// * The two hexadecimal characters used to represent encoded
//   characters MUST be uppercase.
const TARGETS_FOR_PARAMS: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode `input` per RFC 3986.
///
/// After encoding, `%7E` is turned back into `~`, then `+` into a space.
/// Neither substitution fires on output of this encode set; the order matches
/// the post-processing the API server performs.
pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, TARGETS_FOR_PARAMS)
        .to_string()
        .replace("%7E", "~")
        .replace('+', " ")
}

/// Encode a parameter value, element-wise for multi-valued ones.
pub fn encode_value(value: &ParameterValue) -> ParameterValue {
    match value {
        ParameterValue::Single(v) => ParameterValue::Single(encode(v)),
        ParameterValue::Multi(values) => {
            ParameterValue::Multi(values.iter().map(|v| encode(v)).collect())
        }
    }
}

/// Decode a query-string component: `+` means space, then percent-decode.
///
/// Invalid UTF-8 after decoding is replaced rather than rejected.
pub fn decode(input: &str) -> String {
    let plus_as_space = input.replace('+', " ");
    percent_decode_str(&plus_as_space)
        .decode_utf8_lossy()
        .into_owned()
}
