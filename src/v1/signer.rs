use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::encoder::encode;

type HmacSha1 = Hmac<Sha1>;

/// HMAC-SHA1 signature of `base_string`, base64-encoded.
///
/// The signing key is `encode(private_key)&`: there is no token secret, so
/// its half of the key stays empty.
pub fn sign(base_string: &str, private_key: &str) -> String {
    let sign_key = format!("{}&", encode(private_key));
    generate_signature_hmacsha1(&sign_key, base_string)
}

fn generate_signature_hmacsha1(sign_key: &str, base_string: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(sign_key.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(base_string.as_bytes());
    BASE64_STANDARD.encode(mac.finalize().into_bytes())
}
