//! Base58 and Base58Check encoding.
//!
//! The encoder treats its input as one big-endian unsigned integer and
//! repeatedly divides it by 58 with a byte-array long-division routine, so
//! payloads wider than any fixed-width integer (a 34-byte WIF body, say)
//! need no big-integer type. Leading `0x00` bytes carry no numeric weight
//! and are preserved as leading `'1'` characters instead.

use crate::error::{Error, Result};
use crate::hashes::double_sha256;

/// Bitcoin's Base58 alphabet: `0`, `O`, `I` and `l` are excluded.
const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Divide a big-endian byte-array integer by 58 in place and return the
/// remainder. The quotient keeps its width; callers strip zeros by checking
/// [`is_zero`].
fn div_mod_58(num: &mut [u8]) -> u8 {
    let mut rem: u32 = 0;
    for byte in num.iter_mut() {
        let acc = rem * 256 + u32::from(*byte);
        *byte = (acc / 58) as u8;
        rem = acc % 58;
    }
    rem as u8
}

fn is_zero(num: &[u8]) -> bool {
    num.iter().all(|&b| b == 0)
}

/// Base58 encode bytes. Empty input encodes to an empty string.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();

    let mut num = bytes.to_vec();
    let mut digits = Vec::new(); // remainders, least significant first
    while !is_zero(&num) {
        digits.push(div_mod_58(&mut num));
    }

    let mut out = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        out.push('1');
    }
    for &d in digits.iter().rev() {
        out.push(ALPHABET[d as usize] as char);
    }
    out
}

/// Base58 decode into bytes, restoring one leading zero byte per leading
/// `'1'` character.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let chars = text.as_bytes();
    let ones = chars.iter().take_while(|&&c| c == b'1').count();

    // Accumulate digit by digit into a little-endian byte integer
    let mut num: Vec<u8> = Vec::new();
    for &c in &chars[ones..] {
        let val = ALPHABET
            .iter()
            .position(|&a| a == c)
            .ok_or_else(|| Error::InvalidEncoding(format!("invalid base58 character {:?}", c as char)))?;

        let mut carry = val as u32;
        for byte in num.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            num.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; ones];
    out.extend(num.iter().rev());
    Ok(out)
}

/// Return `payload ++ double_sha256(payload)[0..4]`.
#[must_use]
pub fn checksum_append(payload: &[u8]) -> Vec<u8> {
    let checksum = double_sha256(payload);
    let mut data = payload.to_vec();
    data.extend_from_slice(&checksum[..4]);
    data
}

/// Base58Check encode: checksum the payload, then encode. This is the only
/// entry point the derivation pipeline uses.
#[must_use]
pub fn check_encode(payload: &[u8]) -> String {
    encode(&checksum_append(payload))
}

/// Base58Check decode: verify and strip the 4-byte checksum, returning the
/// payload (version byte included).
pub fn check_decode(text: &str) -> Result<Vec<u8>> {
    let data = decode(text)?;
    if data.len() < 4 {
        return Err(Error::InvalidEncoding(
            "Base58Check data shorter than its checksum".into(),
        ));
    }

    let (payload, checksum) = data.split_at(data.len() - 4);
    if double_sha256(payload)[..4] != *checksum {
        return Err(Error::InvalidChecksum);
    }
    Ok(payload.to_vec())
}
