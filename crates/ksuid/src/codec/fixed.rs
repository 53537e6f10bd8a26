use crate::{Alphabet, DecodeError, ID_LEN, NO_VALUE};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// 32-bit limbs needed for a 160-bit value.
const LIMBS: usize = ID_LEN / 4;

/// One spare limb on top of the 160-bit value. `RADIX^WIDTH` stays below
/// `2^192` for every supported alphabet, so accumulating a full-width string
/// into this many limbs cannot wrap.
const WIDE_LIMBS: usize = LIMBS + 1;

/// Encodes a 20-byte big-endian value into `buf` using alphabet `A`.
///
/// The value is repeatedly divided by the radix, remainders are written from
/// the right, and once the quotient reaches zero the remaining leading
/// positions are filled with the zero symbol. The output therefore always
/// spans the whole buffer.
///
/// `buf` must be exactly [`Alphabet::WIDTH`] bytes long, which is guaranteed
/// when it comes from [`Alphabet::Buf`].
pub fn encode_fixed<A: Alphabet>(bytes: &[u8; ID_LEN], buf: &mut [u8]) {
    debug_assert_eq!(buf.len(), A::WIDTH, "{} buffer has the wrong width", A::NAME);

    let mut limbs = [0_u32; LIMBS];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let at = i * 4;
        *limb = u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
    }

    let radix = u64::from(A::RADIX);
    let mut out = buf.len();
    // index of the most significant non-zero limb
    let mut head = 0;

    while head < LIMBS {
        if limbs[head] == 0 {
            head += 1;
            continue;
        }

        let mut rem = 0_u64;
        for limb in &mut limbs[head..] {
            let acc = (rem << 32) | u64::from(*limb);
            // acc < radix * 2^32, so the quotient fits in a limb
            *limb = (acc / radix) as u32;
            rem = acc % radix;
        }

        debug_assert!(out > 0, "{} width too small for 160 bits", A::NAME);
        out -= 1;
        buf[out] = A::SYMBOLS[rem as usize];
    }

    buf[..out].fill(A::SYMBOLS[0]);
}

/// Decodes a fixed-width string in alphabet `A` back into 20 big-endian bytes.
///
/// # Errors
///
/// - [`DecodeError::InvalidLength`] if the input is not exactly
///   [`Alphabet::WIDTH`] bytes.
/// - [`DecodeError::InvalidAscii`] for the first byte outside the alphabet.
/// - [`DecodeError::Overflow`] if the digits describe a value of `2^160` or
///   more. A full-width string can exceed 160 bits (`62^27 > 2^160` and
///   `36^31 > 2^160`); the value is accumulated in a wider buffer and checked
///   explicitly rather than truncated.
#[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all, fields(alphabet = A::NAME), err))]
pub fn decode_fixed<A: Alphabet>(encoded: &str) -> Result<[u8; ID_LEN], DecodeError> {
    let input = encoded.as_bytes();
    if input.len() != A::WIDTH {
        return Err(DecodeError::InvalidLength {
            len: input.len(),
            expected: A::WIDTH,
        });
    }

    let radix = u64::from(A::RADIX);
    let mut wide = [0_u32; WIDE_LIMBS];

    for (index, &byte) in input.iter().enumerate() {
        let digit = A::LOOKUP[byte as usize];
        if digit == NO_VALUE {
            return Err(DecodeError::InvalidAscii { byte, index });
        }

        // wide = wide * radix + digit, least significant limb first
        let mut carry = u64::from(digit);
        for limb in wide.iter_mut().rev() {
            let acc = u64::from(*limb) * radix + carry;
            *limb = acc as u32;
            carry = acc >> 32;
        }
        debug_assert_eq!(carry, 0, "{} accumulator wrapped", A::NAME);
    }

    if wide[0] != 0 {
        return Err(DecodeError::Overflow);
    }

    let mut out = [0_u8; ID_LEN];
    for (chunk, limb) in out.chunks_exact_mut(4).zip(&wide[1..]) {
        chunk.copy_from_slice(&limb.to_be_bytes());
    }
    Ok(out)
}
