use core::fmt;
use core::hash::Hash;

/// Marker for bytes that are not part of an alphabet.
pub const NO_VALUE: u8 = 255;

const BASE62_SYMBOLS: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const BASE36_SYMBOLS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const BASE62_LOOKUP: [u8; 256] = lookup_table(BASE62_SYMBOLS);
const BASE36_LOOKUP: [u8; 256] = lookup_table(BASE36_SYMBOLS);

/// Builds the byte -> digit table for `symbols`, leaving [`NO_VALUE`] for
/// everything else.
const fn lookup_table(symbols: &[u8]) -> [u8; 256] {
    let mut lut = [NO_VALUE; 256];
    let mut i = 0;
    while i < symbols.len() {
        lut[symbols[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

/// A positional alphabet with a fixed output width for 20-byte values.
///
/// Symbols are listed in ascending ASCII order so that comparing two encoded
/// strings byte-by-byte gives the same result as comparing the integers they
/// encode. Combined with zero-padding to [`Alphabet::WIDTH`], this makes the
/// encoding order-preserving.
///
/// `WIDTH` is the smallest `n` with `RADIX^n >= 2^160`, i.e.
/// `ceil(160 * ln 2 / ln RADIX)`. It is part of the wire format and never
/// recomputed.
pub trait Alphabet:
    Copy + Clone + Default + fmt::Debug + PartialEq + Eq + PartialOrd + Ord + Hash + 'static
{
    /// Number of symbols.
    const RADIX: u8;
    /// Exact number of characters produced for a 20-byte value.
    const WIDTH: usize;
    /// Symbols in digit order; `SYMBOLS[0]` is the zero symbol.
    const SYMBOLS: &'static [u8];
    /// Direct byte -> digit mapping, [`NO_VALUE`] for non-members.
    const LOOKUP: &'static [u8; 256];
    /// Human-readable name used in diagnostics.
    const NAME: &'static str;

    /// Stack buffer holding exactly `WIDTH` ASCII bytes.
    type Buf: AsRef<[u8]>
        + AsMut<[u8]>
        + fmt::Debug
        + Default
        + Copy
        + PartialEq
        + Eq
        + PartialOrd
        + Ord
        + Hash;
}

/// Mixed-case base62: `0-9`, `A-Z`, `a-z`. 27 characters per value.
///
/// This is the canonical KSUID text format, compatible with the reference
/// implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base62;

impl Alphabet for Base62 {
    const RADIX: u8 = 62;
    const WIDTH: usize = 27;
    const SYMBOLS: &'static [u8] = BASE62_SYMBOLS;
    const LOOKUP: &'static [u8; 256] = &BASE62_LOOKUP;
    const NAME: &'static str = "base62";

    type Buf = [u8; 27];
}

/// Lowercase base36: `0-9`, `a-z`. 31 characters per value.
///
/// Useful where identifiers must survive case-insensitive systems
/// (hostnames, some filesystems, DNS labels).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Base36;

impl Alphabet for Base36 {
    const RADIX: u8 = 36;
    const WIDTH: usize = 31;
    const SYMBOLS: &'static [u8] = BASE36_SYMBOLS;
    const LOOKUP: &'static [u8; 256] = &BASE36_LOOKUP;
    const NAME: &'static str = "base36";

    type Buf = [u8; 31];
}
