/// A trait for sources of random values.
///
/// Generators take one of these instead of reaching for a global RNG, so
/// tests can plug in a deterministic fake.
///
/// `T` is the value produced per call. Ids draw their randomness as byte
/// arrays: `[u8; 16]` for a KSUID payload, `[u8; 20]` for a token.
///
/// # Example
/// ```
/// use ksuid::RandSource;
///
/// struct FixedRand;
/// impl RandSource<[u8; 16]> for FixedRand {
///     fn rand(&self) -> [u8; 16] {
///         [7; 16]
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), [7; 16]);
/// ```
pub trait RandSource<T> {
    /// Returns a random value.
    fn rand(&self) -> T;
}
