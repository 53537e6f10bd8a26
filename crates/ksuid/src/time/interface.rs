/// A trait for time sources that return the current time in seconds.
///
/// This abstraction allows you to plug in the wall clock or a mocked clock
/// in tests.
///
/// The time type `T` is generic; the KSUID generators use `i64` unix seconds
/// so that clocks reading before 1970 (or before the KSUID epoch) are
/// representable and can be rejected instead of wrapping.
///
/// # Example
/// ```
/// use ksuid::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<i64> for FixedTime {
///     fn current_secs(&self) -> i64 {
///         1_609_459_200
///     }
/// }
///
/// assert_eq!(FixedTime.current_secs(), 1_609_459_200);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in seconds since the unix epoch.
    fn current_secs(&self) -> T;
}
