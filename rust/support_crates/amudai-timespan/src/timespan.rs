use super::*;
use num_traits::{Bounded, CheckedAdd, Zero};
use std::cmp::*;
use std::ops::*;

/// A signed time span represented as a count of 100-nanosecond ticks.
///
/// `TimeSpan` stores a single `i64` tick count, so its range is the full
/// signed 64-bit range (approximately ±29,227 years) and its precision is
/// 100 nanoseconds. The layout and semantics match .NET's `TimeSpan`.
///
/// # Tick Definition
///
/// - 1 tick = 100 nanoseconds
/// - 1 microsecond = 10 ticks
/// - 1 millisecond = 10,000 ticks
/// - 1 second = 10,000,000 ticks
/// - 1 minute = 600,000,000 ticks
/// - 1 hour = 36,000,000,000 ticks
/// - 1 day = 864,000,000,000 ticks
///
/// # Construction
///
/// Raw tick counts are always representable, so [`TimeSpan::from_ticks`] is
/// infallible. Every unit-based constructor accepts fractional `f64` inputs,
/// converts them to microseconds and funnels through
/// [`TimeSpan::from_microseconds`], which rejects anything that does not fit
/// into 64-bit ticks with [`TimeSpanError::OutOfRange`].
///
/// # Examples
///
/// ```
/// # use amudai_timespan::TimeSpan;
/// let span = TimeSpan::from_time(1, 2, 3).unwrap();
/// assert_eq!(span.days(), 1);
/// assert_eq!(span.hours(), 2);
/// assert_eq!(span.minutes(), 3);
///
/// let sum = span.add_to(TimeSpan::from_time(4, 5, 6).unwrap()).unwrap();
/// assert_eq!(sum, TimeSpan::from_time(5, 7, 9).unwrap());
///
/// assert!(TimeSpan::max_value().add_to(TimeSpan::from_ticks(1)).is_err());
/// ```
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(C)]
pub struct TimeSpan {
    ticks: i64,
}

impl TimeSpan {
    pub const ZERO: TimeSpan = TimeSpan { ticks: 0 };

    /// The most negative `TimeSpan` (`i64::MIN` ticks).
    pub const MIN: TimeSpan = TimeSpan { ticks: MIN_TICKS };

    /// The most positive `TimeSpan` (`i64::MAX` ticks).
    pub const MAX: TimeSpan = TimeSpan { ticks: MAX_TICKS };
}

// Constructors
impl TimeSpan {
    /// Creates a new `TimeSpan` from a raw number of 100-nanosecond ticks.
    ///
    /// The tick is the internal representation of the span, not the
    /// machine's clock tick.
    ///
    /// # Examples
    ///
    /// ```
    /// # use amudai_timespan::TimeSpan;
    /// let one_second = TimeSpan::from_ticks(10_000_000);
    /// assert_eq!(one_second.seconds(), 1);
    ///
    /// let negative = TimeSpan::from_ticks(-5_000_000);
    /// assert_eq!(negative.milliseconds(), -500);
    /// ```
    pub const fn from_ticks(ticks: i64) -> TimeSpan {
        TimeSpan { ticks }
    }

    /// Same as [`TimeSpan::from_ticks`].
    pub const fn new(ticks: i64) -> TimeSpan {
        TimeSpan::from_ticks(ticks)
    }

    pub const fn zero() -> TimeSpan {
        TimeSpan::ZERO
    }

    pub const fn max_value() -> TimeSpan {
        TimeSpan::MAX
    }

    pub const fn min_value() -> TimeSpan {
        TimeSpan::MIN
    }

    /// Creates a `TimeSpan` from a (possibly fractional) number of microseconds.
    ///
    /// All unit-based constructors end up here. The value is range-checked
    /// against [`MIN_MICROSECONDS`]..=[`MAX_MICROSECONDS`], then multiplied by
    /// [`TICKS_PER_MICROSECOND`] and truncated toward zero exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`TimeSpanError::OutOfRange`] when `microseconds` lies outside
    /// the representable range, which includes both infinities and NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use amudai_timespan::{TimeSpan, TimeSpanError};
    /// assert_eq!(TimeSpan::from_microseconds(1.5).unwrap().ticks(), 15);
    /// assert_eq!(TimeSpan::from_microseconds(-0.19).unwrap().ticks(), -1);
    /// assert_eq!(
    ///     TimeSpan::from_microseconds(f64::INFINITY),
    ///     Err(TimeSpanError::OutOfRange)
    /// );
    /// ```
    pub fn from_microseconds(microseconds: f64) -> TimeSpanResult {
        if !(MIN_MICROSECONDS..=MAX_MICROSECONDS).contains(&microseconds) {
            log::debug!(
                "TimeSpan: {microseconds} microseconds is outside \
                 [{MIN_MICROSECONDS}, {MAX_MICROSECONDS}]"
            );
            return Err(TimeSpanError::OutOfRange);
        }

        // A product that rounds up to 2^63 saturates to MAX_TICKS.
        let ticks = microseconds * TICKS_PER_MICROSECOND as f64;
        Ok(TimeSpan::from_ticks(ticks as i64))
    }

    /// Creates a `TimeSpan` from a (possibly fractional) number of days.
    ///
    /// # Examples
    ///
    /// ```
    /// # use amudai_timespan::TimeSpan;
    /// let span = TimeSpan::from_days(1.5).unwrap();
    /// assert_eq!(span.days(), 1);
    /// assert_eq!(span.hours(), 12);
    /// assert!(TimeSpan::from_days(f64::NEG_INFINITY).is_err());
    /// ```
    pub fn from_days(days: f64) -> TimeSpanResult {
        TimeSpan::from_days_parts(days, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a `TimeSpan` from days plus every finer unit down to microseconds.
    ///
    /// Components are summed independently, so they may exceed their natural
    /// range or carry different signs.
    pub fn from_days_parts(
        days: f64,
        hours: f64,
        minutes: f64,
        seconds: f64,
        milliseconds: f64,
        microseconds: f64,
    ) -> TimeSpanResult {
        TimeSpan::from_microseconds(sum_microseconds(
            days,
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
        ))
    }

    pub fn from_hours(hours: f64) -> TimeSpanResult {
        TimeSpan::from_hours_parts(hours, 0.0, 0.0, 0.0, 0.0)
    }

    /// Creates a `TimeSpan` from hours plus every finer unit down to microseconds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use amudai_timespan::TimeSpan;
    /// let span = TimeSpan::from_hours_parts(2.0, 30.0, 0.0, 0.0, 0.0).unwrap();
    /// assert_eq!(span.total_hours(), 2.5);
    /// ```
    pub fn from_hours_parts(
        hours: f64,
        minutes: f64,
        seconds: f64,
        milliseconds: f64,
        microseconds: f64,
    ) -> TimeSpanResult {
        TimeSpan::from_microseconds(sum_microseconds(
            0.0,
            hours,
            minutes,
            seconds,
            milliseconds,
            microseconds,
        ))
    }

    pub fn from_minutes(minutes: f64) -> TimeSpanResult {
        TimeSpan::from_minutes_parts(minutes, 0.0, 0.0, 0.0)
    }

    pub fn from_minutes_parts(
        minutes: f64,
        seconds: f64,
        milliseconds: f64,
        microseconds: f64,
    ) -> TimeSpanResult {
        TimeSpan::from_microseconds(sum_microseconds(
            0.0,
            0.0,
            minutes,
            seconds,
            milliseconds,
            microseconds,
        ))
    }

    pub fn from_seconds(seconds: f64) -> TimeSpanResult {
        TimeSpan::from_seconds_parts(seconds, 0.0, 0.0)
    }

    /// Creates a `TimeSpan` from seconds, milliseconds and microseconds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use amudai_timespan::TimeSpan;
    /// let span = TimeSpan::from_seconds_parts(101.0, 832.0, 0.0).unwrap();
    /// assert_eq!(span.minutes(), 1);
    /// assert_eq!(span.seconds(), 41);
    /// assert_eq!(span.milliseconds(), 832);
    /// ```
    pub fn from_seconds_parts(seconds: f64, milliseconds: f64, microseconds: f64) -> TimeSpanResult {
        TimeSpan::from_microseconds(sum_microseconds(
            0.0,
            0.0,
            0.0,
            seconds,
            milliseconds,
            microseconds,
        ))
    }

    pub fn from_milliseconds(milliseconds: f64) -> TimeSpanResult {
        TimeSpan::from_milliseconds_parts(milliseconds, 0.0)
    }

    pub fn from_milliseconds_parts(milliseconds: f64, microseconds: f64) -> TimeSpanResult {
        TimeSpan::from_microseconds(sum_microseconds(
            0.0,
            0.0,
            0.0,
            0.0,
            milliseconds,
            microseconds,
        ))
    }

    /// Creates a `TimeSpan` from days, hours and minutes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use amudai_timespan::TimeSpan;
    /// let span = TimeSpan::from_time(10, 9, 8).unwrap();
    /// assert_eq!((span.days(), span.hours(), span.minutes()), (10, 9, 8));
    /// assert_eq!(span.seconds(), 0);
    /// ```
    pub fn from_time(days: i32, hours: i32, minutes: i32) -> TimeSpanResult {
        TimeSpan::from_time_parts(days as f64, hours as f64, minutes as f64, 0.0, 0.0, 0.0)
    }

    /// Creates a `TimeSpan` from days, hours, minutes, seconds, milliseconds
    /// and microseconds.
    ///
    /// This is the general multi-field constructor. Fractional components are
    /// accepted and carried down to tick precision.
    ///
    /// # Errors
    ///
    /// Returns [`TimeSpanError::OutOfRange`] when the combined duration does
    /// not fit into 64-bit ticks.
    pub fn from_time_parts(
        days: f64,
        hours: f64,
        minutes: f64,
        seconds: f64,
        milliseconds: f64,
        microseconds: f64,
    ) -> TimeSpanResult {
        TimeSpan::from_days_parts(days, hours, minutes, seconds, milliseconds, microseconds)
    }
}

/// Converts the individual components to microseconds and sums them from the
/// coarsest unit to the finest one.
fn sum_microseconds(
    days: f64,
    hours: f64,
    minutes: f64,
    seconds: f64,
    milliseconds: f64,
    microseconds: f64,
) -> f64 {
    days * MICROSECONDS_PER_DAY as f64
        + hours * MICROSECONDS_PER_HOUR as f64
        + minutes * MICROSECONDS_PER_MINUTE as f64
        + seconds * MICROSECONDS_PER_SECOND as f64
        + milliseconds * MICROSECONDS_PER_MILLISECOND as f64
        + microseconds
}

// Component accessors. Division and remainder truncate toward zero, so every
// component carries the sign of the whole span.
impl TimeSpan {
    pub const fn ticks(&self) -> i64 {
        self.ticks
    }

    pub const fn days(&self) -> i32 {
        (self.ticks / TICKS_PER_DAY) as i32
    }

    pub const fn hours(&self) -> i32 {
        (self.ticks / TICKS_PER_HOUR % HOURS_PER_DAY) as i32
    }

    pub const fn minutes(&self) -> i32 {
        (self.ticks / TICKS_PER_MINUTE % MINUTES_PER_HOUR) as i32
    }

    pub const fn seconds(&self) -> i32 {
        (self.ticks / TICKS_PER_SECOND % SECONDS_PER_MINUTE) as i32
    }

    pub const fn milliseconds(&self) -> i32 {
        (self.ticks / TICKS_PER_MILLISECOND % MILLISECONDS_PER_SECOND) as i32
    }

    pub const fn microseconds(&self) -> i32 {
        (self.ticks / TICKS_PER_MICROSECOND % MICROSECONDS_PER_MILLISECOND) as i32
    }

    /// Sub-microsecond remainder in nanoseconds, a multiple of 100.
    pub const fn nanoseconds(&self) -> i32 {
        (self.ticks % TICKS_PER_MICROSECOND * NANOSECONDS_PER_TICK) as i32
    }

    pub const fn is_negative(&self) -> bool {
        self.ticks < 0
    }
}

// Totals
impl TimeSpan {
    pub fn total_days(&self) -> f64 {
        self.ticks as f64 / TICKS_PER_DAY as f64
    }

    pub fn total_hours(&self) -> f64 {
        self.ticks as f64 / TICKS_PER_HOUR as f64
    }

    pub fn total_minutes(&self) -> f64 {
        self.ticks as f64 / TICKS_PER_MINUTE as f64
    }

    pub fn total_seconds(&self) -> f64 {
        self.ticks as f64 / TICKS_PER_SECOND as f64
    }

    pub fn total_milliseconds(&self) -> f64 {
        self.ticks as f64 / TICKS_PER_MILLISECOND as f64
    }

    pub fn total_microseconds(&self) -> f64 {
        self.ticks as f64 / TICKS_PER_MICROSECOND as f64
    }
}

// Arithmetic
impl TimeSpan {
    /// Adds two spans.
    ///
    /// # Errors
    ///
    /// Returns [`TimeSpanError::Overflow`] with [`OverflowKind::Addition`] when
    /// both operands have the same sign and the sum does not. Operands of
    /// opposite signs never overflow.
    pub fn add(t1: TimeSpan, t2: TimeSpan) -> TimeSpanResult {
        match t1.ticks.checked_add(t2.ticks) {
            Some(ticks) => Ok(TimeSpan::from_ticks(ticks)),
            None => {
                log::debug!(
                    "TimeSpan: {} + {} ticks overflows i64",
                    t1.ticks,
                    t2.ticks
                );
                Err(OverflowKind::Addition.into())
            }
        }
    }

    /// Method form of [`TimeSpan::add`].
    pub fn add_to(self, other: TimeSpan) -> TimeSpanResult {
        TimeSpan::add(self, other)
    }

    pub fn checked_add(self, other: TimeSpan) -> Option<TimeSpan> {
        TimeSpan::add(self, other).ok()
    }

    /// Returns the absolute value of this span.
    ///
    /// # Errors
    ///
    /// [`TimeSpan::MIN`] has no positive counterpart, so it yields
    /// [`TimeSpanError::Overflow`] with [`OverflowKind::Duration`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use amudai_timespan::TimeSpan;
    /// let span = TimeSpan::from_ticks(-12345);
    /// assert_eq!(span.duration().unwrap(), TimeSpan::from_ticks(12345));
    /// assert!(TimeSpan::min_value().duration().is_err());
    /// ```
    pub fn duration(&self) -> TimeSpanResult {
        match self.ticks.checked_abs() {
            Some(ticks) => Ok(TimeSpan::from_ticks(ticks)),
            None => {
                log::debug!("TimeSpan: absolute value of {} ticks overflows i64", self.ticks);
                Err(OverflowKind::Duration.into())
            }
        }
    }
}

// Comparison
impl TimeSpan {
    /// Three-way comparison where a missing right-hand side sorts below every
    /// span.
    ///
    /// # Examples
    ///
    /// ```
    /// # use amudai_timespan::TimeSpan;
    /// # use std::cmp::Ordering;
    /// let a = TimeSpan::from_ticks(20000);
    /// let b = TimeSpan::from_ticks(10000);
    /// assert_eq!(TimeSpan::compare(&a, Some(&b)), Ordering::Greater);
    /// assert_eq!(TimeSpan::compare(&b, Some(&a)) as i8, -1);
    /// assert_eq!(TimeSpan::compare(&a, None), Ordering::Greater);
    /// ```
    pub fn compare(t1: &TimeSpan, t2: Option<&TimeSpan>) -> Ordering {
        match t2 {
            Some(t2) => t1.cmp(t2),
            None => Ordering::Greater,
        }
    }

    pub fn compare_to(&self, other: Option<&TimeSpan>) -> Ordering {
        TimeSpan::compare(self, other)
    }

    /// Returns `false` when `other` is `None`.
    pub fn equals(&self, other: Option<&TimeSpan>) -> bool {
        other.is_some_and(|other| self == other)
    }

    pub fn equals_to(t1: &TimeSpan, t2: &TimeSpan) -> bool {
        t1 == t2
    }
}

// Operators
impl Ord for TimeSpan {
    fn cmp(&self, other: &TimeSpan) -> Ordering {
        self.ticks.cmp(&other.ticks)
    }
}

impl PartialOrd for TimeSpan {
    fn partial_cmp(&self, other: &TimeSpan) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// # Panics
///
/// Panics when the sum leaves the representable range. Use
/// [`TimeSpan::add_to`] or [`TimeSpan::checked_add`] to handle overflow.
impl Add for TimeSpan {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match TimeSpan::add(self, other) {
            Ok(sum) => sum,
            Err(e) => panic!("{e}"),
        }
    }
}

impl AddAssign for TimeSpan {
    fn add_assign(&mut self, other: TimeSpan) {
        *self = *self + other;
    }
}

impl CheckedAdd for TimeSpan {
    fn checked_add(&self, other: &TimeSpan) -> Option<TimeSpan> {
        TimeSpan::checked_add(*self, *other)
    }
}

impl Zero for TimeSpan {
    fn zero() -> Self {
        TimeSpan::ZERO
    }

    fn is_zero(&self) -> bool {
        self.ticks == 0
    }
}

impl Bounded for TimeSpan {
    fn min_value() -> Self {
        TimeSpan::MIN
    }

    fn max_value() -> Self {
        TimeSpan::MAX
    }
}
