//! Signed, fixed-resolution time spans measured in 100-nanosecond ticks.
//!
//! [`TimeSpan`] follows the semantics of .NET's `TimeSpan`: a single `i64`
//! tick count covering roughly ±29,227 years, overflow-checked construction
//! from fractional units, truncating component accessors, checked addition,
//! absolute value and a total order.
//!
//! ```
//! # use amudai_timespan::TimeSpan;
//! let span = TimeSpan::from_hours_parts(2.0, 30.0, 0.0, 0.0, 0.0).unwrap();
//! assert_eq!(span.hours(), 2);
//! assert_eq!(span.minutes(), 30);
//! assert_eq!(span.total_minutes(), 150.0);
//! ```

pub mod error;
pub mod std_conversions;
pub mod timespan;


pub use error::{OverflowKind, TimeSpanError, TimeSpanResult};
pub use timespan::TimeSpan;

pub const NANOSECONDS_PER_TICK: i64 = 100;

pub const TICKS_PER_MICROSECOND: i64 = 10;
pub const TICKS_PER_MILLISECOND: i64 = TICKS_PER_MICROSECOND * 1000;
pub const TICKS_PER_SECOND: i64 = TICKS_PER_MILLISECOND * 1000;
pub const TICKS_PER_MINUTE: i64 = TICKS_PER_SECOND * 60;
pub const TICKS_PER_HOUR: i64 = TICKS_PER_MINUTE * 60;
pub const TICKS_PER_DAY: i64 = TICKS_PER_HOUR * 24;

pub const MICROSECONDS_PER_MILLISECOND: i64 = TICKS_PER_MILLISECOND / TICKS_PER_MICROSECOND;
pub const MICROSECONDS_PER_SECOND: i64 = TICKS_PER_SECOND / TICKS_PER_MICROSECOND;
pub const MICROSECONDS_PER_MINUTE: i64 = TICKS_PER_MINUTE / TICKS_PER_MICROSECOND;
pub const MICROSECONDS_PER_HOUR: i64 = TICKS_PER_HOUR / TICKS_PER_MICROSECOND;
pub const MICROSECONDS_PER_DAY: i64 = TICKS_PER_DAY / TICKS_PER_MICROSECOND;

pub const MILLISECONDS_PER_SECOND: i64 = TICKS_PER_SECOND / TICKS_PER_MILLISECOND;
pub const SECONDS_PER_MINUTE: i64 = TICKS_PER_MINUTE / TICKS_PER_SECOND;
pub const MINUTES_PER_HOUR: i64 = TICKS_PER_HOUR / TICKS_PER_MINUTE;
pub const HOURS_PER_DAY: i64 = TICKS_PER_DAY / TICKS_PER_HOUR;

pub const MIN_TICKS: i64 = i64::MIN;
pub const MAX_TICKS: i64 = i64::MAX;

/// Lower bound of the microsecond domain accepted by the unit-based constructors.
pub const MIN_MICROSECONDS: f64 = MIN_TICKS as f64 / TICKS_PER_MICROSECOND as f64;
/// Upper bound of the microsecond domain accepted by the unit-based constructors.
pub const MAX_MICROSECONDS: f64 = MAX_TICKS as f64 / TICKS_PER_MICROSECOND as f64;
