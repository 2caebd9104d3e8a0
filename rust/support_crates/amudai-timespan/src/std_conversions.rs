//! Conversions between [`TimeSpan`] and [`std::time::Duration`].

use crate::{NANOSECONDS_PER_TICK, TICKS_PER_SECOND, TimeSpan, TimeSpanError};
use std::time::Duration;

/// Converts a non-negative `Duration`, truncating sub-tick nanoseconds.
///
/// Fails with [`TimeSpanError::OutOfRange`] when the duration exceeds
/// `TimeSpan::MAX`.
impl TryFrom<Duration> for TimeSpan {
    type Error = TimeSpanError;

    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        let secs_ticks = duration.as_secs() as u128 * TICKS_PER_SECOND as u128;
        let nanos_ticks = duration.subsec_nanos() as u128 / NANOSECONDS_PER_TICK as u128;
        let ticks = i64::try_from(secs_ticks + nanos_ticks).map_err(|_| {
            log::debug!("TimeSpan: {duration:?} exceeds the representable range");
            TimeSpanError::OutOfRange
        })?;
        Ok(TimeSpan::from_ticks(ticks))
    }
}

/// `Duration` cannot be negative, so negative spans fail with
/// [`TimeSpanError::OutOfRange`].
impl TryFrom<TimeSpan> for Duration {
    type Error = TimeSpanError;

    fn try_from(span: TimeSpan) -> Result<Self, Self::Error> {
        if span.is_negative() {
            log::debug!("TimeSpan: {} ticks has no Duration equivalent", span.ticks());
            return Err(TimeSpanError::OutOfRange);
        }
        let secs = (span.ticks() / TICKS_PER_SECOND) as u64;
        let nanos = (span.ticks() % TICKS_PER_SECOND * NANOSECONDS_PER_TICK) as u32;
        Ok(Duration::new(secs, nanos))
    }
}
