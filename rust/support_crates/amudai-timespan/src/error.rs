use thiserror::Error;

pub type TimeSpanResult<T = crate::TimeSpan> = std::result::Result<T, TimeSpanError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeSpanError {
    /// A unit-based quantity does not fit into 64-bit ticks.
    #[error("TimeSpan overflowed because the duration is too long.")]
    OutOfRange,

    /// An operation on two in-range values left the representable range.
    #[error("{0}")]
    Overflow(OverflowKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OverflowKind {
    #[error("TimeSpan addition resulted in an overflow.")]
    Addition,

    /// Absolute value of `TimeSpan::MIN`.
    #[error("TimeSpan overflowed because the duration is too long.")]
    Duration,
}

impl TimeSpanError {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, TimeSpanError::OutOfRange)
    }

    pub fn is_overflow(&self) -> bool {
        matches!(self, TimeSpanError::Overflow(_))
    }
}

impl From<OverflowKind> for TimeSpanError {
    fn from(kind: OverflowKind) -> Self {
        TimeSpanError::Overflow(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TimeSpanError::OutOfRange.to_string(),
            "TimeSpan overflowed because the duration is too long."
        );
        assert_eq!(
            TimeSpanError::Overflow(OverflowKind::Addition).to_string(),
            "TimeSpan addition resulted in an overflow."
        );
        assert_eq!(
            TimeSpanError::from(OverflowKind::Duration).to_string(),
            "TimeSpan overflowed because the duration is too long."
        );
    }

    #[test]
    fn test_error_kinds() {
        assert!(TimeSpanError::OutOfRange.is_out_of_range());
        assert!(!TimeSpanError::OutOfRange.is_overflow());
        assert!(TimeSpanError::Overflow(OverflowKind::Addition).is_overflow());
        assert!(!TimeSpanError::Overflow(OverflowKind::Duration).is_out_of_range());
    }
}
