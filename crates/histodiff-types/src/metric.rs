use crate::{Error, Result};
use std::fmt;
use std::ops::{Neg, Sub};

/// Number of metrics tracked per class in a histogram line
pub const METRIC_COUNT: usize = 2;

/// Selects which metric drives filtering and sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// Instance count (index 0)
    #[default]
    Instances,
    /// Byte size (index 1)
    Bytes,
}

impl Metric {
    pub const ALL: [Metric; METRIC_COUNT] = [Metric::Instances, Metric::Bytes];

    /// Resolve a positional selector into a metric.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| Error::SelectorOutOfRange {
                selector: index.to_string(),
                len: METRIC_COUNT,
            })
    }

    /// Parse a selector as typed on the command line.
    ///
    /// Non-integers are `InvalidArgument`; any integer outside `0..2`
    /// (negative, or too large for `usize`) is `SelectorOutOfRange`.
    pub fn parse_selector(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidArgument {
                name: "sort-by",
                value: raw.to_string(),
            });
        }

        match trimmed.parse::<usize>() {
            Ok(index) => Self::from_index(index),
            Err(_) => Err(Error::SelectorOutOfRange {
                selector: trimmed.to_string(),
                len: METRIC_COUNT,
            }),
        }
    }

    pub fn index(self) -> usize {
        match self {
            Metric::Instances => 0,
            Metric::Bytes => 1,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Instances => write!(f, "instances"),
            Metric::Bytes => write!(f, "bytes"),
        }
    }
}

/// Per-class metric values: `[instances, bytes]`.
///
/// Values are signed so the same type carries both raw snapshot values
/// and deltas between snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MetricVector([i64; METRIC_COUNT]);

impl MetricVector {
    pub fn new(instances: i64, bytes: i64) -> Self {
        Self([instances, bytes])
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn instances(&self) -> i64 {
        self.0[Metric::Instances.index()]
    }

    pub fn bytes(&self) -> i64 {
        self.0[Metric::Bytes.index()]
    }

    pub fn get(&self, metric: Metric) -> i64 {
        self.0[metric.index()]
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|v| *v == 0)
    }
}

impl Sub for MetricVector {
    type Output = MetricVector;

    fn sub(self, rhs: MetricVector) -> MetricVector {
        let mut out = [0; METRIC_COUNT];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.0[i].wrapping_sub(rhs.0[i]);
        }
        MetricVector(out)
    }
}

impl Neg for MetricVector {
    type Output = MetricVector;

    fn neg(self) -> MetricVector {
        MetricVector::zero() - self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_from_index() {
        assert_eq!(Metric::from_index(0).unwrap(), Metric::Instances);
        assert_eq!(Metric::from_index(1).unwrap(), Metric::Bytes);
    }

    #[test]
    fn test_metric_from_index_out_of_range() {
        let err = Metric::from_index(2).unwrap_err();
        assert!(matches!(
            &err,
            Error::SelectorOutOfRange { selector, len: 2 } if selector == "2"
        ));
        assert_eq!(
            err.to_string(),
            "Metric selector 2 out of range (expected 0..2)"
        );
    }

    #[test]
    fn test_index_roundtrips_through_all() {
        for (i, metric) in Metric::ALL.iter().enumerate() {
            assert_eq!(metric.index(), i);
        }
    }

    #[test]
    fn test_vector_subtraction_is_elementwise() {
        let before = MetricVector::new(10, 100);
        let after = MetricVector::new(15, 150);
        assert_eq!(after - before, MetricVector::new(5, 50));
        assert_eq!(before - after, MetricVector::new(-5, -50));
    }

    #[test]
    fn test_negation_matches_zero_minus() {
        let v = MetricVector::new(3, 30);
        assert_eq!(-v, MetricVector::new(-3, -30));
        assert_eq!(-v, MetricVector::zero() - v);
    }

    #[test]
    fn test_get_by_metric() {
        let v = MetricVector::new(7, 70);
        assert_eq!(v.get(Metric::Instances), 7);
        assert_eq!(v.get(Metric::Bytes), 70);
    }

    #[test]
    fn test_parse_selector_valid() {
        assert_eq!(Metric::parse_selector("0").unwrap(), Metric::Instances);
        assert_eq!(Metric::parse_selector(" 1 ").unwrap(), Metric::Bytes);
    }

    #[test]
    fn test_parse_selector_negative_is_out_of_range() {
        let err = Metric::parse_selector("-1").unwrap_err();
        assert!(matches!(
            &err,
            Error::SelectorOutOfRange { selector, len: 2 } if selector == "-1"
        ));
    }

    #[test]
    fn test_parse_selector_huge_is_out_of_range() {
        let err = Metric::parse_selector("99999999999999999999999").unwrap_err();
        assert!(matches!(err, Error::SelectorOutOfRange { .. }));
    }

    #[test]
    fn test_parse_selector_non_integer_is_invalid_argument() {
        for raw in ["bytes", "", "-", "1.5", "0x1"] {
            let err = Metric::parse_selector(raw).unwrap_err();
            assert!(
                matches!(err, Error::InvalidArgument { name: "sort-by", .. }),
                "{raw}"
            );
        }
    }
}
