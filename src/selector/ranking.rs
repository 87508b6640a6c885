//! Latency ranking.

use std::cmp::Ordering;

use crate::feed::Endpoint;

/// Sort key: measured latency, or +inf when it is missing.
pub fn latency_key(endpoint: &Endpoint) -> f64 {
    endpoint.latency_ms.unwrap_or(f64::INFINITY)
}

/// Ascending by latency; endpoints without a measurement compare last.
///
/// Numerically equal keys (including `-0.0` and `0.0`) compare equal.
pub fn by_latency(a: &Endpoint, b: &Endpoint) -> Ordering {
    latency_key(a)
        .partial_cmp(&latency_key(b))
        .unwrap_or(Ordering::Equal)
}

/// Lowest-latency endpoint. On a tie the earliest one wins.
pub fn fastest<'a, I>(candidates: I) -> Option<&'a Endpoint>
where
    I: IntoIterator<Item = &'a Endpoint>,
{
    // `min_by` keeps the first of several equal minimums.
    candidates.into_iter().min_by(|a, b| by_latency(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_latency_sorts_last() {
        let slow = Endpoint::new(Some(1), "slow", Some(9_000.0), true);
        let unknown = Endpoint::new(Some(2), "unknown", None, true);

        assert_eq!(by_latency(&slow, &unknown), Ordering::Less);
        assert_eq!(fastest([&unknown, &slow]).unwrap().name, "slow");
    }

    #[test]
    fn test_tie_keeps_input_order() {
        let a = Endpoint::new(Some(1), "a", Some(20.0), true);
        let b = Endpoint::new(Some(2), "b", Some(20.0), true);
        let c = Endpoint::new(Some(3), "c", None, true);
        let d = Endpoint::new(Some(4), "d", None, true);

        assert_eq!(fastest([&a, &b]).unwrap().name, "a");
        assert_eq!(fastest([&b, &a]).unwrap().name, "b");
        assert_eq!(fastest([&d, &c]).unwrap().name, "d");

        let zero = Endpoint::new(Some(5), "zero", Some(0.0), true);
        let neg_zero = Endpoint::new(Some(6), "neg_zero", Some(-0.0), true);
        assert_eq!(fastest([&zero, &neg_zero]).unwrap().name, "zero");
        assert_eq!(fastest([&neg_zero, &zero]).unwrap().name, "neg_zero");
    }

    #[test]
    fn test_empty() {
        assert!(fastest(Vec::<&Endpoint>::new()).is_none());
    }
}
