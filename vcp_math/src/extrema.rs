//! Rolling-window local extremum checks
//!
//! Swing highs and lows are defined relative to a symmetric window: a bar
//! is a swing high if its value equals the maximum over `[i-window, i+window]`
//! inclusive. These helpers evaluate that predicate for a single index;
//! callers scan the valid index range themselves.

/// Returns `true` if `values[i]` equals the maximum of `values[i-window ..= i+window]`.
///
/// Panics if `i` is outside `[window, values.len() - window - 1]`; callers
/// are expected to only scan that range, since the window would otherwise
/// run off either end of the slice.
pub fn is_window_maximum(values: &[f64], i: usize, window: usize) -> bool {
    let (lo, hi) = window_bounds(values, i, window);
    let target = values[i];
    values[lo..=hi].iter().all(|&v| v <= target)
}

/// Returns `true` if `values[i]` equals the minimum of `values[i-window ..= i+window]`.
pub fn is_window_minimum(values: &[f64], i: usize, window: usize) -> bool {
    let (lo, hi) = window_bounds(values, i, window);
    let target = values[i];
    values[lo..=hi].iter().all(|&v| v >= target)
}

fn window_bounds(values: &[f64], i: usize, window: usize) -> (usize, usize) {
    assert!(i >= window && i + window < values.len(), "index out of window range");
    (i - window, i + window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_interior_peak() {
        let values = [1.0, 2.0, 5.0, 2.0, 1.0, 1.0, 1.0];
        assert!(is_window_maximum(&values, 2, 2));
        assert!(!is_window_maximum(&values, 1, 1));
    }

    #[test]
    fn detects_interior_trough() {
        let values = [5.0, 4.0, 1.0, 4.0, 5.0, 5.0, 5.0];
        assert!(is_window_minimum(&values, 2, 2));
        assert!(!is_window_minimum(&values, 1, 1));
    }

    #[test]
    fn plateau_values_all_qualify() {
        // A flat-topped plateau satisfies the equality test at every index
        // within it; callers are responsible for any tie-breaking.
        let values = [1.0, 3.0, 3.0, 3.0, 1.0];
        assert!(is_window_maximum(&values, 1, 1));
        assert!(is_window_maximum(&values, 2, 1));
        assert!(is_window_maximum(&values, 3, 1));
    }
}
