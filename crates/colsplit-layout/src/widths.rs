// ABOUTME: Persisted ratio lifecycle and minimum-width floors.
// ABOUTME: Seeds, resyncs and merges ratio vectors, then clamps sizes for the layout primitive.

use colsplit_core::WidthStore;

/// Outcome of merging a reported ratio vector into persisted state
#[derive(Debug, Clone, PartialEq)]
pub enum Merge {
    /// Nothing reported, or the report matched current state
    Unchanged(Vec<f64>),
    /// State now holds the reported vector; the caller should render again
    Updated(Vec<f64>),
}

impl Merge {
    pub fn ratios(&self) -> &[f64] {
        match self {
            Merge::Unchanged(r) | Merge::Updated(r) => r,
        }
    }

    pub fn into_ratios(self) -> Vec<f64> {
        match self {
            Merge::Unchanged(r) | Merge::Updated(r) => r,
        }
    }

    pub fn needs_rerender(&self) -> bool {
        matches!(self, Merge::Updated(_))
    }
}

/// Return the persisted vector for `key`, seeding it from `initial` when
/// absent or when its column count no longer matches.
pub fn load_or_seed<S: WidthStore + ?Sized>(store: &mut S, key: &str, initial: &[f64]) -> Vec<f64> {
    match store.get(key) {
        Some(stored) if stored.len() == initial.len() => {
            tracing::debug!("Reusing persisted widths for {}: {:?}", key, stored);
            stored.to_vec()
        }
        Some(stored) => {
            tracing::info!(
                "Column count for {} changed from {} to {}, reseeding",
                key,
                stored.len(),
                initial.len()
            );
            store.set(key, initial.to_vec());
            initial.to_vec()
        }
        None => {
            tracing::debug!("Seeding widths for {}: {:?}", key, initial);
            store.set(key, initial.to_vec());
            initial.to_vec()
        }
    }
}

/// Persist `reported` for `key` if it differs from `current`
pub fn merge_resize<S: WidthStore + ?Sized>(
    store: &mut S,
    key: &str,
    current: &[f64],
    reported: Option<&[f64]>,
) -> Merge {
    match reported {
        Some(reported) if reported != current => {
            tracing::info!("Merged resize for {}: {:?} -> {:?}", key, current, reported);
            store.set(key, reported.to_vec());
            Merge::Updated(reported.to_vec())
        }
        _ => Merge::Unchanged(current.to_vec()),
    }
}

/// Clamp every column up to `min_fractions[i] * sum(ratios)`.
///
/// Each floor is enforced on its own: the vector is not renormalized and no
/// width is taken back from other columns. The layout primitive normalizes
/// whatever positive weights it receives.
pub fn apply_minimum_widths(ratios: &[f64], min_fractions: &[f64]) -> Vec<f64> {
    let total: f64 = ratios.iter().sum();
    ratios
        .iter()
        .zip(min_fractions)
        .map(|(ratio, fraction)| ratio.max(fraction * total))
        .collect()
}

/// Replace sizes the layout primitive would reject (<= 0) with `epsilon`.
/// Only applied to sizes handed to the primitive, never to reported ratios.
pub fn primitive_sizes(sizes: &[f64], epsilon: f64) -> Vec<f64> {
    sizes
        .iter()
        .map(|&size| if size > 0.0 { size } else { epsilon })
        .collect()
}

/// Accept a collaborator report only if it has `expected_len` finite, non-negative entries
pub fn validate_report(reported: Option<Vec<f64>>, expected_len: usize) -> Option<Vec<f64>> {
    let reported = reported?;
    if reported.len() != expected_len {
        tracing::warn!(
            "Ignoring resize report with {} columns, expected {}",
            reported.len(),
            expected_len
        );
        return None;
    }
    if reported.iter().any(|w| !w.is_finite() || *w < 0.0)
        || !reported.iter().sum::<f64>().is_finite()
    {
        tracing::warn!("Ignoring resize report with invalid widths: {:?}", reported);
        return None;
    }
    Some(reported)
}

#[cfg(test)]
mod tests {
    use super::*;
    use colsplit_core::SessionStore;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 0.001, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn seed_persists_initial() {
        let mut store = SessionStore::new();
        let ratios = load_or_seed(&mut store, "k", &[2.0, 1.0]);
        assert_eq!(ratios, vec![2.0, 1.0]);
        assert_eq!(store.get("k"), Some(&[2.0, 1.0][..]));
    }

    #[test]
    fn load_is_idempotent() {
        let mut store = SessionStore::new();
        let first = load_or_seed(&mut store, "k", &[1.0, 1.0, 1.0]);
        let second = load_or_seed(&mut store, "k", &[1.0, 1.0, 1.0]);
        assert_eq!(first, second);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn load_keeps_dragged_widths_over_initial() {
        let mut store = SessionStore::new();
        store.set("k", vec![1.5, 0.5]);
        assert_eq!(load_or_seed(&mut store, "k", &[1.0, 1.0]), vec![1.5, 0.5]);
    }

    #[test]
    fn shape_change_reseeds() {
        let mut store = SessionStore::new();
        store.set("k", vec![1.2, 0.9, 0.9]);

        let ratios = load_or_seed(&mut store, "k", &[3.0, 1.0]);
        assert_eq!(ratios, vec![3.0, 1.0]);
        assert_eq!(store.get("k"), Some(&[3.0, 1.0][..]));
    }

    #[test]
    fn merge_identical_is_noop() {
        let mut store = SessionStore::new();
        store.set("k", vec![1.0, 1.0]);

        let merge = merge_resize(&mut store, "k", &[1.0, 1.0], Some(&[1.0, 1.0][..]));
        assert_eq!(merge, Merge::Unchanged(vec![1.0, 1.0]));
        assert!(!merge.needs_rerender());

        let merge = merge_resize(&mut store, "k", &[1.0, 1.0], None);
        assert!(!merge.needs_rerender());
        assert_eq!(store.get("k"), Some(&[1.0, 1.0][..]));
    }

    #[test]
    fn merge_difference_updates_state() {
        let mut store = SessionStore::new();
        store.set("k", vec![1.0, 1.0]);

        let merge = merge_resize(&mut store, "k", &[1.0, 1.0], Some(&[1.4, 0.6][..]));
        assert!(merge.needs_rerender());
        assert_eq!(merge.ratios(), &[1.4, 0.6]);
        assert_eq!(store.get("k"), Some(&[1.4, 0.6][..]));
    }

    #[test]
    fn floors_below_ratio_leave_vector_alone() {
        assert_close(&apply_minimum_widths(&[1.0, 1.0], &[0.3, 0.3]), &[1.0, 1.0]);
    }

    #[test]
    fn floor_raises_narrow_column_without_renormalizing() {
        assert_close(
            &apply_minimum_widths(&[0.05, 1.95], &[0.2, 0.0]),
            &[0.4, 1.95],
        );
    }

    #[test]
    fn several_columns_below_floor_all_clamp() {
        // Sum grows past the original total; no redistribution happens.
        let sizes = apply_minimum_widths(&[0.1, 0.1, 2.8], &[0.1, 0.1, 0.1]);
        assert_close(&sizes, &[0.3, 0.3, 2.8]);
    }

    #[test]
    fn collapsed_sizes_get_epsilon() {
        let sizes = primitive_sizes(&[0.0, 2.0, -0.5], 0.001);
        assert_close(&sizes, &[0.001, 2.0, 0.001]);
    }

    #[test]
    fn report_validation() {
        assert_eq!(validate_report(None, 2), None);
        assert_eq!(validate_report(Some(vec![1.0]), 2), None);
        assert_eq!(validate_report(Some(vec![1.0, f64::NAN]), 2), None);
        assert_eq!(validate_report(Some(vec![1.0, -0.1]), 2), None);
        assert_eq!(validate_report(Some(vec![f64::MAX, f64::MAX]), 2), None);
        assert_eq!(
            validate_report(Some(vec![0.0, 2.0]), 2),
            Some(vec![0.0, 2.0])
        );
    }
}
