/// Set equality of two slices. Both slices are expected to be free of duplicates (model types
/// dedup on construction), so equal length plus containment in both directions is exact.
pub fn vecs_eq_without_order<T: PartialEq>(first: &[T], second: &[T]) -> bool {
    if first.len() != second.len() {
        return false;
    }

    for element in first {
        if !second.contains(element) {
            return false;
        }
    }

    for element in second {
        if !first.contains(element) {
            return false;
        }
    }

    true
}

/// Removes later occurrences of repeated elements and keeps the first one of each.
pub fn dedup_preserving_order<T: PartialEq>(elements: Vec<T>) -> Vec<T> {
    let mut result: Vec<T> = Vec::with_capacity(elements.len());
    for element in elements {
        if !result.contains(&element) {
            result.push(element);
        }
    }
    result
}

/// Arithmetic mean rounded half up (`2.5` becomes `3`, `-2.5` becomes `-2`). Returns `0` for an
/// empty slice.
pub fn avg_rounded(numbers: &[f64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    let avg = numbers.iter().sum::<f64>() / numbers.len() as f64;
    (avg + 0.5).floor()
}
