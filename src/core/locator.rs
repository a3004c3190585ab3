use crate::core::TimeScale;

/// Index of the sample whose timestamp is closest to the time under `pointer_x`.
///
/// `datetimes` must be sorted ascending. The pointer is inverted through the
/// time scale, the insertion point is found by binary search and the closer of
/// the two neighbours wins; an exact tie goes to the earlier sample. The result
/// is clamped to the valid index range. Returns `None` for empty input or a
/// non-finite pointer.
#[must_use]
pub fn locate_nearest_sample(
    pointer_x: f64,
    datetimes: &[f64],
    time_scale: TimeScale,
) -> Option<usize> {
    if datetimes.is_empty() {
        return None;
    }
    let time = time_scale.pixel_to_time(pointer_x);
    if !time.is_finite() {
        return None;
    }
    Some(nearest_index(time, datetimes))
}

/// Nearest-timestamp search on already-projected time values.
#[must_use]
pub fn nearest_index(time: f64, datetimes: &[f64]) -> usize {
    let last = datetimes.len().saturating_sub(1);
    let insertion = datetimes.partition_point(|t| *t < time);
    if insertion == 0 {
        return 0;
    }
    if insertion > last {
        return last;
    }
    let before = time - datetimes[insertion - 1];
    let after = datetimes[insertion] - time;
    if before <= after {
        insertion - 1
    } else {
        insertion
    }
}
