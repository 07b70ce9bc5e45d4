/// Share of tracked time spent working, as a percentage in `[0, 100]`.
///
/// Clamped since work and break may be sampled at slightly different instants.
pub fn productivity_ratio(work_seconds: i64, break_seconds: i64) -> f64 {
    if work_seconds == 0 {
        return 0.0;
    }

    let work = work_seconds as f64;
    let total = (work_seconds + break_seconds) as f64;

    (100.0 * work / total).clamp(0.0, 100.0)
}
