// Derived-duration arithmetic for timers.
//
// Pure functions over a TimerRecord and a reference instant; callers inject
// the instant through the Clock port. All results are whole seconds,
// clamped to zero so clock skew or inconsistent data never reports a
// negative duration.

use crate::modules::timer::core::timer::{TimerRecord, TimerStatus};
use chrono::{DateTime, Utc};

/// Worked seconds of an active timer at `now`, excluding paused intervals.
///
/// While paused the value is frozen at the pause instant; the authoritative
/// pause accumulation happens once, at resume. A paused timer missing its
/// `paused_at` (inconsistent data) falls back to the raw wall-clock delta.
pub fn elapsed_seconds(timer: &TimerRecord, now: DateTime<Utc>) -> i64 {
    let elapsed = match (timer.status, timer.paused_at) {
        (TimerStatus::Running, _) => {
            (now - timer.start_time).num_seconds() - timer.total_paused_duration
        }
        (TimerStatus::Paused, Some(paused_at)) => {
            (paused_at - timer.start_time).num_seconds() - timer.total_paused_duration
        }
        (TimerStatus::Paused, None) => (now - timer.start_time).num_seconds(),
    };
    elapsed.max(0)
}

/// Final worked seconds recorded on the TimeLog at stop time.
///
/// Subtracts the accumulated pause total, and when the stop arrives while
/// the timer is still paused, also the open pause window, which has not yet
/// been folded into `total_paused_duration`.
pub fn final_duration(timer: &TimerRecord, end_time: DateTime<Utc>) -> i64 {
    let mut duration = (end_time - timer.start_time).num_seconds() - timer.total_paused_duration;

    if timer.status == TimerStatus::Paused {
        if let Some(paused_at) = timer.paused_at {
            duration -= (end_time - paused_at).num_seconds();
        }
    }

    duration.max(0)
}
