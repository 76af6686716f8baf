/// Exact threshold via dynamic programming over adversarial fault placements
///
/// The problem is a maximum-coverage optimization: the adversary places at
/// most `errors` faults to destroy as many windows as possible, and the
/// threshold is the window count minus that maximum. The DP sweeps text
/// positions left to right and carries, per state, the faults spent so far
/// and an in-flight record of which of the at-most-`span` windows overlapping
/// the current position are already destroyed, so windows hit by two faults
/// are never double-counted. The record is a fixed-size bitmask shifted once
/// per position; the window scrolling out of range finalizes and, if still
/// clean, counts as a survivor. The answer is the minimum survivor count over
/// all terminal states.
///
/// Under edit distance a fault is an edit operation. A substitution destroys
/// the windows whose care offsets cover it (a mismatch under a don't-care
/// offset is ignored); a deletion destroys every window whose span contains
/// it; an insertion destroys every window straddling the gap it lands in.
/// The DP is anchored on positions of the original string, so window
/// placements stay fixed while edited-string coordinates drift.
use std::collections::HashMap;

use log::debug;

use crate::engine::DistanceModel;
use crate::error::ThresholdError;
use crate::shape::Shape;

/// The in-flight record is a u128 bitmask, one bit per window in range
const MAX_SPAN: usize = 128;

fn low_bits(n: usize) -> u128 {
    if n >= 128 {
        u128::MAX
    } else {
        (1u128 << n) - 1
    }
}

/// Adversary choices at one text position: (destroyed-window bits, fault
/// cost). Bit t marks the window starting t positions back from the current
/// one. Edit distance allows pairing a gap insertion with a substitution or
/// deletion at the same position.
fn fault_choices(shape: &Shape, model: DistanceModel) -> Vec<(u128, u32)> {
    let sub: u128 = shape
        .care_positions()
        .iter()
        .fold(0, |mask, &q| mask | (1u128 << q));

    let mut choices = match model {
        DistanceModel::Hamming => vec![(0, 0), (sub, 1)],
        DistanceModel::Edit => {
            let del = low_bits(shape.span()); // every window containing the position
            let ins = del & !1; // every window straddling the gap before it
            vec![
                (0, 0),
                (sub, 1),
                (del, 1),
                (ins, 1),
                (ins | sub, 2),
                (ins | del, 2),
            ]
        }
    };

    choices.retain(|&(damage, cost)| cost == 0 || damage != 0);
    choices.sort_unstable();
    choices.dedup();
    choices
}

/// Exact, tight threshold: total windows minus the worst-case number of
/// windows destroyed by an adversarial placement of the error budget
pub fn threshold_exact(
    shape: &Shape,
    length: u32,
    errors: u32,
    model: DistanceModel,
) -> Result<u32, ThresholdError> {
    let windows = shape
        .windows(length)
        .ok_or(ThresholdError::InfeasibleInstance {
            span: shape.span(),
            length: length as usize,
        })?;

    let span = shape.span();
    assert!(
        span <= MAX_SPAN,
        "shape span {span} exceeds the {MAX_SPAN}-bit in-flight record"
    );

    let choices = fault_choices(shape, model);
    let record_mask = low_bits(span);
    let out_bit = 1u128 << (span - 1);
    let last_window = windows - 1;

    // (in-flight record, faults used) -> minimum survivors finalized so far
    let mut states: HashMap<(u128, u32), u32> = HashMap::new();
    states.insert((0, 0), 0);

    for i in 0..length {
        // Bits for window starts outside [0, last_window] never finalize;
        // keep them clear so states do not split on them.
        let junk = if i > last_window {
            low_bits((i - last_window) as usize)
        } else {
            0
        };
        let real = low_bits(i as usize + 1) & !junk;
        let finalizes = i + 1 >= span as u32;

        let mut next: HashMap<(u128, u32), u32> = HashMap::with_capacity(states.len() * 2);
        for (&(record, used), &survivors) in &states {
            for &(damage, cost) in &choices {
                let used = used + cost;
                if used > errors {
                    continue;
                }
                let record = (record | damage) & real;
                let survivors = survivors + (finalizes && record & out_bit == 0) as u32;
                let key = ((record << 1) & record_mask, used);
                next.entry(key)
                    .and_modify(|v| *v = (*v).min(survivors))
                    .or_insert(survivors);
            }
        }
        states = next;
    }

    debug!(
        "exact DP over {} positions ended with {} states",
        length,
        states.len()
    );

    Ok(states.values().copied().min().unwrap_or(windows))
}
