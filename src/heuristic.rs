/// Bounded approximation of the exact threshold
///
/// Relaxes the exact DP's in-flight record down to the distance since the
/// most recent fault. The size of the destroyed-window union is bounded from
/// above by a chain sum over faults in position order: each fault contributes
/// its full reach minus its overlap with the previous fault only. Maximizing
/// that relaxed objective over all placements yields an upper bound on the
/// worst-case destruction, so the resulting threshold can understate but
/// never overstate the guaranteed sharing:
///
///   lemma <= apx <= exact
///
/// When the relaxed search cannot improve on the lemma bound, the lemma
/// bound is returned unchanged.
use log::debug;

use crate::engine::DistanceModel;
use crate::error::ThresholdError;
use crate::lemma::threshold_lemma;
use crate::shape::Shape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FaultKind {
    Sub,
    Del,
    Ins,
}

/// Window-start offsets a fault destroys, relative to its own position
fn damage_offsets(shape: &Shape, kind: FaultKind) -> Vec<usize> {
    match kind {
        FaultKind::Sub => shape.care_positions(),
        FaultKind::Del => (0..shape.span()).collect(),
        FaultKind::Ins => (1..shape.span()).collect(),
    }
}

/// Approximate threshold, never above the exact result and never below the
/// lemma bound
pub fn threshold_heuristic(
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

    let lemma = threshold_lemma(shape, length, errors, model)?;

    let kinds: &[FaultKind] = match model {
        DistanceModel::Hamming => &[FaultKind::Sub],
        DistanceModel::Edit => &[FaultKind::Sub, FaultKind::Del, FaultKind::Ins],
    };

    let span = shape.span();
    let n = length as usize;
    let budget = errors as usize;

    let sets: Vec<Vec<bool>> = kinds
        .iter()
        .map(|&kind| {
            let mut set = vec![false; span];
            for t in damage_offsets(shape, kind) {
                set[t] = true;
            }
            set
        })
        .collect();
    let reach: Vec<u32> = sets
        .iter()
        .map(|set| set.iter().filter(|&&hit| hit).count() as u32)
        .collect();

    // overlap[a][b][d]: windows destroyed both by a fault of kind a and by a
    // fault of kind b placed d positions later
    let overlap: Vec<Vec<Vec<u32>>> = sets
        .iter()
        .map(|first| {
            sets.iter()
                .map(|second| {
                    (0..span)
                        .map(|d| {
                            (0..span - d)
                                .filter(|&t| first[t] && second[t + d])
                                .count() as u32
                        })
                        .collect()
                })
                .collect()
        })
        .collect();

    // best[i][e][b]: largest chain value over placements of e faults whose
    // last fault has kind b and sits at position i; None when unreachable
    let mut best: Vec<Vec<Vec<Option<u32>>>> =
        vec![vec![vec![None; kinds.len()]; budget + 1]; n];
    let mut destroyed: u32 = 0;

    for i in 0..n {
        for b in 0..kinds.len() {
            for e in 1..=budget {
                let mut value = if e == 1 { Some(reach[b]) } else { None };
                for j in 0..i {
                    let gap = i - j;
                    for a in 0..kinds.len() {
                        if let Some(prev) = best[j][e - 1][a] {
                            let shared = if gap < span { overlap[a][b][gap] } else { 0 };
                            let chained = prev + reach[b] - shared;
                            value = Some(value.map_or(chained, |v| v.max(chained)));
                        }
                    }
                }
                best[i][e][b] = value;
                if let Some(v) = value {
                    destroyed = destroyed.max(v);
                }
            }
        }
    }

    let relaxed = windows.saturating_sub(destroyed);
    debug!(
        "heuristic chain bound destroys <= {destroyed} of {windows} windows (lemma {lemma})"
    );

    Ok(lemma.max(relaxed))
}
