/// Closed-form q-gram lemma bound
///
/// Coverage counting argument: a text has `length - span + 1` windows, and a
/// single error can invalidate at most `reach` of them, so at least
/// `windows - errors * reach` windows survive any placement of the error
/// budget. The bound is admissible (never above the exact optimum) but loose:
/// it ignores boundary clipping and overlap between the errors' reaches, and
/// may clamp to 0 while the true threshold is positive.
use crate::engine::DistanceModel;
use crate::error::ThresholdError;
use crate::shape::Shape;

/// Windows a single error can destroy, by distance model.
///
/// Hamming: a substitution lands on a care offset of at most `weight`
/// distinct window placements. Edit: an operation may additionally shift the
/// alignment of every window it precedes, so its destructive reach widens by
/// the `span - 1` placements straddling it.
fn reach(shape: &Shape, model: DistanceModel) -> u32 {
    match model {
        DistanceModel::Hamming => shape.weight() as u32,
        DistanceModel::Edit => (shape.weight() + shape.span() - 1) as u32,
    }
}

/// Fast lower bound on the filtration threshold, O(1) in the problem size
pub fn threshold_lemma(
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

    Ok(windows.saturating_sub(errors.saturating_mul(reach(shape, model))))
}
