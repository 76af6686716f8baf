/// Algorithm selection and dispatch
///
/// Single entry point over the three threshold algorithms crossed with the
/// two distance models. The variant pair is resolved once per call; the
/// computation itself is deterministic and pure, so there is no caching and
/// no retry.
use std::str::FromStr;

use crate::error::ThresholdError;
use crate::exact::threshold_exact;
use crate::heuristic::threshold_heuristic;
use crate::lemma::threshold_lemma;
use crate::shape::Shape;

/// Distance model for the error budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceModel {
    Hamming, // substitutions only, length preserved
    Edit,    // substitutions, insertions, deletions
}

/// Threshold algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Lemma,     // closed-form lower bound, O(1)
    Exact,     // adversarial-placement DP, tight
    Heuristic, // bounded approximation, "apx" on the command line
}

impl FromStr for Algorithm {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lemma" => Ok(Algorithm::Lemma),
            "exact" => Ok(Algorithm::Exact),
            "apx" => Ok(Algorithm::Heuristic),
            _ => Err(ThresholdError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl FromStr for DistanceModel {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hamming" => Ok(DistanceModel::Hamming),
            "edit" => Ok(DistanceModel::Edit),
            _ => Err(ThresholdError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Compute the filtration threshold: the minimum number of shape occurrences
/// any two strings within the error budget are guaranteed to share.
///
/// Fails with `InfeasibleInstance` when no window fits (`span > length`);
/// that condition is never reported as a 0 threshold.
pub fn compute_threshold(
    shape: &Shape,
    length: u32,
    errors: u32,
    model: DistanceModel,
    algorithm: Algorithm,
) -> Result<u32, ThresholdError> {
    if shape.span() as u32 > length {
        return Err(ThresholdError::InfeasibleInstance {
            span: shape.span(),
            length: length as usize,
        });
    }

    match algorithm {
        Algorithm::Lemma => threshold_lemma(shape, length, errors, model),
        Algorithm::Exact => threshold_exact(shape, length, errors, model),
        Algorithm::Heuristic => threshold_heuristic(shape, length, errors, model),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!("lemma".parse::<Algorithm>().unwrap(), Algorithm::Lemma);
        assert_eq!("exact".parse::<Algorithm>().unwrap(), Algorithm::Exact);
        assert_eq!("apx".parse::<Algorithm>().unwrap(), Algorithm::Heuristic);
        assert!(matches!(
            "banana".parse::<Algorithm>(),
            Err(ThresholdError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_distance_model_from_str() {
        assert_eq!(
            "hamming".parse::<DistanceModel>().unwrap(),
            DistanceModel::Hamming
        );
        assert_eq!("edit".parse::<DistanceModel>().unwrap(), DistanceModel::Edit);
        assert!("levenshtein".parse::<DistanceModel>().is_err());
    }

    #[test]
    fn test_infeasible_span_exceeds_length() {
        let shape = Shape::contiguous(12).unwrap();
        for algorithm in [Algorithm::Lemma, Algorithm::Exact, Algorithm::Heuristic] {
            let result = compute_threshold(&shape, 11, 1, DistanceModel::Hamming, algorithm);
            assert!(matches!(
                result,
                Err(ThresholdError::InfeasibleInstance {
                    span: 12,
                    length: 11
                })
            ));
        }
    }
}
