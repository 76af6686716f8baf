/// Q-gram shape: an ordered mask of care/don't-care positions
///
/// A shape is overlaid on a text window of `span` positions; only the `weight`
/// care positions take part in the match. Shapes always anchor on both ends
/// (first and last positions are care positions), which the coverage argument
/// behind the filtration threshold requires.
use std::fmt;
use std::str::FromStr;

use crate::error::ThresholdError;

/// Immutable shape, fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    mask: Vec<bool>, // true = care position, length = span
}

impl Shape {
    /// Contiguous shape of the given span (mask all true)
    pub fn contiguous(span: usize) -> Result<Shape, ThresholdError> {
        if span == 0 {
            return Err(ThresholdError::InvalidShape(
                span.to_string(),
                "span must be positive".to_string(),
            ));
        }
        Ok(Shape {
            mask: vec![true; span],
        })
    }

    /// Parse a shape specification.
    ///
    /// Three forms are accepted:
    /// - a string of only '1's, e.g. "1111": contiguous shape, span = length;
    /// - a binary mask over '1'/'0' containing at least one '0', e.g.
    ///   "1100101": '1' marks a care position, '0' a don't-care position;
    /// - a positive integer with a digit outside '0'/'1', e.g. "12":
    ///   contiguous shape of that span.
    ///
    /// Masks must start and end with '1'; gapped shapes with non-anchoring
    /// ends are rejected.
    pub fn parse(spec: &str) -> Result<Shape, ThresholdError> {
        if spec.is_empty() {
            return Err(ThresholdError::InvalidShape(
                spec.to_string(),
                "empty shape string".to_string(),
            ));
        }

        if spec.chars().all(|c| c == '1') {
            return Shape::contiguous(spec.len());
        }

        if spec.chars().all(|c| c == '0' || c == '1') {
            return Self::parse_mask(spec);
        }

        match spec.parse::<usize>() {
            Ok(span) if span > 0 => Shape::contiguous(span),
            Ok(_) => Err(ThresholdError::InvalidShape(
                spec.to_string(),
                "span must be positive".to_string(),
            )),
            Err(_) => Err(ThresholdError::InvalidShape(
                spec.to_string(),
                "expected a positive integer or a '1'/'0' mask".to_string(),
            )),
        }
    }

    fn parse_mask(spec: &str) -> Result<Shape, ThresholdError> {
        let mask: Vec<bool> = spec.chars().map(|c| c == '1').collect();

        if !mask[0] || !mask[mask.len() - 1] {
            return Err(ThresholdError::InvalidShape(
                spec.to_string(),
                "mask must start and end with a care position".to_string(),
            ));
        }

        Ok(Shape { mask })
    }

    /// Total length of the shape's window
    pub fn span(&self) -> usize {
        self.mask.len()
    }

    /// Number of care positions
    pub fn weight(&self) -> usize {
        self.mask.iter().filter(|&&c| c).count()
    }

    pub fn mask(&self) -> &[bool] {
        &self.mask
    }

    /// Ordered offsets of the care positions within the window
    pub fn care_positions(&self) -> Vec<usize> {
        self.mask
            .iter()
            .enumerate()
            .filter(|(_, &c)| c)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of windows the shape fits into a text of the given length,
    /// or None when the span exceeds the length (no window fits)
    pub fn windows(&self, length: u32) -> Option<u32> {
        let span = self.span() as u32;
        if span > length {
            None
        } else {
            Some(length - span + 1)
        }
    }
}

impl FromStr for Shape {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Shape::parse(s)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &care in &self.mask {
            write!(f, "{}", if care { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_numeric() {
        let shape = Shape::parse("12").unwrap();
        assert_eq!(shape.span(), 12);
        assert_eq!(shape.weight(), 12);
        assert!(shape.mask().iter().all(|&c| c));
    }

    #[test]
    fn test_parse_gapped_mask() {
        let shape = Shape::parse("1100101").unwrap();
        assert_eq!(shape.span(), 7);
        assert_eq!(shape.weight(), 4);
        assert_eq!(shape.care_positions(), vec![0, 1, 4, 6]);
        assert_eq!(shape.to_string(), "1100101");
    }

    #[test]
    fn test_parse_all_ones() {
        // A run of '1's is the contiguous shape of that length
        let shape = Shape::parse("1111111111").unwrap();
        assert_eq!(shape.span(), 10);
        assert_eq!(shape.weight(), 10);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            Shape::parse(""),
            Err(ThresholdError::InvalidShape(..))
        ));
    }

    #[test]
    fn test_rejects_zero_span() {
        assert!(matches!(
            Shape::parse("0"),
            Err(ThresholdError::InvalidShape(..))
        ));
    }

    #[test]
    fn test_rejects_unanchored_mask() {
        // Ends with a don't-care position
        assert!(matches!(
            Shape::parse("110"),
            Err(ThresholdError::InvalidShape(..))
        ));
        // Starts with a don't-care position
        assert!(matches!(
            Shape::parse("011"),
            Err(ThresholdError::InvalidShape(..))
        ));
    }

    #[test]
    fn test_rejects_mixed_symbols() {
        assert!(matches!(
            Shape::parse("1x01"),
            Err(ThresholdError::InvalidShape(..))
        ));
        assert!(matches!(
            Shape::parse("-5"),
            Err(ThresholdError::InvalidShape(..))
        ));
    }

    #[test]
    fn test_window_count() {
        let shape = Shape::contiguous(10).unwrap();
        assert_eq!(shape.windows(20), Some(11));
        assert_eq!(shape.windows(10), Some(1));
        assert_eq!(shape.windows(9), None);
    }

    #[test]
    fn test_numeric_with_binary_digits_is_a_mask() {
        // "10" only has '1'/'0' digits, so it is read as a (malformed) mask,
        // not as the number ten; spell contiguous shapes as "1111..." runs
        assert!(matches!(
            Shape::parse("10"),
            Err(ThresholdError::InvalidShape(..))
        ));
    }
}
