use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RirtError {
    #[error("inputs cannot be broadcast together: shapes {}", format_shapes(.shapes))]
    ShapeMismatch { shapes: Vec<Vec<usize>> },

    #[error("metallicity {value} out of interpolation range [{min}, {max}]")]
    MetallicityOutOfRange { value: f64, min: f64, max: f64 },

    #[error("invalid calibration table: {0}")]
    InvalidCalibration(String),
}

pub type Result<T> = std::result::Result<T, RirtError>;

fn format_shapes(shapes: &[Vec<usize>]) -> String {
    shapes
        .iter()
        .map(|s| format!("{s:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_message_lists_shapes() {
        let err = RirtError::ShapeMismatch {
            shapes: vec![vec![2], vec![3], vec![]],
        };
        assert_eq!(
            err.to_string(),
            "inputs cannot be broadcast together: shapes [2], [3], []"
        );
    }
}
