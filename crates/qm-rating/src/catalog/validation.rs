//! Load-time validation of measure definitions.

use qm_core::errors::CatalogError;

use super::types::MeasureSpec;

/// Reject a measure whose id, weight, or threshold ladder is unusable.
pub fn validate_spec(spec: &MeasureSpec) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::Invalid {
        measure_id: spec.id.clone(),
        reason,
    };

    if spec.id.trim().is_empty() {
        return Err(invalid("measure id must not be empty".to_string()));
    }
    if !spec.weight.is_finite() || spec.weight <= 0.0 {
        return Err(invalid(format!(
            "weight must be a positive number, got {}",
            spec.weight
        )));
    }

    let ladder = spec.thresholds.ladder();
    if ladder.iter().any(|t| !t.is_finite()) {
        return Err(invalid("thresholds must be finite".to_string()));
    }

    let monotonic = ladder.windows(2).all(|w| {
        if spec.lower_is_better {
            w[0] < w[1]
        } else {
            w[0] > w[1]
        }
    });
    if !monotonic {
        let direction = if spec.lower_is_better {
            "strictly increasing (lower is better)"
        } else {
            "strictly decreasing (higher is better)"
        };
        return Err(invalid(format!(
            "thresholds {:?} must be {}",
            ladder, direction
        )));
    }

    Ok(())
}
