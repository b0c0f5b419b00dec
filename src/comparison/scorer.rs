use crate::models::ScoreBreakdown;
use crate::utils::similarity::similarity_ratio;

const ACCURACY_WEIGHT: f64 = 50.0;
const EXPLANATION_PRESENT: f64 = 30.0;
const EXPLANATION_ABSENT: f64 = 20.0;
const THOROUGHNESS_PRESENT: f64 = 20.0;
const THOROUGHNESS_ABSENT: f64 = 10.0;

/// Composite quality score in `[30, 100]`, rounded to two decimals.
pub fn score(extracted: &str, validated: &str) -> f64 {
    score_breakdown(extracted, validated).total
}

/// Composite score with its three parts.
///
/// Accuracy rewards overlap between the extraction and the reviewer text,
/// not correctness of the review. The keyword checks are case-insensitive
/// and look only at the validated text.
pub fn score_breakdown(extracted: &str, validated: &str) -> ScoreBreakdown {
    let accuracy = round2(similarity_ratio(extracted, validated) * ACCURACY_WEIGHT);

    let validated_lower = validated.to_lowercase();
    let explanation = if validated_lower.contains("explanation") {
        EXPLANATION_PRESENT
    } else {
        EXPLANATION_ABSENT
    };
    let thoroughness = if validated_lower.contains("formula") || validated_lower.contains("concept") {
        THOROUGHNESS_PRESENT
    } else {
        THOROUGHNESS_ABSENT
    };

    ScoreBreakdown {
        accuracy,
        explanation,
        thoroughness,
        total: round2(accuracy + explanation + thoroughness),
    }
}

/// Above this magnitude every f64 is a multiple of 0.25 and already has at
/// most two decimals.
const ROUND2_EXACT_ABOVE: f64 = 1_125_899_906_842_624.0; // 2^50

/// Enough fractional digits to print any finite f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Round to two decimals the way Python's `round(x, 2)` does: the exact
/// binary value is rounded to the nearest hundredth and only exact ties go
/// to even. `0.025` is stored slightly above the tie and rounds up; `2.675`
/// is stored below it and rounds down.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= ROUND2_EXACT_ABOVE {
        return value;
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((int_part, frac)) = exact.split_once('.') else {
        return value;
    };
    let (kept, rest) = frac.split_at(2);
    let Ok(mut hundredths) = format!("{}{}", int_part, kept).parse::<u64>() else {
        return value;
    };

    let mut rest = rest.bytes();
    let round_up = match rest.next() {
        Some(b'5') => {
            let above_tie = rest.any(|d| d != b'0');
            above_tie || hundredths % 2 == 1
        }
        Some(d) => d > b'5',
        None => false,
    };
    if round_up {
        hundredths += 1;
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100)
        .parse()
        .unwrap_or(value)
}
