//! Estimated metrics for colleges the authoritative source cannot find

use campusrank_core::{CollegeProfile, MetricKey};

use crate::error::{Result, RuntimeError};

/// Number of comma-separated values an estimate response must contain
pub const ESTIMATE_FIELD_COUNT: usize = MetricKey::ALL.len();

/// Build the prompt asking for the eight metric estimates, in [`MetricKey::ALL`] order
pub fn estimate_prompt(college: &str, category: &str) -> String {
    format!(
        "Provide the following information for {college} in the context of {category} education:\n\
         1. Estimated enrollment\n\
         2. Estimated admission rate (as a percentage)\n\
         3. Estimated in-state tuition\n\
         4. Estimated out-of-state tuition\n\
         5. Estimated retention rate (as a percentage)\n\
         6. Estimated graduation rate (as a percentage)\n\
         7. Estimated median earnings 6 years after entry\n\
         8. Estimated median debt for completers\n\
         \n\
         Provide only the numeric values for each point, separated by commas."
    )
}

/// Parse an estimate response into a profile
///
/// The response must split into exactly [`ESTIMATE_FIELD_COUNT`] comma
/// separated tokens, assigned by position. Each token is read leniently (see
/// [`parse_leading_number`]); a token that yields nothing or zero leaves the
/// metric absent. Enrollment is truncated to a whole number.
pub fn parse_estimates(college: &str, response: &str) -> Result<CollegeProfile> {
    let tokens: Vec<&str> = response.split(',').collect();
    if tokens.len() != ESTIMATE_FIELD_COUNT {
        return Err(RuntimeError::MalformedResponse(format!(
            "expected {} comma-separated values, got {}",
            ESTIMATE_FIELD_COUNT,
            tokens.len()
        )));
    }

    let mut profile = CollegeProfile::new(college);
    for (key, token) in MetricKey::ALL.into_iter().zip(tokens) {
        let value = parse_leading_number(token)
            .map(|v| if key == MetricKey::Enrollment { v.trunc() } else { v })
            .filter(|v| *v != 0.0);
        profile.set_metric(key, value);
    }
    Ok(profile)
}

/// Read the numeric prefix of a token
///
/// Leading whitespace and a single `$` are skipped. Digits, one decimal point
/// and an optional exponent are consumed; anything after them (`%`, units,
/// words) is ignored. Returns `None` when no digits are found.
pub fn parse_leading_number(token: &str) -> Option<f64> {
    let s = token.trim_start();
    let s = s.strip_prefix('$').unwrap_or(s).trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let mut digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // Exponent only counts when followed by at least one digit
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
