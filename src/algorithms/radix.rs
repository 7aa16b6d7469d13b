use crate::error::BenchmarkError;

/// LSD radix sort over non-negative integers: one stable counting pass per
/// decimal digit, least significant first, until the pass exponent exceeds
/// the maximum value.
pub fn radix_sort(values: &[i64]) -> Result<Vec<i64>, BenchmarkError> {
    if values.is_empty() {
        return Ok(Vec::new());
    }
    if let Some(&negative) = values.iter().find(|&&value| value < 0) {
        return Err(BenchmarkError::InvalidInputDomain {
            algorithm: "Radix Sort",
            detail: format!("negative value {negative}"),
        });
    }

    let max = values.iter().copied().max().unwrap_or(0);
    let mut sorted = values.to_vec();
    let mut exp: i64 = 1;
    while max / exp > 0 {
        counting_pass(&mut sorted, exp);
        exp = match exp.checked_mul(10) {
            Some(next) => next,
            None => break,
        };
    }
    Ok(sorted)
}

/// Stable counting sort on the decimal digit selected by `exp`. The output
/// scan walks backwards so equal digits keep their relative order across
/// passes.
fn counting_pass(values: &mut Vec<i64>, exp: i64) {
    let mut counts = [0usize; 10];
    for &value in values.iter() {
        counts[((value / exp) % 10) as usize] += 1;
    }
    for digit in 1..10 {
        counts[digit] += counts[digit - 1];
    }

    let mut output = vec![0i64; values.len()];
    for &value in values.iter().rev() {
        let digit = ((value / exp) % 10) as usize;
        counts[digit] -= 1;
        output[counts[digit]] = value;
    }
    *values = output;
}
