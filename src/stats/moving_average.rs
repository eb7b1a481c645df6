//! Simple, exponential and weighted moving averages

use crate::stats::rolling::{rolling_mean, rolling_reduce};

/// Simple moving average; `n − w + 1` outputs (see [`rolling_mean`]).
pub fn sma(data: &[f64], window: usize, output: &mut [f64]) -> usize {
    rolling_mean(data, window, output)
}

/// Exponential moving average with `α = 2 / (window + 1)`, seeded with the
/// first value. Writes `data.len()` outputs (none when `window == 0`).
pub fn ema(data: &[f64], window: usize, output: &mut [f64]) -> usize {
    let Some((&first, rest)) = data.split_first() else {
        return 0;
    };
    if window == 0 {
        return 0;
    }

    let alpha = 2.0 / (window as f64 + 1.0);
    let mut acc = first;
    output[0] = acc;
    for (o, &x) in output[1..data.len()].iter_mut().zip(rest) {
        acc = alpha * x + (1.0 - alpha) * acc;
        *o = acc;
    }
    data.len()
}

/// Linearly weighted moving average: weights `1..=w`, newest heaviest.
/// `n − w + 1` outputs.
pub fn wma(data: &[f64], window: usize, output: &mut [f64]) -> usize {
    let denom = window as f64 * (window as f64 + 1.0) / 2.0;
    rolling_reduce(data, window, output, |w| {
        let weighted = w
            .iter()
            .enumerate()
            .fold(0.0, |acc, (j, &x)| acc + (j + 1) as f64 * x);
        weighted / denom
    })
}
