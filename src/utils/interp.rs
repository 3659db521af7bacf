// src/utils/interp.rs

/// `num` evenly spaced values over `[start, stop]`, both ends included
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            (0..num)
                .map(|i| if i == num - 1 { stop } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Piecewise-linear resample of `samples` onto `out_len` evenly spaced positions
///
/// Source and target both span the same interval, so sample `0` maps to
/// output `0` and the last sample maps to the last output. An empty
/// source yields zeros, a single sample yields a constant row.
pub fn resample_linear(samples: &[u8], out_len: usize) -> Vec<f64> {
    match samples.len() {
        0 => return vec![0.0; out_len],
        1 => return vec![samples[0] as f64; out_len],
        _ => {}
    }

    let last = (samples.len() - 1) as f64;
    linspace(0.0, last, out_len)
        .into_iter()
        .map(|pos| {
            let lo = pos.floor() as usize;
            if lo >= samples.len() - 1 {
                return samples[samples.len() - 1] as f64;
            }
            let frac = pos - lo as f64;
            let a = samples[lo] as f64;
            let b = samples[lo + 1] as f64;
            a + (b - a) * frac
        })
        .collect()
}
