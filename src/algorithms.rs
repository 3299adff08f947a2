use ncollide2d::na::RealField;

/// Returns `n` evenly spaced values from `start` to `stop`, both inclusive. The last value is
/// exactly `stop`, every other value is `start + i * step`.
pub fn linspace<N: RealField + Copy>(start: N, stop: N, n: usize) -> Vec<N> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / N::from_usize(n - 1).unwrap();
            let mut values: Vec<N> = (0..n - 1)
                .map(|i| start + N::from_usize(i).unwrap() * step)
                .collect();
            values.push(stop);
            values
        }
    }
}

/// Linear interpolation from `a` to `b` by the fraction `t`
pub fn lerp<N: RealField + Copy>(a: N, b: N, t: N) -> N {
    a + t * (b - a)
}
