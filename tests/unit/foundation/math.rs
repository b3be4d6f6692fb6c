use super::*;

const EPS: f64 = 1e-12;

fn samples() -> impl Iterator<Item = f64> {
    (0..=1000).map(|k| k as f64 / 1000.0)
}

#[test]
fn max_scale_floors_at_zero() {
    assert_eq!(max_scale(0.2, 1, 2), 0.0);
    assert!((max_scale(0.8, 1, 2) - 0.3).abs() < EPS);
    assert_eq!(max_scale(0.0, 0, 5), 0.0);
}

#[test]
fn sinify_endpoints_and_peak() {
    assert!(sinify(0.0).abs() < EPS);
    assert!(sinify(1.0).abs() < EPS);
    assert!((sinify(0.5) - 1.0).abs() < EPS);
}

#[test]
fn sinify_is_symmetric() {
    for s in samples() {
        assert!((sinify(s) - sinify(1.0 - s)).abs() < 1e-9, "s={s}");
        assert!(sinify(s) >= -EPS);
    }
}

#[test]
fn divide_scale_partitions_progress() {
    for n in 1..=6 {
        for s in samples() {
            let mut sum = 0.0;
            for i in 0..n {
                let part = divide_scale(s, i, n);
                assert!((-EPS..=1.0 + EPS).contains(&part), "s={s} i={i} n={n}");
                sum += part;
            }
            assert!((sum - s * n as f64).abs() < 1e-9, "s={s} n={n}");
        }
    }
}

#[test]
fn divide_scale_slice_boundaries() {
    assert_eq!(divide_scale(0.25, 1, 2), 0.0);
    assert!((divide_scale(0.25, 0, 2) - 0.5).abs() < EPS);
    assert!((divide_scale(0.5, 0, 2) - 1.0).abs() < EPS);
    assert_eq!(divide_scale(0.5, 1, 2), 0.0);
    assert!((divide_scale(1.0, 1, 2) - 1.0).abs() < EPS);
}
