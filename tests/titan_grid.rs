use num_complex::Complex64;
use titan_fractal::{generate, FractalError, Region};

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

#[test]
fn axes_and_corners() {
    let region = Region::new(c(-2.0, 1.0), c(1.0, -2.0), 1.0);
    assert_eq!(region.real_samples().unwrap(), vec![-2.0, -1.0, 0.0]);
    assert_eq!(region.imag_samples().unwrap(), vec![1.0, 0.0, -1.0]);

    let g = region.generate().unwrap();
    assert_eq!(g.shape(), (3, 3));
    assert_eq!(g[(0, 0)], c(-2.0, 1.0));
    assert_eq!(g[(2, 2)], c(0.0, -1.0));
    assert_eq!(g.row(1).unwrap(), &[c(-2.0, 0.0), c(-1.0, 0.0), c(0.0, 0.0)][..]);
}

#[test]
fn cell_is_outer_sum_of_axes() {
    let region = Region::new(c(-0.5, 0.3), c(0.25, -0.2), 0.05);
    let re = region.real_samples().unwrap();
    let im = region.imag_samples().unwrap();
    let g = region.generate().unwrap();
    assert_eq!(g.shape(), (im.len(), re.len()));
    for (i, y) in im.iter().enumerate() {
        for (j, x) in re.iter().enumerate() {
            assert_eq!(g[(i, j)], c(*x, *y));
        }
    }
}

#[test]
fn rows_fall_columns_rise() {
    let g = generate(c(-1.0, 1.0), c(1.0, -1.0), 0.25).unwrap();
    assert_eq!(g.shape(), (8, 8));
    for r in 1..g.rows() {
        assert!(g[(r, 0)].im < g[(r - 1, 0)].im);
    }
    for col in 1..g.cols() {
        assert!(g[(0, col)].re > g[(0, col - 1)].re);
    }
}

#[test]
fn degenerate_regions_fail_fast() {
    let cases = [
        (c(-1.0, 1.0), c(1.0, -1.0), 0.0),
        (c(-1.0, 1.0), c(1.0, -1.0), -0.1),
        (c(1.0, 1.0), c(-1.0, -1.0), 0.1),
        (c(-1.0, 1.0), c(1.0, 1.0), 0.1),
    ];
    for (tl, br, step) in cases {
        let err = generate(tl, br, step).unwrap_err();
        assert!(matches!(err, FractalError::InvalidRegion(_)), "{tl} {br} {step}: {err}");
    }
    let err = generate(c(-1.0, f64::NAN), c(1.0, -1.0), 0.1).unwrap_err();
    assert!(matches!(err, FractalError::NonFinite(_)));
}
