use num_complex::Complex64;
use titan_fractal::render::to_ascii;
use titan_fractal::{
    escape_time, generate, julia_escape_time, julia_shading, mandelbrot_shading, shading, FractalError,
    Grid,
};

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

#[test]
fn values_stay_in_unit_interval() {
    let grid = generate(c(-2.5, 1.5), c(1.5, -1.5), 0.1).unwrap();
    for max in [0, 1, 20, 200] {
        let m = mandelbrot_shading(&grid, max).unwrap();
        let j = julia_shading(&grid, c(-0.4, 0.6), max).unwrap();
        assert!(m.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
        assert!(j.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
    }
}

#[test]
fn immediate_escape_is_white_and_interior_is_black() {
    // far corner escapes at 0, origin row never does
    let grid = generate(c(-3.0, 3.0), c(0.5, -0.5), 0.5).unwrap();
    let m = mandelbrot_shading(&grid, 25).unwrap();
    assert_eq!(m[(0, 0)], 1.0);
    let origin = (6, 6);
    assert_eq!(grid[origin], c(0.0, 0.0));
    assert_eq!(m[origin], 0.0);
}

#[test]
fn batched_equals_scalar_per_cell() {
    let grid = generate(c(-1.6, 1.1), c(0.6, -1.1), 0.07).unwrap();
    let k = c(0.355, 0.355);
    let m = mandelbrot_shading(&grid, 64).unwrap();
    let j = julia_shading(&grid, k, 64).unwrap();
    for r in 0..grid.rows() {
        for col in 0..grid.cols() {
            let z = grid[(r, col)];
            assert_eq!(m[(r, col)], shading(escape_time(z, 64).unwrap(), 64));
            assert_eq!(j[(r, col)], shading(julia_escape_time(z, k, 64).unwrap(), 64));
        }
    }
}

#[test]
fn same_input_same_output() {
    let grid = generate(c(-2.0, 1.25), c(0.75, -1.25), 0.03).unwrap();
    assert_eq!(mandelbrot_shading(&grid, 80).unwrap(), mandelbrot_shading(&grid, 80).unwrap());
}

#[test]
fn non_finite_julia_constant_is_rejected() {
    let grid = generate(c(-1.0, 1.0), c(1.0, -1.0), 0.5).unwrap();
    let err = julia_shading(&grid, c(f64::NAN, 0.0), 10).unwrap_err();
    assert!(matches!(err, FractalError::NonFinite(_)));
}

#[test]
fn non_finite_cells_are_counted() {
    let cells = vec![c(f64::NAN, 0.0), c(0.0, 0.0), c(0.0, f64::INFINITY), c(0.0, 0.0)];
    let grid = Grid::from_vec(2, 2, cells).unwrap();
    let err = julia_shading(&grid, c(0.0, 0.0), 10).unwrap_err();
    assert_eq!(err, FractalError::NonFiniteCells { count: 2, first: (0, 0) });
}

#[test]
fn mandelbrot_ascii() {
    let grid = generate(c(-2.0, 1.25), c(0.75, -1.25), 0.125).unwrap();
    let shades = mandelbrot_shading(&grid, 40).unwrap();
    insta::assert_snapshot!(to_ascii(&shades), @r"
    ......................
    .............::::.....
    ...........::::~@::...
    ..........::::~@-:::..
    .........:::::+@#:::..
    .......::::-=@@@@@=-:.
    ......:::::-@@@@@@@-:.
    ...:::~:-:-@@@@@@@@=::
    .:::::-@@+~@@@@@@@@@::
    .::::-=@@@+@@@@@@@@=::
    @@@@@@@@@@@@@@@@@@@:::
    .::::-=@@@+@@@@@@@@=::
    .:::::-@@+~@@@@@@@@@::
    ...:::~:-:-@@@@@@@@=::
    ......:::::-@@@@@@@-:.
    .......::::-=@@@@@=-:.
    .........:::::+@#:::..
    ..........::::~@-:::..
    ...........::::~@::...
    .............::::.....
    ");
}
