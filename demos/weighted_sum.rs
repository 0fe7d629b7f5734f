extern crate chebyshev_table;

use std::f64::consts::PI;

use chebyshev_table::{build_coefficients, evaluate_weighted_sum, SampleGrid};

fn main() {

    // 3 T_1 - 2 T_2 + T_4
    let weights = vec![3, -2, 0, 1];
    let resolution = 12;

    let table = build_coefficients(weights.len()).unwrap();

    // Chebyshev nodes, roots of T_resolution, denser near both ends of [-1, 1]
    let mut x_vector = Vec::new();
    for k in (0..resolution).rev() {
        x_vector.push(((2 * k + 1) as f64 * PI / (2 * resolution) as f64).cos());
    }
    let grid = SampleGrid::from_points(x_vector, resolution).unwrap();

    let result = evaluate_weighted_sum(&weights, &table, grid.points()).unwrap();

    println!("x;y");
    for i in 0..resolution {
        println!("{:.4};{:.4}", grid.points()[i], result[i]);
    }
}
