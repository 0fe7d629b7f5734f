extern crate chebyshev_table;

use chebyshev_table::{build_coefficients, evaluate_over_unit_range, SampleGrid};

fn main() {

    let degree = 5;
    let resolution = 41;

    let table = build_coefficients(degree).unwrap();
    let grid = SampleGrid::unit_range(resolution).unwrap();

    println!("x;{}", (0..=degree).map(|p| format!("T{}", p)).collect::<Vec<_>>().join(";"));

    let results: Vec<Vec<f64>> = (0..=degree)
        .map(|p| evaluate_over_unit_range(p, resolution, &table).unwrap())
        .collect();

    for i in 0..resolution {
        let row: Vec<String> = results.iter().map(|r| format!("{:.4}", r[i])).collect();
        println!("{:.2};{}", grid.points()[i], row.join(";"));
    }
}
