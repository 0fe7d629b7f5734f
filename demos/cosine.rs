extern crate chebyshev_table;

use chebyshev_table::cosine_samples;

fn main() {

    let from = 0.0;
    let to = 360.0;
    let resolution = 25;

    let result = cosine_samples(from, to, resolution).unwrap();
    let step = (to - from) / (resolution - 1) as f64;

    println!("degrees;cos");
    for i in 0..resolution {
        println!("{:.1};{:.4}", from + step * i as f64, result[i]);
    }
}
