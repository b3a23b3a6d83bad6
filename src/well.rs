use std::{ io::{ self, Read }, time::Instant };
use anyhow::{ anyhow, Result };
use sqwell::{
    roots::{ root_or_nan, Method },
    well::Well,
};

fn main() -> Result<()> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    let mut nums = buf.split_whitespace();
    let mut next_num = || -> Result<f64> {
        nums.next()
            .ok_or_else(|| {
                anyhow!("expected three numbers on stdin: low, high, seed")
            })?
            .parse::<f64>()
            .map_err(Into::into)
    };
    let low = next_num()?;
    let high = next_num()?;
    let x0 = next_num()?;

    let well = Well::default();
    let runs = [
        ("Bisect", "bisect", Method::Bisect {
            bounds: (low, high), epsilon: None, maxiters: None }),
        ("Newton", "newton", Method::Newton {
            x0, epsilon: None, maxiters: None }),
        ("False Position", "false_position", Method::FalsePosition {
            bounds: (low, high), epsilon: None, maxiters: None }),
        ("Secant", "secant", Method::Secant {
            x0: low, epsilon: None, maxiters: None }),
    ];
    for (name, label, method) in runs {
        let start = Instant::now();
        let root = root_or_nan(label, well.solve(method));
        let elapsed = start.elapsed().as_secs_f64();
        println!("{:.12}", root);
        println!("{} time: {:.12} seconds", name, elapsed);
    }
    Ok(())
}
