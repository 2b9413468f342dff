// demos/black_scholes_demo.rs
use diffusion_sde::models::BlackScholesProcess;
use diffusion_sde::DiffusionProcess;

fn main() {
    println!("Black-Scholes Diffusion Demo for diffusion-sde");
    println!("==============================================\n");

    let start_price = 12.1;
    let process = BlackScholesProcess::new(0.05, 0.06, start_price).expect("valid parameters");

    println!("rate:       {}", process.rate());
    println!("volatility: {}", process.volatility());
    println!("x0:         {}\n", process.x0());

    println!("drift(0, x0)     = {:.6}", process.drift(0.0, start_price));
    println!("diffusion(0, x0) = {:.6}", process.diffusion(0.0, start_price));

    let dt = 1.0 / 252.0; // one trading day
    println!(
        "one-day expectation = {:.6}",
        process.expectation(0.0, start_price, dt)
    );
    println!(
        "one-day variance    = {:.8}\n",
        process.variance(0.0, start_price, dt)
    );

    let unchanged = process.expectation(0.0, start_price, 0.0) == start_price;
    println!(
        "expected price after time 0 equals the starting price: {}",
        unchanged
    );
}
