use exprel::*;

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // -- Elementary exponentials --
    println!("=== Elementary (f64) ===");
    println!("exp(1)            = {}", exp(1.0_f64));
    println!("exp_sgn(1, -2)    = {}", exp_sgn(1.0_f64, -2.0));
    println!("expm1(1e-10)      = {:e}", expm1(1e-10_f64));
    println!("exp_mult(800, e^-200) = {:e}", exp_mult(800.0_f64, (-200.0_f64).exp()));

    // -- Relative exponentials across regimes --
    println!("\n=== exprel_n(5, x) ===");
    for x in [-100.0, -10.0, -1e-6, 0.0, 1.0, 5.0, 30.0, 100.0] {
        println!("  x = {x:>8}: {:.15e}", exprel_n(5, x));
    }

    println!("\nexprel(1)   = {}", exprel(1.0_f64));
    println!("exprel_2(1) = {}", exprel_2(1.0_f64));

    // -- Raw form exposes the status --
    println!("\n=== Raw results ===");
    match exprel_n_raw(3, 1000.0_f64) {
        Ok(v) => println!("exprel_n(3, 1000) = {v}"),
        Err(e) => println!("exprel_n(3, 1000) failed: {e} (value {})", e.value),
    }
    let err = exprel_n_raw(-1, 2.0_f64).unwrap_err();
    println!("exprel_n(-1, 2): {:?}", err.kind);

    // -- Convenience form logs a warning and returns the sentinel --
    println!("\n=== Convenience form on overflow ===");
    println!("exp(1000) = {}", exp(1000.0_f64));

    // -- f32 support --
    println!("\n=== f32 support ===");
    println!("exprel_n(4, 2.5) = {} (f32)", exprel_n(4, 2.5_f32));
}
