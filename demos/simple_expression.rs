use curve_expr::compile;

fn main() {
    pretty_env_logger::init();

    let formula = "sin(x) * 2 + t / 4";
    let curve = match compile(formula) {
        Ok(curve) => curve,
        Err(err) => {
            println!("Error: {}", err);
            return;
        }
    };

    for step in 0..=8 {
        let x = -4.0 + step as f64;
        println!("y({:>4.1}, 1.0) = {:.4}", x, curve.evaluate(x, 1.0));
    }

    for broken in ["sin(x", "foo(x)", "x ^ 2"] {
        match compile(broken) {
            Ok(_) => println!("{broken}: compiled"),
            Err(err) => println!("{broken}: {err}"),
        }
    }
}
