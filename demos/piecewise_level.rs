use curve_expr::piecewise::{Domain, PiecewiseCompilation};

fn main() {
    pretty_env_logger::init();

    let first_domain = Domain::from_bounds(Some("-0.5"), Some("8")).expect("constant bounds");
    let compilation = PiecewiseCompilation::compile(vec![
        ("-cos(x/1.2+.5)*0.8+0.8", first_domain),
        ("0", Domain::ALL),
    ]);

    println!("equations entered: {}", compilation.equation_count());
    for (index, err) in compilation.errors() {
        println!("piece {index} failed: {err}");
    }

    match compilation.into_piecewise() {
        Ok(piecewise) => {
            for x in [-6.0, -1.0, 0.0, 2.0, 6.0] {
                println!("y({x}) = {:?}", piecewise.evaluate(x, 0.0));
            }
        }
        Err(failures) => println!("{} piece(s) need fixing", failures.len()),
    }
}
