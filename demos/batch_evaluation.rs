use curve_expr::{CompileCache, EvalContext};

fn main() {
    pretty_env_logger::init();

    let mut cache = CompileCache::new(16);
    let curve = cache
        .get_or_compile("-cos(x/1.2+.5)*0.8+0.8")
        .expect("formula should compile");

    // One sample per simulated frame at 60 fps over ten seconds.
    let frames: Vec<EvalContext> = (0..600)
        .map(|frame| {
            let t = frame as f64 / 60.0;
            EvalContext::new(-6.0 + t * 1.2, t)
        })
        .collect();

    let heights = curve.evaluate_batch(&frames);
    for (ctx, y) in frames.iter().zip(&heights).step_by(60) {
        println!("t = {:>4.1}s  x = {:>5.2}  y = {:.4}", ctx.t, ctx.x, y);
    }

    // A resubmission of the same text is served from the cache.
    let again = cache.get_or_compile("-cos(x/1.2+.5)*0.8+0.8").unwrap();
    println!("cached: {}", std::sync::Arc::ptr_eq(&curve, &again));
}
