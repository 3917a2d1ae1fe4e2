use core::future::Future;

use lapse_core::{Clock, Error, Stopwatch};

pub fn measure<Clk, T, F>(clock: Clk, f: F) -> Result<(T, f64), Error>
where
    Clk: Clock,
    F: FnOnce() -> T,
{
    let mut watch = Stopwatch::new(clock);
    watch.start()?;
    let output = f();
    watch.stop()?;

    let elapsed = watch.elapsed_time();
    log::debug!("measured closure in {elapsed:.6}s");
    Ok((output, elapsed))
}

pub async fn measure_async<Clk, F>(clock: Clk, future: F) -> Result<(F::Output, f64), Error>
where
    Clk: Clock,
    F: Future,
{
    let mut watch = Stopwatch::new(clock);
    watch.start()?;
    let output = future.await;
    watch.stop()?;

    let elapsed = watch.elapsed_time();
    log::debug!("measured future in {elapsed:.6}s");
    Ok((output, elapsed))
}
