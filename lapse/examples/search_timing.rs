use std::hint::black_box;

use lapse::{Clock, Error, MonotonicClock, Stopwatch};

const LEN: usize = 1_000_000;
const LOOKUPS: usize = 200;

fn linear_search(haystack: &[u64], needle: u64) -> Option<usize> {
    haystack.iter().position(|&value| value == needle)
}

fn binary_search(haystack: &[u64], needle: u64) -> Option<usize> {
    haystack.binary_search(&needle).ok()
}

fn time_lookups<Clk, F>(clock: Clk, haystack: &[u64], search: F) -> Result<f64, Error>
where
    Clk: Clock,
    F: Fn(&[u64], u64) -> Option<usize>,
{
    let mut watch = Stopwatch::new(clock);
    watch.start()?;
    for lookup in 0..LOOKUPS {
        let needle = (lookup as u64 * 7_919) % (LEN as u64 * 2);
        black_box(search(black_box(haystack), needle));
    }
    watch.stop()?;
    Ok(watch.elapsed_time())
}

fn report<Clk>(label: &str, clock: Clk, haystack: &[u64]) -> Result<(), Error>
where
    Clk: Clock + Copy,
{
    let linear = time_lookups(clock, haystack, linear_search)?;
    let binary = time_lookups(clock, haystack, binary_search)?;

    println!("[{label}] linear search: {linear:.6}s for {LOOKUPS} lookups");
    println!("[{label}] binary search: {binary:.6}s for {LOOKUPS} lookups");
    Ok(())
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let haystack: Vec<u64> = (0..LEN as u64).map(|value| value * 2).collect();

    report("wall", MonotonicClock, &haystack)?;
    #[cfg(unix)]
    report("cpu", lapse::ProcessorClock, &haystack)?;

    Ok(())
}
