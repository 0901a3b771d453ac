use std::f64::consts::PI;
use std::fs;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use parfft::{
    Complex64, StageTimings, WorkerPool, dft, fft, fft_iterative_observed,
    fft_parallel_chunks_observed, fft_parallel_groups_observed, fft_recursive,
};

#[derive(Parser, Debug)]
#[command(name = "spectrum")]
#[command(about = "Transform a time series and print its spectrum", long_about = None)]
struct Cli {
    /// Transform algorithm to run.
    #[arg(long, value_enum, default_value = "auto")]
    algorithm: Algorithm,
    /// Length of the synthesized series (must be a power of two).
    #[arg(long, value_name = "SAMPLES", default_value_t = 1 << 14)]
    size: usize,
    /// CSV file to read instead of synthesizing a series. The close-price
    /// column (fifth column) is used; the series is truncated to the largest
    /// power of two that fits.
    #[arg(long, value_name = "FILE")]
    csv: Option<String>,
    /// Worker count for the parallel algorithms.
    #[arg(long, value_name = "COUNT", default_value_t = 4)]
    workers: usize,
    /// Number of leading magnitude bins to print.
    #[arg(long, value_name = "COUNT", default_value_t = 128)]
    bins: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Algorithm {
    /// O(N²) reference transform.
    Reference,
    /// Recursive divide-and-conquer radix-2 FFT.
    Recursive,
    /// In-place iterative radix-2 FFT.
    Iterative,
    /// Parallel FFT, one task per butterfly block.
    ParallelGroups,
    /// Parallel FFT, four stage-aligned chunks.
    ParallelChunks,
    /// Size-based choice between iterative and parallel-chunks.
    Auto,
}

/// Example series: 15 Hz + 50 Hz + 100 Hz sinusoids over `n` points.
fn synthesize_series(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let s = (2.0 * PI * 15.0 * t).sin()
                + (2.0 * PI * 50.0 * t).sin()
                + (2.0 * PI * 100.0 * t).sin();
            Complex64::new(s, 0.0)
        })
        .collect()
}

/// Reads the close-price column (fifth column) of a CSV file with a header
/// row into a complex series.
fn read_close_column(path: &str) -> Result<Vec<Complex64>, String> {
    let content =
        fs::read_to_string(path).map_err(|e| format!("Cannot read {path}: {e}"))?;

    let mut series = Vec::new();
    for (number, line) in content.lines().enumerate().skip(1) {
        let close = line
            .split(',')
            .nth(4)
            .ok_or_else(|| format!("{path}:{}: fewer than 5 columns", number + 1))?;
        let value: f64 = close
            .trim()
            .parse()
            .map_err(|e| format!("{path}:{}: bad close value: {e}", number + 1))?;
        series.push(Complex64::new(value, 0.0));
    }
    Ok(series)
}

fn print_stage_timings(timings: &StageTimings) {
    for (stage_size, elapsed) in timings.stages() {
        println!("Stage {stage_size}: {:.6} seconds", elapsed.as_secs_f64());
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let mut series = match &cli.csv {
        Some(path) => {
            let mut series = read_close_column(path)?;
            if series.is_empty() {
                return Err(format!("{path} holds no samples"));
            }
            if !series.len().is_power_of_two() {
                let truncated = 1usize << series.len().ilog2();
                println!(
                    "Truncating {} samples to {truncated} (largest power of two)",
                    series.len()
                );
                series.truncate(truncated);
            }
            series
        }
        None => {
            if !cli.size.is_power_of_two() {
                return Err(format!("Size {} is not a power of two", cli.size));
            }
            synthesize_series(cli.size)
        }
    };
    let n = series.len();

    let mut timings = StageTimings::new();
    let started = Instant::now();
    match cli.algorithm {
        Algorithm::Reference => {
            series = dft(&series);
        }
        Algorithm::Recursive => {
            fft_recursive(&mut series).map_err(|e| e.to_string())?;
        }
        Algorithm::Iterative => {
            fft_iterative_observed(&mut series, &mut timings).map_err(|e| e.to_string())?;
        }
        Algorithm::ParallelGroups => {
            let pool = WorkerPool::new(cli.workers).map_err(|e| e.to_string())?;
            fft_parallel_groups_observed(&mut series, &pool, &mut timings)
                .map_err(|e| e.to_string())?;
        }
        Algorithm::ParallelChunks => {
            let pool = WorkerPool::new(cli.workers).map_err(|e| e.to_string())?;
            fft_parallel_chunks_observed(&mut series, &pool, &mut timings)
                .map_err(|e| e.to_string())?;
        }
        Algorithm::Auto => {
            fft(&mut series).map_err(|e| e.to_string())?;
        }
    }
    let elapsed = started.elapsed();

    println!(
        "{:?} transform of {n} samples took {:.6} seconds",
        cli.algorithm,
        elapsed.as_secs_f64()
    );
    print_stage_timings(&timings);

    // Magnitudes of the leading bins; only the first half is distinct for
    // real input.
    for (k, bin) in series.iter().take(cli.bins.min(n / 2)).enumerate() {
        let magnitude = (bin.re * bin.re + bin.im * bin.im).sqrt();
        println!("{k}: {magnitude}");
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(message) = run(&cli) {
        eprintln!("{message}");
        std::process::exit(1);
    }
}
