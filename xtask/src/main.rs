use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "frontier workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the benchmark suite once per feature configuration and compare
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Only run this bench target
        #[arg(long)]
        bench: Option<String>,
    },
}

const BENCHES: &[&str] = &["walker_benchmark", "collections_benchmark"];

/// Baseline name and the cargo features it is built with.
const CONFIGS: &[(&str, &str)] = &[("default", ""), ("tracing", "tracing"), ("parallel", "parallel")];

const REPORT_PATH: &str = "benchmark_results/report.md";

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

#[derive(Deserialize)]
struct BenchmarkMeta {
    #[serde(default)]
    throughput: Option<serde_json::Value>,
}

/// workload -> baseline -> ops (or elements) per second
type Results = BTreeMap<String, BTreeMap<String, f64>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench {
            quick,
            report_only,
            bench,
        } => {
            if !report_only {
                let targets: Vec<&str> = match bench.as_deref() {
                    Some(name) => vec![name],
                    None => BENCHES.to_vec(),
                };
                run_benchmarks(&targets, quick)?;
            }
            generate_report(Path::new("target/criterion"), Path::new(REPORT_PATH))?;
        }
    }

    Ok(())
}

fn run_benchmarks(targets: &[&str], quick: bool) -> Result<()> {
    for (baseline, features) in CONFIGS {
        for target in targets {
            println!("\n>>> {target} [{baseline}]");
            let start = Instant::now();

            let mut cmd = Command::new("cargo");
            cmd.arg("bench").arg("--bench").arg(target);
            if !features.is_empty() {
                cmd.arg("--features").arg(features);
            }

            // Criterion arguments go after --
            cmd.arg("--").arg("--save-baseline").arg(baseline);
            if quick {
                cmd.arg("--measurement-time").arg("0.1");
                cmd.arg("--noplot");
                cmd.arg("--sample-size").arg("10");
            }

            let status = cmd
                .status()
                .with_context(|| format!("failed to launch cargo bench for {target} [{baseline}]"))?;
            if status.success() {
                println!("Finished {target} [{baseline}] in {:.2?}", start.elapsed());
            } else {
                eprintln!("Warning: {target} failed for baseline {baseline}");
            }
        }
    }

    Ok(())
}

fn generate_report(criterion_dir: &Path, report_path: &Path) -> Result<()> {
    println!("\n>>> Generating Report...");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("creating {}", report_path.display()))?;

    writeln!(file, "# Benchmark Report")?;
    writeln!(file)?;

    write!(file, "| Workload |")?;
    for (baseline, _) in CONFIGS {
        write!(file, " {baseline} (ops/s) | vs default |")?;
    }
    writeln!(file)?;

    write!(file, "|---|")?;
    for _ in CONFIGS {
        write!(file, "---|---|")?;
    }
    writeln!(file)?;

    for (workload, by_baseline) in &results {
        write!(file, "| {workload} |")?;
        let default_ops = by_baseline.get("default").copied().unwrap_or(0.0);

        for (baseline, _) in CONFIGS {
            match by_baseline.get(*baseline) {
                Some(ops) => {
                    let rel = if default_ops > 0.0 { ops / default_ops } else { 0.0 };
                    write!(file, " {} | **{rel:.2}x** |", format_ops(*ops))?;
                }
                None => write!(file, " N/A | - |")?,
            }
        }
        writeln!(file)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}

/// Walks `dir` looking for `<workload>/<baseline>/estimates.json`.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, results)?;
        } else if path.file_name().and_then(|s| s.to_str()) == Some("estimates.json") {
            if let Some((workload, baseline, ops)) = read_estimate(&path)? {
                results.entry(workload).or_default().insert(baseline, ops);
            }
        }
    }
    Ok(())
}

fn read_estimate(path: &Path) -> Result<Option<(String, String, f64)>> {
    let Some(baseline_dir) = path.parent() else {
        return Ok(None);
    };
    let Some(workload_dir) = baseline_dir.parent() else {
        return Ok(None);
    };
    let baseline = dir_name(baseline_dir);
    let workload = dir_name(workload_dir);
    if baseline == "report" || workload == "report" || baseline == "new" || baseline == "base" {
        return Ok(None);
    }

    let estimates: Estimates = serde_json::from_str(&fs::read_to_string(path)?)
        .with_context(|| format!("parsing {}", path.display()))?;
    let time_ns = estimates.mean.point_estimate;
    if time_ns <= 0.0 {
        return Ok(None);
    }

    let meta_path: PathBuf = workload_dir.join("new").join("benchmark.json");
    let elements = fs::read_to_string(&meta_path)
        .ok()
        .and_then(|content| serde_json::from_str::<BenchmarkMeta>(&content).ok())
        .and_then(|meta| meta.throughput)
        .and_then(|t| t.get("Elements").and_then(serde_json::Value::as_f64))
        .unwrap_or(1.0);

    Ok(Some((workload, baseline, elements * 1e9 / time_ns)))
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
