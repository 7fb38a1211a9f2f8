use std::path::PathBuf;

use chanlun::{CsvAcquirer, Direction, FractalType};
use chanlun::acquirer::{Acquirer, FetchRequest};
use chrono::NaiveDate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    chanlun::init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "usage: cargo run -q -p chanlun-cli --bin audit_structures -- <csv_path> <start_date:YYYY-MM-DD> <end_date:YYYY-MM-DD>"
        );
        std::process::exit(2);
    }

    let csv_path = PathBuf::from(&args[1]);
    let start_date = NaiveDate::parse_from_str(&args[2], "%Y-%m-%d")?;
    let end_date = NaiveDate::parse_from_str(&args[3], "%Y-%m-%d")?;

    let acquirer = CsvAcquirer::new(&csv_path);
    let request = FetchRequest {
        symbol: csv_path.display().to_string(),
        start_date,
        end_date,
        data_type: chanlun::DataType::Daily,
        frequency: chanlun::Frequency::Min60,
        adjust_mode: chanlun::AdjustMode::None,
    };
    let raw_bars = acquirer.fetch(&request)?;
    let bar_count = raw_bars.len();

    let output = chanlun::pipeline::run(raw_bars)?;
    let structural_bars = &output.structural_bars;
    let strokes = &output.strokes;

    let mut violations = Vec::<String>::new();

    for (i, pair) in structural_bars.windows(2).enumerate() {
        if pair[0].is_inclusive(&pair[1]) {
            violations.push(format!("CBAR inclusive violation: index {i} and {}", i + 1));
        }
    }

    for (i, window) in structural_bars.windows(3).enumerate() {
        let (prev, mid, next) = (&window[0], &window[1], &window[2]);
        let expected = if mid.high > prev.high && mid.high > next.high {
            FractalType::Top
        } else if mid.low < prev.low && mid.low < next.low {
            FractalType::Bottom
        } else {
            FractalType::None
        };
        // Post-filter marks are a subset of the raw 3-bar extrema; a mark
        // surviving the chain must have been a raw extremum to begin with.
        if mid.is_fractal() && mid.fractal_type != expected {
            violations.push(format!(
                "CBAR fractal mismatch at {}: surviving {:?} is not a raw 3-bar extremum ({:?})",
                i + 1,
                mid.fractal_type,
                expected
            ));
        }
    }

    for stroke in strokes.iter() {
        let start_type = structural_bars[stroke.start_index].fractal_type;
        let end_type = structural_bars[stroke.end_index].fractal_type;
        match stroke.direction {
            Direction::Up => {
                if start_type != FractalType::Bottom || end_type != FractalType::Top {
                    violations.push(format!(
                        "STROKE semantic mismatch id={} dir=up start={:?} end={:?}",
                        stroke.id, start_type, end_type
                    ));
                }
            }
            Direction::Down => {
                if start_type != FractalType::Top || end_type != FractalType::Bottom {
                    violations.push(format!(
                        "STROKE semantic mismatch id={} dir=down start={:?} end={:?}",
                        stroke.id, start_type, end_type
                    ));
                }
            }
        }
        if stroke.start_index >= stroke.end_index {
            violations.push(format!(
                "STROKE ordering violation id={}: start_index {} >= end_index {}",
                stroke.id, stroke.start_index, stroke.end_index
            ));
        }
    }

    println!(
        "AUDIT summary: raw_bars={} structural_bars={} strokes={}",
        bar_count,
        structural_bars.len(),
        strokes.len(),
    );

    if violations.is_empty() {
        println!("AUDIT result: PASS (no semantic violations found)");
    } else {
        println!("AUDIT result: FAIL violations={}", violations.len());
        for item in violations.iter().take(30) {
            println!("- {item}");
        }
        if violations.len() > 30 {
            println!("- ... {} more", violations.len() - 30);
        }
    }

    Ok(())
}
