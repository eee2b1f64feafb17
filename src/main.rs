use anyhow::Context;
use log::info;

use mandelbrot_bench::{benchmark, clock::MonotonicClock, config, document::Document, present, Config};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();
    let clock = MonotonicClock::new();
    let mut document = Document::new();

    let report = benchmark::fully_native_mandelbrot(&mut document, &clock, &config)
        .context("benchmark failed")?;
    let label = document.text_content(report.label)?;
    info!(
        "{}: {} of {} points in the set",
        report.canvas_id,
        report.plotted,
        config.grid()?.pixels().count()
    );
    println!("{}", label);

    if std::env::var_os(config::HEADLESS_VAR).is_some() {
        return Ok(());
    }

    let canvas = document.canvas(report.canvas)?;
    present::show(&format!("{} - {}", report.canvas_id, label), canvas)
}
