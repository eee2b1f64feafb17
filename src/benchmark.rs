//! The "fully native" benchmark: stage a canvas, draw the set, label the time.

use log::debug;

use crate::{
    clock::Clock,
    config::Config,
    document::NodeId,
    error::{Error, Result},
    host::Host,
    render::{self, Timing},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub canvas_id: String,
    pub canvas: NodeId,
    pub label: NodeId,
    pub timing: Timing,
    pub plotted: usize,
}

impl Report {
    pub fn elapsed(&self) -> u64 {
        self.timing.elapsed()
    }
}

/// First `"<base><n>"` not already taken by a connected element.
pub fn unused_canvas_id<H: Host>(host: &H, base: &str) -> String {
    let mut n: u64 = 0;
    loop {
        let id = format!("{}{}", base, n);
        if host.lookup_element(&id).is_none() {
            return id;
        }
        n += 1;
    }
}

pub fn elapsed_label(elapsed: u64) -> String {
    format!("{}ms", elapsed)
}

/**
Run the benchmark once against `host`.

A fresh canvas sized to the grid's device size is appended to the container,
the set is drawn into it and a `"<elapsed>ms"` text node is inserted right
before it. A missing container or an unobtainable drawing context aborts the
run.
*/
pub fn fully_native_mandelbrot<H: Host, C: Clock>(
    host: &mut H,
    clock: &C,
    config: &Config,
) -> Result<Report> {
    let grid = config.grid()?;
    let canvas_id = unused_canvas_id(host, &config.canvas_id_base);

    let container = host
        .lookup_element(&config.container_id)
        .ok_or_else(|| Error::ElementNotFound(config.container_id.clone()))?;
    let canvas = host.create_canvas(&canvas_id, grid.device_size());
    host.append_child(canvas, container)?;
    debug!("staged {:?} in {:?}", canvas_id, config.container_id);

    let element = host
        .lookup_element(&canvas_id)
        .ok_or_else(|| Error::ElementNotFound(canvas_id.clone()))?;
    let surface = host.drawing_context(element)?;
    let (timing, plotted) = render::render(surface, clock, &grid, &config.fill_style);
    debug!(
        "{:?}: plotted {} points in {}ms",
        canvas_id,
        plotted,
        timing.elapsed()
    );

    let label = host.create_text(&elapsed_label(timing.elapsed()));
    host.insert_before(label, canvas)?;

    Ok(Report {
        canvas_id,
        canvas,
        label,
        timing,
        plotted,
    })
}
