use mandelbrot_bench::{
    benchmark::fully_native_mandelbrot,
    clock::{MonotonicClock, SteppingClock},
    colour::Rgba,
    document::{Content, Document, NodeId},
    error::{Error, Result},
    escape,
    host::Host,
    screen,
    surface::Surface,
    Config,
};

#[test]
fn reference_run_draws_the_set() {
    let mut document = Document::new();
    let clock = SteppingClock::new(0, 9);

    let report = fully_native_mandelbrot(&mut document, &clock, &Config::default()).unwrap();

    assert_eq!(report.canvas_id, "fullynative0");
    assert_eq!(report.plotted, 2434);
    assert_eq!(report.elapsed(), 9);

    let canvas = document.canvas(report.canvas).unwrap();
    assert_eq!(canvas.size(), screen::Size::new(160, 160));

    let red = canvas
        .pixels()
        .iter()
        .filter(|pixel| **pixel == Rgba::RED)
        .count();
    assert_eq!(red, 2434 * 4);
    assert!(canvas
        .pixels()
        .iter()
        .all(|pixel| *pixel == Rgba::RED || *pixel == Rgba::TRANSPARENT));

    // Logical pixel (0, -39) is the first member: device block (78..80, 0..2).
    assert_eq!(canvas.pixel(78, 0), Some(Rgba::RED));
    assert_eq!(canvas.pixel(79, 1), Some(Rgba::RED));
    assert_eq!(canvas.pixel(76, 0), Some(Rgba::TRANSPARENT));
    // The last two device rows and columns are never drawn.
    for i in 0..160 {
        assert_eq!(canvas.pixel(158, i), Some(Rgba::TRANSPARENT));
        assert_eq!(canvas.pixel(i, 159), Some(Rgba::TRANSPARENT));
    }
}

#[test]
fn canvas_pixels_match_the_evaluator() {
    let mut document = Document::new();
    let report =
        fully_native_mandelbrot(&mut document, &SteppingClock::new(0, 1), &Config::default())
            .unwrap();
    let canvas = document.canvas(report.canvas).unwrap();

    for y in -39..=39 {
        for x in -39..=39 {
            let member = escape::is_member(x as f64 / 40.0, y as f64 / 40.0);
            let device = canvas.pixel(((x + 39) * 2) as u32, ((y + 39) * 2) as u32);
            let expected = if member { Rgba::RED } else { Rgba::TRANSPARENT };
            assert_eq!(device, Some(expected), "({}, {})", x, y);
        }
    }
}

#[test]
fn label_is_inserted_before_the_canvas() {
    let mut document = Document::new();
    let clock = SteppingClock::new(40, 17);

    let report = fully_native_mandelbrot(&mut document, &clock, &Config::default()).unwrap();

    let body = document.body();
    assert_eq!(document.children(body).unwrap(), &[report.label, report.canvas]);
    assert_eq!(document.text_content(report.label).unwrap(), "17ms");
    assert!(matches!(
        document.content(report.label).unwrap(),
        Content::Text(_)
    ));
}

#[test]
fn repeated_runs_get_fresh_canvases() {
    let mut document = Document::new();
    let clock = MonotonicClock::new();
    let config = Config::default();

    let first = fully_native_mandelbrot(&mut document, &clock, &config).unwrap();
    let second = fully_native_mandelbrot(&mut document, &clock, &config).unwrap();
    let third = fully_native_mandelbrot(&mut document, &clock, &config).unwrap();

    assert_eq!(first.canvas_id, "fullynative0");
    assert_eq!(second.canvas_id, "fullynative1");
    assert_eq!(third.canvas_id, "fullynative2");
    assert!(first.timing.end >= first.timing.start);
    assert!(second.timing.start >= first.timing.end);

    assert_eq!(
        document.children(document.body()).unwrap(),
        &[
            first.label,
            first.canvas,
            second.label,
            second.canvas,
            third.label,
            third.canvas
        ]
    );
    assert_eq!(document.lookup_element("fullynative1"), Some(second.canvas));
}

#[test]
fn missing_container_is_fatal() {
    let mut document = Document::new();
    let config = Config::default().with_container_id("nowhere");

    let result = fully_native_mandelbrot(&mut document, &SteppingClock::new(0, 1), &config);

    assert_eq!(result, Err(Error::ElementNotFound("nowhere".to_owned())));
    assert_eq!(document.children(document.body()).unwrap(), &[] as &[NodeId]);
}

#[test]
fn invalid_grid_is_rejected_before_staging() {
    let mut document = Document::new();
    let config = Config::default().with_grid_size(0, 0);

    let result = fully_native_mandelbrot(&mut document, &SteppingClock::new(0, 1), &config);

    assert_eq!(result, Err(Error::InvalidGrid { width: 0, height: 0 }));
    assert_eq!(document.lookup_element("fullynative0"), None);
}

#[test]
fn custom_configuration() {
    let mut document = Document::new();
    let body = document.body();
    let main = document.create_element("main", Some("main"));
    document.append_child(main, body).unwrap();

    let config = Config::default()
        .with_grid_size(20, 20)
        .with_scale(1)
        .with_fill_style("#0000ff")
        .with_canvas_id_base("bench")
        .with_container_id("main");
    let report =
        fully_native_mandelbrot(&mut document, &SteppingClock::new(0, 1), &config).unwrap();

    assert_eq!(report.canvas_id, "bench0");
    assert_eq!(document.parent(report.canvas).unwrap(), Some(main));
    let canvas = document.canvas(report.canvas).unwrap();
    assert_eq!(canvas.size(), screen::Size::new(20, 20));
    let blue = canvas
        .pixels()
        .iter()
        .filter(|pixel| **pixel == Rgba::opaque(0, 0, 255))
        .count();
    assert_eq!(blue, report.plotted);
}

/// Host whose canvases never yield a drawing context.
struct NoContextHost {
    document: Document,
}

impl Host for NoContextHost {
    type Surface = NullSurface;

    fn lookup_element(&self, id: &str) -> Option<NodeId> {
        self.document.lookup_element(id)
    }

    fn create_canvas(&mut self, id: &str, size: screen::Size) -> NodeId {
        self.document.create_canvas(id, size)
    }

    fn create_text(&mut self, text: &str) -> NodeId {
        self.document.create_text(text)
    }

    fn append_child(&mut self, child: NodeId, parent: NodeId) -> Result<()> {
        self.document.append_child(child, parent)
    }

    fn insert_before(&mut self, node: NodeId, reference: NodeId) -> Result<()> {
        self.document.insert_before(node, reference)
    }

    fn drawing_context(&mut self, element: NodeId) -> Result<&mut NullSurface> {
        Err(Error::NotACanvas(element))
    }
}

struct NullSurface;

impl Surface for NullSurface {
    fn set_fill_style(&mut self, _style: &str) {}

    fn fill_rect(&mut self, _x: i32, _y: i32, _width: u32, _height: u32) {}
}

#[test]
fn unobtainable_surface_is_fatal() {
    let mut host = NoContextHost {
        document: Document::new(),
    };

    let result = fully_native_mandelbrot(&mut host, &SteppingClock::new(0, 1), &Config::default());

    let canvas = host.document.lookup_element("fullynative0").unwrap();
    assert_eq!(result, Err(Error::NotACanvas(canvas)));
    // No timing label is written for an aborted run.
    assert_eq!(host.document.children(host.document.body()).unwrap(), &[canvas]);
}
