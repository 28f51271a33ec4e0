//! Bridge pattern demo: draw shapes in colors chosen independently.

use patternbook::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let sink = StdoutSink;

    let red_circle = Circle::new(Red);
    let blue_square = Square::new(Blue);

    sink.emit(&red_circle.draw());
    sink.emit(&blue_square.draw());
}
