//! Facade pattern demo: place two orders, one of which fails on stock.

use patternbook::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let sink = StdoutSink;
    let facade = OrderFacade::new();

    if let Err(err) = facade.place_order(&sink, "Laptop", 2, 1500.0) {
        sink.emit(&format!("Order failed: {err}"));
    }

    sink.emit("");

    if let Err(err) = facade.place_order(&sink, "Smartphone", 15, 7500.0) {
        sink.emit(&format!("Order failed: {err}"));
    }
}
