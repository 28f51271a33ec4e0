//! State pattern demo: walk a document through its lifecycle.

use patternbook::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let sink = StdoutSink;
    let mut doc = Document::new();

    for _ in 0..3 {
        sink.emit(&format!("Current State: {}", doc.stage_name()));
        doc.publish_into(&sink);
    }
}
