//! # Observability & Tracing
//!
//! The framework logs through the `tracing` crate with structured fields.
//! Nothing is printed unless the application installs a subscriber;
//! [`setup_tracing`] installs the one the sample application uses.
//!
//! ## What Gets Traced
//!
//! - **Registration**: `debug` when a resource type is accepted, `warn` with the
//!   configuration error when it is rejected
//! - **Rendering**: a `render` span per resource (with `resource` and `depth`),
//!   and a `debug` summary of the produced sections
//! - **Recoverable data anomalies**: `warn` for values that cannot become a link
//!   or an embedded document, `trace` for suppressed contributions
//! - **Envelopes and paginators**: `debug` with the window that was produced
//!
//! ## Usage
//!
//! ```bash
//! # Registration problems only
//! RUST_LOG=warn cargo run -p hal-sample
//!
//! # One line per rendered resource
//! RUST_LOG=hal_framework=debug cargo run -p hal-sample
//!
//! # Including suppressed contributions
//! RUST_LOG=hal_framework=trace cargo run -p hal-sample
//! ```
//!
//! With `debug` enabled, nested renders show their position in the tree:
//!
//! ```text
//! DEBUG render:render: Rendered resource="Product" depth=1 links=2 embedded=0 attributes=3
//! DEBUG render: Rendered resource="Order" depth=0 links=3 embedded=1 attributes=2
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
