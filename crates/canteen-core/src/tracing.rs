use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: the named crate at debug, HTTP spans
/// at info, SQL statements only on warning.
fn default_filter(crate_name: &str) -> String {
    format!("info,{crate_name}=debug,tower_http=info,sqlx=warn,sea_orm=warn")
}

/// Install the global subscriber for a binary.
///
/// Output is JSON lines unless `LOG_FORMAT=pretty`. Later calls are no-ops.
pub fn init_tracing(crate_name: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(crate_name)));
    let pretty = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("pretty"));
    let output = if pretty {
        fmt::layer().pretty().boxed()
    } else {
        fmt::layer().json().with_current_span(false).boxed()
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init();
}
