use metrics_exporter_prometheus::PrometheusBuilder;
use metrics_util::MetricKindMask;
use std::{panic, process, time::Duration};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webfingerd::{config::Config, Webfinger};

#[tokio::main]
async fn main() {
    exit_on_panic();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "webfingerd=trace,tower_http=trace,axum=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load(
        std::env::args().nth(1)
            .expect("Call with config.yaml")
    ).expect("config");

    if let Some(metrics_listen) = config.metrics_listen {
        PrometheusBuilder::new()
            .with_http_listener(metrics_listen)
            .add_global_label("application", env!("CARGO_PKG_NAME"))
            .idle_timeout(MetricKindMask::ALL, Some(Duration::from_secs(600)))
            .install()
            .expect("prometheus exporter");
        tracing::info!("metrics on {}", metrics_listen);
    }

    let directory = config.directory();
    tracing::info!("{} resources", directory.len());

    let app = Webfinger::new(directory)
        .router_with(config.cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.listen).await
        .expect("bind");
    tracing::info!("serving on {}", config.listen);
    axum::serve(listener, app).await
        .expect("serve");
}

fn exit_on_panic() {
    let orig_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // invoke the default handler and exit the process
        orig_hook(panic_info);
        process::exit(1);
    }));
}
