use clap::Parser;
use cli::Args;
use tokio::net::TcpListener;

mod app_context;
mod cli;
mod display;
mod geocoder;
mod health;
mod http;
mod logging;
mod map;
mod widget;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();
    let widget_config = map::init(&args)?;
    let app_context = app_context::init(&args, widget_config);
    tracing::info!(
        geocoder_url = %args.geocoder_url,
        lang = %args.geocoder_lang,
        lookup_ordering = ?args.lookup_ordering,
        "Initialized the geocoder."
    );
    let router = http::router::new(&args, app_context);
    let listener = TcpListener::bind(args.listen_address).await?;
    tracing::info!("Listening on {}.", args.listen_address);
    axum::serve(listener, router).await?;
    Ok(())
}
