use crate::widget::controller::LookupOrdering;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    #[arg(default_value = "https://geocode-maps.yandex.ru/1.x/")]
    pub geocoder_url: Url,
    #[arg(long, env = "GEOPIN_GEOCODER_API_KEY", hide_env_values = true)]
    pub geocoder_api_key: String,
    #[arg(long)]
    #[arg(default_value = "ru_RU")]
    pub geocoder_lang: String,
    /// Origins of the pages allowed to embed the widget.
    #[arg(long, value_delimiter = ',')]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
    /// JSON file with the map options, overlay polygon and marker image.
    #[arg(long)]
    pub widget_config: Option<PathBuf>,
    #[arg(long, value_enum)]
    #[arg(default_value_t = LookupOrdering::Unordered)]
    pub lookup_ordering: LookupOrdering,
}
