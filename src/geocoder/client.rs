use crate::cli::Args;
use crate::geocoder::errors::GeocodeError;
use crate::geocoder::models::GeoResult;
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Reverse geocoding of a `"<lat>,<lng>"` pair.
#[async_trait]
pub trait Geocode: Send + Sync + 'static {
    async fn reverse(&self, latlng: &str) -> Result<GeoResult, GeocodeError>;
}

#[derive(Clone, Debug)]
pub struct HttpGeocoder {
    http_client: Client,
    base_url: Url,
    api_key: String,
    lang: String,
}

impl HttpGeocoder {
    const FORMAT: &'static str = "json";

    pub fn new(base_url: Url, api_key: String, lang: String) -> Self {
        Self {
            http_client: Client::new(),
            base_url,
            api_key,
            lang,
        }
    }

    pub fn from_args(args: &Args) -> Self {
        Self::new(
            args.geocoder_url.clone(),
            args.geocoder_api_key.clone(),
            args.geocoder_lang.clone(),
        )
    }

    /// The coordinate pair goes into the query as is, without percent-encoding the comma.
    /// Any query already present on the base URL is kept in front.
    pub fn request_url(&self, latlng: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("apikey", &self.api_key);
        let query = format!("{}&geocode={latlng}", url.query().unwrap_or_default());
        url.set_query(Some(&query));
        url.query_pairs_mut()
            .append_pair("lang", &self.lang)
            .append_pair("format", Self::FORMAT);
        url
    }
}

#[async_trait]
impl Geocode for HttpGeocoder {
    async fn reverse(&self, latlng: &str) -> Result<GeoResult, GeocodeError> {
        tracing::debug!(latlng, "Sending reverse geocoding request.");
        let response = self.http_client.get(self.request_url(latlng)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status));
        }
        let body = response.bytes().await?;
        let result = serde_json::from_slice::<GeoResult>(&body)?;
        Ok(result)
    }
}
