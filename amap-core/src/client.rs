use std::sync::Arc;

use serde_json::Value;

use crate::{
    error::Error,
    model::{Extensions, Output, WeatherReport},
    transport::{HttpTransport, ReqwestTransport, TransportOptions},
};

/// Fixed upstream endpoint for weather lookups.
pub const WEATHER_URL: &str = "https://restapi.amap.com/v3/weather/weatherInfo";

/// Client for the Amap weather lookup API.
///
/// Holds the API key (immutable after construction) and the transport options
/// applied to the next request. Each call is stateless beyond reading those.
#[derive(Debug)]
pub struct WeatherClient {
    api_key: String,
    options: TransportOptions,
    transport_override: Option<Arc<dyn HttpTransport>>,
}

impl WeatherClient {
    /// The key itself is not validated; an empty key is simply omitted from
    /// the outgoing query.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            options: TransportOptions::default(),
            transport_override: None,
        }
    }

    /// Substitute the transport, e.g. with a mock in tests. The injected
    /// transport is used for every subsequent request in place of a freshly
    /// built [`ReqwestTransport`].
    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport_override = Some(transport);
        self
    }

    /// Replace the transport options; takes effect on the next request.
    pub fn set_transport_options(&mut self, options: TransportOptions) {
        self.options = options;
    }

    /// Build a transport configured with the current options. A new instance
    /// is constructed on every call; there is no caching or pooling.
    pub fn http_transport(&self) -> ReqwestTransport {
        ReqwestTransport::new(self.options.clone())
    }

    fn transport(&self) -> Arc<dyn HttpTransport> {
        match &self.transport_override {
            Some(transport) => Arc::clone(transport),
            None => Arc::new(self.http_transport()),
        }
    }

    /// Fetch weather for `city`.
    ///
    /// `extensions` selects the report detail level (`"base"` or `"all"`),
    /// `output` the serialization format (`"json"` or `"xml"`); both are
    /// matched case-insensitively and rejected with
    /// [`Error::InvalidArgument`] before any network call otherwise.
    pub async fn get_weather(
        &self,
        city: &str,
        extensions: &str,
        output: &str,
    ) -> Result<WeatherReport, Error> {
        let output = Output::try_from(output)?;
        let extensions = Extensions::try_from(extensions)?;

        let query = self.build_query(city, extensions, output);

        let response = self
            .transport()
            .get(WEATHER_URL, &query)
            .await
            .map_err(|err| Error::Http { message: err.message, code: err.code })?;

        match output {
            Output::Json => {
                let value: Value = serde_json::from_str(&response.body)?;
                Ok(WeatherReport::Json(value))
            }
            Output::Xml => Ok(WeatherReport::Xml(response.body)),
        }
    }

    /// Current conditions; equivalent to `get_weather(city, "base", output)`.
    pub async fn get_live_weather(&self, city: &str, output: &str) -> Result<WeatherReport, Error> {
        self.get_weather(city, Extensions::Base.as_str(), output).await
    }

    /// Forecast included; equivalent to `get_weather(city, "all", output)`.
    pub async fn get_forecast_weather(
        &self,
        city: &str,
        output: &str,
    ) -> Result<WeatherReport, Error> {
        self.get_weather(city, Extensions::All.as_str(), output).await
    }

    /// Empty key or city are dropped rather than sent as empty strings.
    fn build_query(
        &self,
        city: &str,
        extensions: Extensions,
        output: Output,
    ) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(4);

        if !self.api_key.is_empty() {
            query.push(("key", self.api_key.clone()));
        }
        if !city.is_empty() {
            query.push(("city", city.to_string()));
        }
        query.push(("extensions", extensions.as_str().to_string()));
        query.push(("output", output.as_str().to_string()));

        query
    }
}
