use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder, Method, Response};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    #[error("Failed to build request url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, HttpClientError>;

/// Thin wrapper over [`reqwest::Client`] bound to a base url. Paths given to
/// [`RequestBuilder::path`] are resolved relative to the base url, so a service
/// mounted under a prefix keeps its prefix.
#[derive(Debug)]
pub struct HttpClient {
    base_url: Url,
    client: Client,
}

impl HttpClient {
    pub fn builder(base_url: Url) -> HttpClientBuilder {
        HttpClientBuilder {
            base_url: with_trailing_slash(base_url),
            client_builder: Client::builder(),
        }
    }

    pub fn request(&self) -> RequestBuilder {
        RequestBuilder::new(self)
    }

    async fn send_request(&self, builder: RequestBuilder<'_>) -> Result<Response> {
        let url = self.base_url.join(&builder.path.join("/"))?;

        tracing::trace!(method = %builder.method, %url, "Sending request");
        let mut request = self.client.request(builder.method, url);

        if let Some(form) = builder.form {
            request = request.multipart(form);
        }

        Ok(request.send().await?)
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

pub struct HttpClientBuilder {
    base_url: Url,
    client_builder: ClientBuilder,
}

impl HttpClientBuilder {
    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.client_builder = self.client_builder.user_agent(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<HttpClient> {
        Ok(HttpClient { base_url: self.base_url, client: self.client_builder.build()? })
    }
}

pub struct RequestBuilder<'a> {
    client: &'a HttpClient,
    method: Method,
    path: Vec<String>,
    form: Option<Form>,
}

impl<'a> RequestBuilder<'a> {
    fn new(client: &'a HttpClient) -> Self {
        Self { client, method: Method::GET, path: Vec::new(), form: None }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Appends path segments. Leading and trailing slashes are ignored.
    pub fn path(mut self, path: &str) -> Self {
        self.path.extend(path.split('/').filter(|segment| !segment.is_empty()).map(str::to_string));
        self
    }

    pub fn form_text(mut self, name: &str, value: &str) -> Self {
        let form = self.form.take().unwrap_or_else(Form::new);
        self.form = Some(form.text(name.to_string(), value.to_string()));
        self
    }

    pub fn form_file_bytes(mut self, name: &str, bytes: Bytes, file_name: &str) -> Self {
        let length = bytes.len() as u64;
        let part = Part::stream_with_length(bytes, length).file_name(file_name.to_string());
        let form = self.form.take().unwrap_or_else(Form::new);
        self.form = Some(form.part(name.to_string(), part));
        self
    }

    pub async fn send(self) -> Result<Response> {
        self.client.send_request(self).await
    }
}
