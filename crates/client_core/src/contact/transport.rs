use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{header::ACCEPT, multipart::Form, Client};
use shared::protocol::EndpointResponse;
use url::Url;

/// Delivers contact-form fields to a remote endpoint.
///
/// Futures are not `Send`: in the browser the request runs on the page's
/// single event loop.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn post_form(&self, endpoint: &Url, fields: &[(String, String)])
        -> Result<EndpointResponse>;
}

/// Multipart POST with `Accept: application/json`, over reqwest.
pub struct HttpFormTransport {
    http: Client,
}

impl HttpFormTransport {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

impl Default for HttpFormTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl FormTransport for HttpFormTransport {
    async fn post_form(
        &self,
        endpoint: &Url,
        fields: &[(String, String)],
    ) -> Result<EndpointResponse> {
        let form = fields.iter().fold(Form::new(), |form, (name, value)| {
            form.text(name.clone(), value.clone())
        });

        let response = self
            .http
            .post(endpoint.clone())
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("failed to reach form endpoint {endpoint}"))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("failed to read form endpoint response")?;
        Ok(EndpointResponse { status, body })
    }
}

pub struct MissingFormTransport;

#[async_trait(?Send)]
impl FormTransport for MissingFormTransport {
    async fn post_form(
        &self,
        endpoint: &Url,
        _fields: &[(String, String)],
    ) -> Result<EndpointResponse> {
        Err(anyhow!(
            "form endpoint transport is unavailable for {endpoint}"
        ))
    }
}

/// Resolves a form `action` attribute the way the browser would, against the
/// page URL when it is relative.
pub fn resolve_endpoint(page_url: Option<&str>, action: &str) -> Result<Url> {
    let action = action.trim();
    match Url::parse(action) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = page_url.context("relative form action without a page url")?;
            Url::parse(base)
                .with_context(|| format!("invalid page url '{base}'"))?
                .join(action)
                .with_context(|| format!("invalid form action '{action}'"))
        }
        Err(err) => Err(err).with_context(|| format!("invalid form action '{action}'")),
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
