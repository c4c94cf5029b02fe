use std::collections::BTreeMap;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Request, Url};

use crate::args::RequestMethod;
use crate::error::{AppError, AppResult, HttpError};

/// Encoded request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    Form(String),
    Json(Vec<u8>),
}

impl RequestBody {
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            RequestBody::Form(_) => "application/x-www-form-urlencoded",
            RequestBody::Json(_) => "application/json",
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            RequestBody::Form(body) => body.as_bytes(),
            RequestBody::Json(body) => body,
        }
    }
}

/// The one request a run issues over and over. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: RequestMethod,
    url: Url,
    body: Option<RequestBody>,
}

impl RequestDescriptor {
    /// Encodes `parameters` according to `method`: query string for GET, URL encoded
    /// body for form POST, JSON object for JSON POST. A form POST without
    /// parameters carries no body at all.
    ///
    /// # Errors
    ///
    /// Returns an error when the target is not an absolute http(s) URL.
    pub fn new(
        target: &str,
        method: RequestMethod,
        parameters: &BTreeMap<String, String>,
    ) -> AppResult<Self> {
        let mut url = Url::parse(target).map_err(|err| {
            AppError::http(HttpError::InvalidUrl {
                url: target.to_owned(),
                source: err,
            })
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::http(HttpError::UnsupportedScheme {
                url: target.to_owned(),
                scheme: url.scheme().to_owned(),
            }));
        }

        let body = match method {
            RequestMethod::Get => {
                if !parameters.is_empty() {
                    url.query_pairs_mut().extend_pairs(parameters);
                }
                None
            }
            RequestMethod::FormPost if parameters.is_empty() => None,
            RequestMethod::FormPost => {
                let encoded = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(parameters)
                    .finish();
                Some(RequestBody::Form(encoded))
            }
            RequestMethod::JsonPost => {
                let json = serde_json::to_vec(parameters)
                    .map_err(|err| AppError::http(HttpError::EncodeJson { source: err }))?;
                Some(RequestBody::Json(json))
            }
        };

        Ok(Self { method, url, body })
    }

    #[must_use]
    pub const fn method(&self) -> RequestMethod {
        self.method
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub const fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Builds a fresh request for one iteration.
    ///
    /// # Errors
    ///
    /// Returns an error when reqwest rejects the request.
    pub fn to_request(&self, client: &Client) -> AppResult<Request> {
        let mut builder = client.request(self.method.http_method(), self.url.clone());
        if let Some(body) = self.body.as_ref() {
            builder = builder
                .header(CONTENT_TYPE, body.content_type())
                .body(body.as_bytes().to_vec());
        }
        builder
            .build()
            .map_err(|err| AppError::http(HttpError::BuildRequestFailed { source: err }))
    }
}
