use std::collections::BTreeMap;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod place;

pub use self::place::*;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),

    #[error("{0}")]
    Api(#[from] yplaces_boundary::Error),
}

impl From<gloo_net::Error> for Error {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

pub async fn into_json<T>(response: Response) -> Result<T>
where
    T: DeserializeOwned,
{
    // ensure we've got 2xx status
    if response.ok() {
        Ok(response.json().await?)
    } else {
        Err(into_api_error(response).await)
    }
}

/// Only the status matters, the body is ignored.
pub async fn into_unit(response: Response) -> Result<()> {
    if response.ok() {
        Ok(())
    } else {
        Err(into_api_error(response).await)
    }
}

async fn into_api_error(response: Response) -> Error {
    let http_status = response.status();
    let err = match response.json::<yplaces_boundary::Error>().await {
        Ok(err) => yplaces_boundary::Error { http_status, ..err },
        // The server does not send a JSON body for every error.
        Err(_) => status_error(http_status, response.status_text()),
    };
    err.into()
}

fn status_error(http_status: u16, status_text: String) -> yplaces_boundary::Error {
    let message = if status_text.is_empty() {
        "Request failed".to_string()
    } else {
        status_text
    };
    yplaces_boundary::Error {
        http_status,
        message,
        parameters: BTreeMap::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_message() {
        let err = Error::from(yplaces_boundary::Error {
            http_status: 400,
            message: "Invalid parameters".into(),
            parameters: BTreeMap::default(),
        });
        assert_eq!(err.to_string(), "Invalid parameters (HTTP status 400)");
    }

    #[test]
    fn error_without_body() {
        let err = status_error(502, "Bad Gateway".into());
        assert_eq!(err.http_status, 502);
        assert_eq!(err.message, "Bad Gateway");
        assert!(err.parameters.is_empty());
        let err = status_error(500, String::new());
        assert_eq!(err.message, "Request failed");
    }
}
