//! Browser Transport
//!
//! Runs `ApiRequest`s through `window.fetch`.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{ApiRequest, ApiResponse, Transport};
use crate::error::RequestFailure;

/// `fetch`-backed transport rooted at `base_url`
#[derive(Debug, Clone, Default)]
pub struct FetchTransport {
    base_url: String,
}

impl FetchTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn js_error(e: JsValue) -> RequestFailure {
    let text = e
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| e.as_string())
        .unwrap_or_else(|| format!("{:?}", e));
    RequestFailure::Network(text)
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestFailure> {
        let opts = RequestInit::new();
        opts.set_method(request.method);
        if let Some(body) = &request.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&self.url(&request.path), &opts).map_err(js_error)?;
        for (name, value) in &request.headers {
            js_request.headers().set(name, value).map_err(js_error)?;
        }

        let window = web_sys::window().ok_or_else(|| RequestFailure::Network("no window".into()))?;
        let js_response = JsFuture::from(window.fetch_with_request(&js_request))
            .await
            .map_err(js_error)?;
        let response: Response = js_response.dyn_into().map_err(js_error)?;

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        Ok(ApiResponse {
            status: response.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base() {
        assert_eq!(FetchTransport::new("").url("/add"), "/add");
        assert_eq!(FetchTransport::new("https://todo.example/").url("/complete/4"), "https://todo.example/complete/4");
    }
}
