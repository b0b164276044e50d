use crate::config::Config;
use crate::geo::Geo;
use crate::i18n::Localization;
use crate::sender::MessageSender;

use hyper::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use hyper::{Body, Request, Response, StatusCode};
use std::net::IpAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(r#"Internal server error: "{0:?}""#)]
    InternalServerError(#[from] hyper::http::Error),
}

pub struct GreetingService {
    response_headers: HeaderMap,
    sender: MessageSender<Geo, Localization>,
}

impl GreetingService {
    pub fn from_config(config: Config) -> Self {
        let Config {
            ip_headers,
            ip_headers_recursive,
            response_headers,
            geo,
            localization,
            ..
        } = config;

        let sender =
            MessageSender::new(geo, localization).with_ip_headers(ip_headers, ip_headers_recursive);

        Self {
            response_headers,
            sender,
        }
    }

    pub fn greeting(&self, request: &Request<Body>) -> &str {
        self.sender.send(request.headers())
    }

    pub fn response(&self, request: &Request<Body>) -> Result<Response<Body>, ServiceError> {
        let greeting = self.greeting(request).to_owned();
        let mut response_builder = Response::builder().status(StatusCode::OK).header(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        if let Some(headers) = response_builder.headers_mut() {
            for (name, value) in &self.response_headers {
                headers.insert(name, value.clone());
            }
        }
        Ok(response_builder.body(greeting.into())?)
    }
}

pub fn make_error_response(error: ServiceError) -> Response<Body> {
    let status = match error {
        ServiceError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let mut response = Response::new(Body::from(format!("{error:?}")));
    *response.status_mut() = status;
    response
}

pub fn log_response(socket_ip_addr: IpAddr, request: &Request<Body>, response: &Response<Body>) {
    log::info!(
        "{} {} {} {}",
        socket_ip_addr,
        request.method(),
        request.uri(),
        response.status(),
    );
}
