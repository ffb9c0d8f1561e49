use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_status(200, markup)
}

pub fn html_response_with_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// Bundled static file with a long cache lifetime.
pub fn text_asset(content_type: mime::Mime, body: &'static str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=86400")
        .body(Body::from(body.to_string()))
        .map_err(|_| ServerError::InternalError)
}

/// 303 so the browser follows up with a GET.
pub fn redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
