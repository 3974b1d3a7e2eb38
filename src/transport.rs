//! Writing problems to HTTP responses.
//!
//! The helpers set `Content-Type` to the format's media type and, when the
//! problem carries an integer `status` that is a valid HTTP status code, the
//! response status. A missing or unusable `status` is not an error: the sink
//! keeps whatever status it already had (usually `200 OK`).
//!
//! # Examples
//!
//! ```
//! use http::{header, Response, StatusCode};
//! use problem_rail::{Problem, CONTENT_TYPE_JSON};
//!
//! let mut response = Response::new(Vec::new());
//! Problem::of(404).write_to(&mut response).unwrap();
//!
//! assert_eq!(response.status(), StatusCode::NOT_FOUND);
//! assert_eq!(response.headers()[header::CONTENT_TYPE], CONTENT_TYPE_JSON);
//! assert_eq!(response.body(), br#"{"status":404,"title":"Not Found"}"#);
//! ```

use std::io;

use http::header::{HeaderValue, CONTENT_TYPE};
use http::{Response, StatusCode};

use crate::codec::Format;
use crate::error::CodecError;
use crate::types::Problem;

/// Destination of an encoded problem.
pub trait ResponseSink {
    /// Sets the `Content-Type` header, replacing any previous value.
    fn set_content_type(&mut self, content_type: &'static str);

    /// Sets the response status.
    fn set_status(&mut self, status: StatusCode);

    /// Appends `body` to the response body and returns the number of bytes written.
    fn write_body(&mut self, body: &[u8]) -> io::Result<usize>;
}

impl ResponseSink for Response<Vec<u8>> {
    fn set_content_type(&mut self, content_type: &'static str) {
        self.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<usize> {
        self.body_mut().extend_from_slice(body);
        Ok(body.len())
    }
}

impl Problem {
    /// Returns `status` as an HTTP status code, if it is an integer in range.
    pub fn http_status(&self) -> Option<StatusCode> {
        let code = u16::try_from(self.status()?).ok()?;
        StatusCode::from_u16(code).ok()
    }

    /// Writes the JSON problem with its content type and status.
    pub fn write_to<S>(&self, sink: &mut S) -> Result<usize, CodecError>
    where
        S: ResponseSink + ?Sized,
    {
        self.write_body_to(sink, Format::Json)
    }

    /// Writes the XML problem with its content type and status.
    pub fn write_xml_to<S>(&self, sink: &mut S) -> Result<usize, CodecError>
    where
        S: ResponseSink + ?Sized,
    {
        self.write_body_to(sink, Format::Xml)
    }

    /// Sets the JSON content type and status without writing a body,
    /// e.g. to answer a `HEAD` request.
    pub fn write_header_to<S>(&self, sink: &mut S)
    where
        S: ResponseSink + ?Sized,
    {
        self.write_head(sink, Format::Json);
    }

    /// XML counterpart of [`write_header_to`](Self::write_header_to).
    pub fn write_xml_header_to<S>(&self, sink: &mut S)
    where
        S: ResponseSink + ?Sized,
    {
        self.write_head(sink, Format::Xml);
    }

    /// Builds a complete response in the given format.
    pub fn to_response<B>(&self, format: Format) -> Result<Response<B>, CodecError>
    where
        B: From<Vec<u8>>,
    {
        let mut response = Response::new(Vec::new());
        self.write_body_to(&mut response, format)?;
        Ok(response.map(B::from))
    }

    /// Builds an `application/problem+json` response.
    #[inline]
    pub fn json_response<B>(&self) -> Result<Response<B>, CodecError>
    where
        B: From<Vec<u8>>,
    {
        self.to_response(Format::Json)
    }

    /// Builds an `application/problem+xml` response.
    #[inline]
    pub fn xml_response<B>(&self) -> Result<Response<B>, CodecError>
    where
        B: From<Vec<u8>>,
    {
        self.to_response(Format::Xml)
    }

    fn write_body_to<S>(&self, sink: &mut S, format: Format) -> Result<usize, CodecError>
    where
        S: ResponseSink + ?Sized,
    {
        // encode first so a failure leaves the sink untouched
        let body = match format {
            Format::Json => self.to_json()?,
            Format::Xml => self.to_xml()?,
        };
        self.write_head(sink, format);
        Ok(sink.write_body(&body)?)
    }

    fn write_head<S>(&self, sink: &mut S, format: Format)
    where
        S: ResponseSink + ?Sized,
    {
        sink.set_content_type(format.content_type());
        if let Some(status) = self.http_status() {
            sink.set_status(status);
            return;
        }
        #[cfg(feature = "tracing")]
        {
            if let Some(status) = self.get(crate::option::STATUS) {
                tracing::debug!(%status, "problem status is not a valid HTTP status, keeping default");
            }
        }
    }
}

/// Axum integration: a problem is a JSON problem response.
#[cfg(feature = "axum")]
impl axum::response::IntoResponse for Problem {
    fn into_response(self) -> axum::response::Response {
        match self.json_response::<axum::body::Body>() {
            Ok(response) => response,
            Err(_) => {
                axum::response::IntoResponse::into_response(StatusCode::INTERNAL_SERVER_ERROR)
            },
        }
    }
}
