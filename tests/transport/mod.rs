use std::io;

use http::header::CONTENT_TYPE;
use http::{Response, StatusCode};
use problem_rail::option::{custom, detail, instance, status, title, type_uri};
use problem_rail::{Problem, ResponseSink, CONTENT_TYPE_JSON, CONTENT_TYPE_XML};

fn not_found() -> Problem {
    let mut p = Problem::new([title("titlestring"), status(404), custom("x", "value")]);
    p.append([detail("some more details"), instance("https://example.com/details")]);
    p.append([type_uri("https://example.com/404")]);
    p
}

#[test]
fn write_to_sets_status_content_type_and_body() {
    let mut response = Response::new(Vec::new());
    let written = not_found().write_to(&mut response).unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_JSON);
    assert_eq!(written, response.body().len());
    assert_eq!(
        response.body(),
        br#"{"detail":"some more details","instance":"https://example.com/details","status":404,"title":"titlestring","type":"https://example.com/404","x":"value"}"#
    );
}

#[test]
fn write_header_to_writes_no_body() {
    let mut response = Response::new(Vec::new());
    not_found().write_header_to(&mut response);

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_JSON);
    assert!(response.body().is_empty());
}

#[test]
fn write_xml_to_sets_status_content_type_and_body() {
    let p = Problem::new([status(404), type_uri("https://example.com/404")]);
    let mut response = Response::new(Vec::new());
    p.write_xml_to(&mut response).unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_XML);
    assert_eq!(
        response.body(),
        br#"<problem xmlns="urn:ietf:rfc:7807"><status>404</status><type>https://example.com/404</type></problem>"#
    );
}

#[test]
fn write_xml_header_to_writes_no_body() {
    let mut response = Response::new(Vec::new());
    Problem::of(410).write_xml_header_to(&mut response);

    assert_eq!(response.status(), StatusCode::GONE);
    assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_XML);
    assert!(response.body().is_empty());
}

#[test]
fn missing_status_keeps_sink_default() {
    let mut response = Response::new(Vec::new());
    Problem::new([title("no status")]).write_to(&mut response).unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], CONTENT_TYPE_JSON);
}

#[test]
fn non_integer_status_fails_open() {
    let mut response = Response::new(Vec::new());
    *response.status_mut() = StatusCode::ACCEPTED;
    Problem::new([custom("status", "404")]).write_to(&mut response).unwrap();

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(response.body(), br#"{"status":"404"}"#);
}

#[test]
fn response_builders() {
    let json: Response<Vec<u8>> = Problem::of(429).json_response().unwrap();
    assert_eq!(json.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json.headers()[CONTENT_TYPE], CONTENT_TYPE_JSON);

    let xml: Response<String> = Problem::of(429)
        .xml_response::<Vec<u8>>()
        .unwrap()
        .map(|body| String::from_utf8(body).unwrap());
    assert_eq!(xml.headers()[CONTENT_TYPE], CONTENT_TYPE_XML);
    assert!(xml.body().contains("<title>Too Many Requests</title>"));
}

/// A sink that records calls, standing in for a framework response writer.
#[derive(Default)]
struct Recorder {
    content_type: Option<&'static str>,
    status: Option<StatusCode>,
    body: Vec<u8>,
    fail: bool,
}

impl ResponseSink for Recorder {
    fn set_content_type(&mut self, content_type: &'static str) {
        self.content_type = Some(content_type);
    }

    fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    fn write_body(&mut self, body: &[u8]) -> io::Result<usize> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "client went away"));
        }
        self.body.extend_from_slice(body);
        Ok(body.len())
    }
}

#[test]
fn custom_sink_receives_head_then_body() {
    let mut sink = Recorder::default();
    Problem::of(404).write_to(&mut sink).unwrap();

    assert_eq!(sink.content_type, Some(CONTENT_TYPE_JSON));
    assert_eq!(sink.status, Some(StatusCode::NOT_FOUND));
    assert_eq!(sink.body, br#"{"status":404,"title":"Not Found"}"#);
}

#[test]
fn sink_errors_are_returned() {
    let mut sink = Recorder { fail: true, ..Recorder::default() };
    let err = Problem::of(500).write_to(&mut sink).unwrap_err();
    assert!(matches!(err, problem_rail::CodecError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}

#[test]
fn dyn_sink_is_supported() {
    let mut sink = Recorder::default();
    let dyn_sink: &mut dyn ResponseSink = &mut sink;
    Problem::of(400).write_xml_header_to(dyn_sink);
    assert_eq!(sink.status, Some(StatusCode::BAD_REQUEST));
    assert!(sink.body.is_empty());
}
