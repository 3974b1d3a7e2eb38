//! HTTP API Error Responses Pattern
//!
//! Converting internal errors into RFC 7807 responses, then decoding them on
//! the client side and matching against known problems.
//!
//! Run with: `cargo run --example http_api`

use http::{Method, Response};
use problem_rail::prelude::*;

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    OutOfCredit { balance: u32, cost: u32 },
    Storage(std::io::Error),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ApiError::NotFound(id) => write!(f, "resource {} not found", id),
            ApiError::OutOfCredit { balance, cost } => {
                write!(f, "balance {} is below cost {}", balance, cost)
            },
            ApiError::Storage(e) => write!(f, "storage error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

// Map domain errors to problems
fn to_problem(err: ApiError) -> Problem {
    match err {
        ApiError::NotFound(ref id) => {
            let id = id.clone();
            Problem::of(404).with([detailf!("{}", err), instancef!("/resources/{}", id)])
        },
        ApiError::OutOfCredit { balance, cost } => Problem::new([
            type_uri("https://example.com/probs/out-of-credit"),
            title("You do not have enough credit."),
            status(403),
            detailf!("Your current balance is {}, but that costs {}.", balance, cost),
            custom("balance", balance),
        ]),
        // 5xx: keep the cause for logs, but out of the payload
        ApiError::Storage(e) => Problem::of(500).with([wrap_silent(e)]),
    }
}

fn handle(method: Method, err: ApiError) -> Response<Vec<u8>> {
    let problem = to_problem(err);
    let mut response = Response::new(Vec::new());
    if method == Method::HEAD {
        problem.write_header_to(&mut response);
    } else if let Err(e) = problem.write_to(&mut response) {
        eprintln!("failed to write problem: {}", e);
    }
    response
}

fn main() {
    let response = handle(Method::GET, ApiError::OutOfCredit { balance: 30, cost: 50 });
    println!("Status: {}", response.status());
    println!("Body: {}", String::from_utf8_lossy(response.body()));

    let response = handle(Method::HEAD, ApiError::NotFound("42".into()));
    println!("Status: {}, body length: {}", response.status(), response.body().len());

    let response = handle(
        Method::GET,
        ApiError::Storage(std::io::Error::new(std::io::ErrorKind::Other, "disk full")),
    );
    println!("Body: {}", String::from_utf8_lossy(response.body()));

    // Client side: decode and compare with a known problem
    let known = Problem::of(500);
    match Problem::from_json(response.body()) {
        Ok(decoded) if same_problem(&decoded, &known) => println!("matched known problem"),
        Ok(decoded) => println!("unexpected problem: {}", decoded),
        Err(e) => println!("not a problem payload: {}", e),
    }
}
