//! Example: Tower integration with problem-rail
//!
//! Service errors that convert into a `Problem` are answered with problem
//! responses instead of bubbling up.
//!
//! # Requirements
//!
//! Run with: `cargo run --example tower_layer --features tower`

use http::Response;
use problem_rail::option::detail;
use problem_rail::tower::ProblemLayer;
use problem_rail::Problem;
use tower::{service_fn, ServiceBuilder, ServiceExt};

// =============================================================================
// Domain types and errors
// =============================================================================

#[derive(Debug)]
enum UserError {
    NotFound(u64),
    Banned(u64),
}

impl From<UserError> for Problem {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => Problem::of(404).with([detail(format!("user {id} does not exist"))]),
            UserError::Banned(id) => Problem::of(403).with([detail(format!("user {id} is banned"))]),
        }
    }
}

async fn fetch_user(id: u64) -> Result<Response<Vec<u8>>, UserError> {
    match id {
        1 => Ok(Response::new(br#"{"id":1,"name":"Alice"}"#.to_vec())),
        2 => Err(UserError::Banned(id)),
        _ => Err(UserError::NotFound(id)),
    }
}

#[tokio::main]
async fn main() {
    for (id, layer) in [(1, ProblemLayer::json()), (2, ProblemLayer::json()), (3, ProblemLayer::xml())] {
        let service = ServiceBuilder::new().layer(layer).service(service_fn(fetch_user));
        match service.oneshot(id).await {
            Ok(response) => println!(
                "user {id}: {} {}",
                response.status(),
                String::from_utf8_lossy(response.body())
            ),
            Err(e) => println!("user {id}: unhandled {e:?}"),
        }
    }
}
