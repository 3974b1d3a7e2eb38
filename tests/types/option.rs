use std::io;
use std::sync::Arc;

use problem_rail::option::{self, custom, detail, title, wrap, wrap_shared, wrap_silent};
use problem_rail::{detailf, instancef, titlef, Cause, Problem, ProblemOption, Value};

#[test]
fn titlef_formats_title() {
    let p = Problem::new([titlef!("this is a {}", "test")]);
    assert_eq!(p.json_string(), r#"{"title":"this is a test"}"#);
}

#[test]
fn detailf_formats_detail() {
    let p = Problem::new([detailf!("this is a {}", "test")]);
    assert_eq!(p.json_string(), r#"{"detail":"this is a test"}"#);
}

#[test]
fn instancef_formats_instance() {
    let p = Problem::new([instancef!("this is a {}", "test")]);
    assert_eq!(p.json_string(), r#"{"instance":"this is a test"}"#);
}

#[test]
fn custom_accepts_any_json_value() {
    let p = Problem::new([
        custom("balance", 30),
        custom("ratio", 0.5),
        custom("accounts", serde_json::json!(["/account/12345", "/account/67890"])),
        custom("retry", true),
    ]);

    assert_eq!(p.get("balance"), Some(&Value::Int(30)));
    assert_eq!(
        p.json_string(),
        r#"{"accounts":["/account/12345","/account/67890"],"balance":30,"ratio":0.5,"retry":true}"#
    );
}

#[test]
fn wrap_sets_reason_and_cause_together() {
    let p = Problem::new([wrap(io::Error::other("disk full")), title("t")]);
    assert_eq!(p.reason(), Some("disk full"));
    assert_eq!(p.cause().map(|c| c.to_string()), Some("disk full".to_string()));
}

#[test]
fn wrap_silent_sets_only_cause() {
    let p = Problem::new([wrap_silent(io::Error::other("disk full")), title("t")]);
    assert_eq!(p.reason(), None);
    assert!(p.cause().is_some());
    assert_eq!(p.json_string(), r#"{"title":"t"}"#);
}

#[test]
fn shared_cause_backs_several_problems() {
    let cause: Cause = Arc::new(io::Error::other("upstream timeout"));
    let a = Problem::new([wrap_shared(Arc::clone(&cause)), title("a")]);
    let b = Problem::new([option::wrap_silent_shared(Arc::clone(&cause)), title("b")]);

    assert!(Arc::ptr_eq(a.shared_cause().unwrap(), &cause));
    assert!(Arc::ptr_eq(b.shared_cause().unwrap(), &cause));
    assert_eq!(Arc::strong_count(&cause), 3);
}

#[test]
fn options_apply_explicitly() {
    let mut p = Problem::default();
    ProblemOption::Detail("applied".to_string()).apply(&mut p);
    detail("again").apply(&mut p);
    assert_eq!(p.detail(), Some("again"));
}
