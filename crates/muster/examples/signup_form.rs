//! Validates a few signup payloads and prints every error.
//!
//! Run with `RUST_LOG=muster=trace` to see schema construction and
//! evaluation events.

use muster::prelude::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let address = Schema::builder()
        .must_have_keys(["city", "country"])
        .may_have_keys(["street"])
        .key("country").must_have_exact_length(2)
        .build();

    let schema = Schema::builder()
        .must_have_keys(["username", "email", "password"])
        .may_have_keys(["birthyear", "address", "signed_up_at"])
        .key("username").must_match("^[a-z0-9_]+$")?
        .key("email").must_be_an_email_address()
        .key("password").must_have_length(">=", 8)?
        .key("birthyear").must_be_greater_than(1900)
        .key("address").must_pass_muster(address)
        .key("signed_up_at").must_be_a_date_string()
        .must_pass("password must not contain the username", |doc| {
            match (doc["username"].as_str(), doc["password"].as_str()) {
                (Some(user), Some(password)) => !password.contains(user),
                _ => true,
            }
        })
        .build();

    let payloads = [
        json!({
            "username": "joe_strummer",
            "email": "joe@clash.example",
            "password": "london calling",
            "address": {"city": "London", "country": "GB"},
            "signed_up_at": "1977-04-08T12:00:00Z"
        }),
        json!({
            "username": "Mick Jones",
            "email": "mick",
            "password": "short",
            "birthyear": 1855,
            "address": {"city": "London"},
            "band": "The Clash"
        }),
        json!({"username": "paul", "email": "paul@clash.example", "password": "paulsimonon"}),
    ];

    for payload in &payloads {
        match schema.check_all(payload) {
            Ok(()) => println!("ok: {payload}"),
            Err(errors) => print!("{errors}"),
        }
    }
    Ok(())
}
