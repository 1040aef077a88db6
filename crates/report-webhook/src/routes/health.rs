//! Greeting endpoints used as liveness checks.

/// Greeting for the web-server process.
pub async fn hello() -> &'static str {
    "Hello World!"
}

/// Greeting for `GET` on the function route.
pub async fn function_hello() -> &'static str {
    "Hello, World!"
}
