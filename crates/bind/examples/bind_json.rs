use bytes::Bytes;
use http::{Method, Request};
use micro_bind::decode::FormDecoder;
use micro_bind::{Binder, PayloadBinder};
use serde::Deserialize;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Deserialize, Debug, Default)]
#[allow(dead_code, reason = "printed with Debug")]
pub struct User {
    name: String,
    zip: String,
}

fn request(method: Method, content_type: &str, body: &'static str) -> Request<Bytes> {
    Request::builder()
        .method(method)
        .header(http::header::CONTENT_TYPE, content_type)
        .body(Bytes::from_static(body.as_bytes()))
        .expect("request should be valid")
}

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let binder = PayloadBinder::new().register(mime::APPLICATION_WWW_FORM_URLENCODED.essence_str(), FormDecoder);

    let requests = [
        request(Method::POST, "application/json", r#"{"name":"hello","zip":"world"}"#),
        request(Method::POST, "application/x-www-form-urlencoded", "name=hello&zip=world"),
        request(Method::GET, "application/json", ""),
        request(Method::POST, "application/json", ""),
        request(Method::POST, "text/plain", "name=hello"),
        request(Method::PUT, "application/json", r#"{"name":"hello","zip":}"#),
        request(Method::PUT, "application/json", r#"{"name":"hello","zip":10001}"#),
        request(Method::PATCH, "application/json", r#"{"name":"hello"}"#),
    ];

    for request in &requests {
        let mut user = User::default();
        match binder.bind(&mut user, request) {
            Ok(()) => info!(method = %request.method(), ?user, "bound request payload"),
            Err(e) => {
                let response = e.into_response();
                warn!(method = %request.method(), status = %response.status(), "rejected request payload");
            }
        }
    }
}
