use rocket::{
    Request, Response,
    fairing::{Fairing, Info, Kind},
    http::{Header, Status},
    options,
};

/// Permissive cross-origin policy for browser front-ends served from another
/// port during local development.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Permissive CORS",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(
        &self,
        request: &'r Request<'_>,
        response: &mut Response<'r>,
    ) {
        // Credentials are allowed, so the origin is echoed instead of `*`.
        let origin = request.headers().get_one("Origin").unwrap_or("*").to_string();
        let allowed_headers = request
            .headers()
            .get_one("Access-Control-Request-Headers")
            .unwrap_or("*")
            .to_string();

        response.set_header(Header::new("Access-Control-Allow-Origin", origin));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Headers",
            allowed_headers,
        ));
        response.set_header(Header::new(
            "Access-Control-Allow-Credentials",
            "true",
        ));
        response.set_header(Header::new("Vary", "Origin"));
    }
}

#[options("/<_..>")]
pub fn handle_preflight() -> Status {
    Status::NoContent
}
