// src/handlers/cors.rs
// DOCUMENTATION: Cross-origin policy for the HTTP API
// PURPOSE: Let the browser UI, served from its own origin, call the routes

use actix_cors::Cors;
use actix_web::http::header;

/// Build the CORS middleware for one allowed origin
/// DOCUMENTATION: "*" allows any origin. Only GET is exposed, preflight
/// requests are answered by the middleware itself.
pub fn cors(allowed_origin: &str) -> Cors {
    let cors = if allowed_origin == "*" {
        Cors::default().allow_any_origin()
    } else {
        Cors::default().allowed_origin(allowed_origin)
    };

    cors.allowed_methods(vec!["GET"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
