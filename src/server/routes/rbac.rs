//! Permission probe endpoint

use actix_web::HttpResponse;
use serde_json::json;

/// Reachable only with `read:any` on pages
pub async fn rbac_probe() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "foo": "bar" }))
}
