//! Current user endpoint

use crate::auth::RequestContext;
use crate::utils::error::GateError;
use actix_web::{HttpResponse, Result as ActixResult};
use tracing::debug;

/// Get current user endpoint
pub async fn get_current_user(ctx: RequestContext) -> ActixResult<HttpResponse> {
    debug!("Get current user request");

    let user = ctx
        .user
        .ok_or_else(|| GateError::unauthorized("Valid session required"))?;

    Ok(HttpResponse::Ok().json(user))
}
