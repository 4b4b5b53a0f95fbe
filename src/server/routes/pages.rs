//! Page endpoints
//!
//! The index is a gated page computation: anonymous or unprivileged visitors
//! get a 401 with an empty listing instead of an error body.

use crate::auth::rbac::{Action, Permission, RbacPolicy};
use crate::auth::{InitialProps, PublicUser, RequestContext, SessionState, with_rbac};
use crate::core::pages::{PAGE_RESOURCE, Page};
use crate::server::AppState;
use crate::utils::error::GateError;
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A page as shown to the acting user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageView {
    pub index: usize,
    pub title: String,
    pub owner: String,
    /// Whether the acting user may retitle the page
    pub can_write: bool,
}

impl PageView {
    fn new(index: usize, page: Page, policy: &RbacPolicy, user: Option<&PublicUser>) -> Self {
        let can_write = policy.check_owned(user, Action::Update, PAGE_RESOURCE, &page.owner);
        Self {
            index,
            title: page.title,
            owner: page.owner,
            can_write,
        }
    }
}

/// Index page view model
#[derive(Debug, Serialize)]
pub struct IndexPage {
    pub granted: bool,
    pub state: SessionState,
    pub pages: Vec<PageView>,
}

/// Page retitle request
#[derive(Debug, Deserialize)]
pub struct TitleRequest {
    pub title: String,
}

/// Gated page index
pub async fn list_pages(
    state: web::Data<AppState>,
    ctx: RequestContext,
) -> ActixResult<HttpResponse> {
    let policy = state.rbac.as_ref();
    let catalog = state.pages.as_ref();

    let gate = with_rbac(
        |user: Option<&PublicUser>| {
            policy.check_grant(user, Permission::any(Action::Read), PAGE_RESOURCE)
        },
        |props: InitialProps| async move {
            if !props.granted {
                debug!("Skipping page listing for denied request");
                return Ok(IndexPage {
                    granted: false,
                    state: props.state,
                    pages: Vec::new(),
                });
            }

            let user = props.state.user.clone();
            let pages = catalog
                .list()
                .into_iter()
                .enumerate()
                .map(|(index, page)| PageView::new(index, page, policy, user.as_ref()))
                .collect();

            Ok(IndexPage {
                granted: true,
                state: props.state,
                pages,
            })
        },
    );

    let response = gate.serve(&state.auth, &ctx).await?;
    let mut page = response.props;
    page.granted = response.granted;
    if !page.granted {
        page.pages.clear();
    }

    Ok(HttpResponse::build(response.status).json(page))
}

/// Retitle a page
///
/// Users may only retitle their own pages unless granted `update:any`.
pub async fn update_page(
    state: web::Data<AppState>,
    ctx: RequestContext,
    path: web::Path<usize>,
    request: web::Json<TitleRequest>,
) -> ActixResult<HttpResponse> {
    let index = path.into_inner();
    let page = state.pages.get(index)?;
    let user = ctx.user.as_ref();

    if !state
        .rbac
        .check_owned(user, Action::Update, PAGE_RESOURCE, &page.owner)
    {
        return Err(GateError::permission_denied(format!(
            "update on page {} owned by {}",
            index, page.owner
        ))
        .into());
    }

    let page = state.pages.retitle(index, request.into_inner().title)?;
    info!(index, title = %page.title, "Page retitled");

    Ok(HttpResponse::Ok().json(PageView::new(index, page, &state.rbac, user)))
}
