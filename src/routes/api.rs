use actix_web::http::StatusCode;
use actix_web::http::header::CACHE_CONTROL;
use actix_web::middleware::DefaultHeaders;
use actix_web::{HttpRequest, HttpResponse, Responder, get, routes, web};
use chrono::Utc;
use serde::Serialize;
use tera::{Context, Tera};

use crate::API_VERSION;
use crate::domain::resource::to_iso8601;
use crate::forms::catalog::ToolsApiQuery;
use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::ServiceError;
use crate::services::tools::{load_stats, load_tags_overview, load_tools};

const TOOLS_CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=600";
const TAGS_CACHE_CONTROL: &str = "public, s-maxage=600";
const STATS_CACHE_CONTROL: &str = "public, s-maxage=3600";

#[derive(Debug, Serialize)]
struct ApiMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    total: Option<usize>,
    timestamp: String,
    version: &'static str,
}

impl ApiMeta {
    fn now(total: Option<usize>) -> Self {
        Self {
            total,
            timestamp: to_iso8601(&Utc::now().naive_utc()),
            version: API_VERSION,
        }
    }
}

#[derive(Debug, Serialize)]
struct ApiSuccess<T> {
    success: bool,
    data: T,
    meta: ApiMeta,
}

#[derive(Debug, Serialize)]
struct ApiFailure {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn success<T: Serialize>(data: T, total: Option<usize>, cache_control: &str) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((CACHE_CONTROL, cache_control))
        .json(ApiSuccess {
            success: true,
            data,
            meta: ApiMeta::now(total),
        })
}

/// Map a service failure onto the error envelope. `context` names the
/// operation in logs and in the 500 message.
fn failure(err: ServiceError, context: &str) -> HttpResponse {
    match err {
        ServiceError::Form(message) => {
            log::warn!("Rejected {context} request: {message}");
            HttpResponse::build(StatusCode::BAD_REQUEST).json(ApiFailure {
                success: false,
                error: "Invalid query parameters".to_string(),
                message: Some(message),
            })
        }
        ServiceError::StoreUnavailable(message) => {
            log::error!("Failed to fetch {context}: {message}");
            HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR).json(ApiFailure {
                success: false,
                error: format!("Failed to fetch {context}"),
                message: Some("Please try again later.".to_string()),
            })
        }
    }
}

/// Register the `/api` scope. Every response under it carries the CORS headers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(
                DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Methods", "GET, OPTIONS"))
                    .add(("Access-Control-Allow-Headers", "Content-Type")),
            )
            .service(api_tools)
            .service(api_tool_tags)
            .service(api_tool_stats)
            .service(api_preflight)
            .service(show_api_docs),
    );
}

#[get("/tools")]
/// Filtered tool catalog in `full` or `compact` shape.
pub async fn api_tools(req: HttpRequest, repo: web::Data<DieselRepository>) -> impl Responder {
    let params = match ToolsApiQuery::parse(req.query_string()) {
        Ok(params) => params,
        Err(err) => return failure(ServiceError::Form(err.to_string()), "tools catalog"),
    };

    match load_tools(repo.into_inner(), params).await {
        Ok(data) => {
            let total = data.tools.len();
            success(data, Some(total), TOOLS_CACHE_CONTROL)
        }
        Err(err) => failure(err, "tools catalog"),
    }
}

#[get("/tools/tags")]
/// Every tag with the number of tools carrying it.
pub async fn api_tool_tags(repo: web::Data<DieselRepository>) -> impl Responder {
    match load_tags_overview(repo.into_inner()).await {
        Ok(data) => success(data, None, TAGS_CACHE_CONTROL),
        Err(err) => failure(err, "tags"),
    }
}

#[get("/tools/stats")]
/// Aggregate statistics over the whole catalog.
pub async fn api_tool_stats(repo: web::Data<DieselRepository>) -> impl Responder {
    match load_stats(repo.into_inner(), Utc::now().naive_utc()).await {
        Ok(data) => success(data, None, STATS_CACHE_CONTROL),
        Err(err) => failure(err, "statistics"),
    }
}

/// CORS preflight; the headers come from the scope middleware.
#[routes]
#[options("/tools")]
#[options("/tools/tags")]
#[options("/tools/stats")]
pub async fn api_preflight() -> impl Responder {
    HttpResponse::Ok().finish()
}

#[get("/docs")]
pub async fn show_api_docs(tera: web::Data<Tera>) -> impl Responder {
    let mut context = Context::new();
    context.insert("version", API_VERSION);
    context.insert("tools_cache_control", TOOLS_CACHE_CONTROL);
    context.insert("tags_cache_control", TAGS_CACHE_CONTROL);
    context.insert("stats_cache_control", STATS_CACHE_CONTROL);
    render_template(&tera, "api/docs.html", &context)
}
