use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::{HttpRequest, Responder, routes, web};
use tera::{Context, Tera};

use crate::domain::view_state::{LAYOUT_PREFERENCE_KEY, Layout};
use crate::forms::catalog::CatalogPageQuery;
use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::tools_page::load_catalog_page;

#[routes]
#[get("/")]
#[get("/tools")]
pub async fn show_tools(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = CatalogPageQuery::parse(req.query_string()).unwrap_or_else(|err| {
        log::warn!("Ignoring invalid catalog query: {err}");
        CatalogPageQuery::default()
    });
    let preference = req
        .cookie(LAYOUT_PREFERENCE_KEY)
        .map(|cookie| cookie.value().to_string());

    let (state, requested) = params.into_view_state(preference.as_deref());
    let data = load_catalog_page(repo.into_inner(), state).await;

    let mut context = Context::new();
    context.insert("page", &data);
    context.insert("api_docs_href", "/api/docs");
    let mut response = render_template(&tera, "tools/index.html", &context);

    if let Some(layout) = requested
        && response.status().is_success()
        && let Err(err) = response.add_cookie(&layout_cookie(layout))
    {
        log::warn!("Failed to persist layout preference: {err}");
    }

    response
}

fn layout_cookie(layout: Layout) -> Cookie<'static> {
    Cookie::build(LAYOUT_PREFERENCE_KEY, layout.as_str())
        .path("/")
        .max_age(Duration::days(365))
        .same_site(SameSite::Lax)
        .finish()
}
