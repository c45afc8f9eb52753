use crate::app::App;
use crate::catalog::{recompute, Shipment, ViewState};
use crate::errors::ServerError;
use crate::fragments::{self, FragmentError, FOOTER_PATH, HEADER_PATH};
use crate::modal::{dismiss_href, Modal};
use crate::query::{parse_query, Params};
use crate::responses::{
    asset_response, content_type_for, html_response, json_response, ResultResp,
};
use crate::templates::components::present;
use crate::templates::pages::{
    about_page, home_page, marketplace_page, tracking_page, MarketplaceVm,
};
use crate::templates::site_layout;
use crate::tracking::{track, TrackingOutcome};
use astra::Request;
use maud::{Markup, PreEscaped};
use serde::Serialize;

const MAIN_CSS: &str = include_str!("../static/main.css");
const PKG_PREFIX: &str = "/static/pkg/";

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    tracing::debug!(method, path, "request");

    if method != "GET" {
        return Err(ServerError::MethodNotAllowed);
    }

    let params = parse_query(&req);

    match path {
        "/" | "/index.html" => page(
            app,
            path,
            &params,
            "Home",
            home_page(app.catalog(), path, &params),
        ),
        "/marketplace.html" => marketplace(app, path, &params),
        "/tracking.html" => tracking(app, path, &params),
        "/about.html" => page(app, path, &params, "About", about_page(path, &params)),

        // Raw shared fragments
        "/header.html" => fragment(app, HEADER_PATH),
        "/footer.html" => fragment(app, FOOTER_PATH),

        "/api/products" => {
            let state = ViewState::from_params(&params);
            json_response(200, &recompute(app.catalog(), &state))
        }
        "/api/track" => api_track(app, &params),

        "/static/main.css" => asset_response(
            MAIN_CSS.as_bytes().to_vec(),
            mime::TEXT_CSS_UTF_8.as_ref(),
            if_none_match(&req),
        ),
        other => match other.strip_prefix(PKG_PREFIX) {
            Some(name) => pkg_file(app, name, if_none_match(&req)),
            None => Err(ServerError::NotFound),
        },
    }
}

/// Header and footer around `content`, plus the requested modal if any.
fn page(app: &App, path: &str, params: &Params, title: &str, content: Markup) -> ResultResp {
    let chrome = fragments::compose(app.fragments(), path, params);
    let modal = Modal::from_params(params).map(|m| present(&m, &dismiss_href(path, params)));

    html_response(site_layout(title, chrome, modal, content))
}

fn marketplace(app: &App, path: &str, params: &Params) -> ResultResp {
    let state = ViewState::from_params(params);
    let products = recompute(app.catalog(), &state);

    let vm = MarketplaceVm {
        path,
        params,
        state: &state,
        products: &products,
    };
    page(app, path, params, "Marketplace", marketplace_page(&vm))
}

fn tracking(app: &App, path: &str, params: &Params) -> ResultResp {
    let input = params.get("id").map(|s| s.trim()).unwrap_or("");
    let outcome = track(app.catalog(), input);

    page(
        app,
        path,
        params,
        "Track Shipment",
        tracking_page(app.catalog(), path, input, &outcome),
    )
}

fn fragment(app: &App, name: &str) -> ResultResp {
    match app.fragments().fetch(name) {
        Ok(text) => html_response(PreEscaped(text)),
        Err(FragmentError::Unknown(_)) => Err(ServerError::NotFound),
        Err(FragmentError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(ServerError::NotFound)
        }
        Err(FragmentError::Read { source, .. }) => Err(ServerError::Io(source)),
    }
}

#[derive(Serialize)]
struct TrackedShipment<'a> {
    id: &'a str,
    #[serde(flatten)]
    shipment: &'a Shipment,
}

fn api_track(app: &App, params: &Params) -> ResultResp {
    let input = params.get("id").map(String::as_str).unwrap_or("");

    match track(app.catalog(), input) {
        TrackingOutcome::Found { id, shipment } => {
            json_response(200, &TrackedShipment { id: &id, shipment })
        }
        TrackingOutcome::NotFound { .. } => {
            json_response(404, &serde_json::json!({ "error": "not found" }))
        }
        TrackingOutcome::Empty => Err(ServerError::BadRequest("missing tracking id".into())),
    }
}

fn pkg_file(app: &App, name: &str, if_none_match: Option<&str>) -> ResultResp {
    if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
        return Err(ServerError::NotFound);
    }

    let body = std::fs::read(app.config().pkg_dir.join(name)).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ServerError::NotFound,
        _ => ServerError::Io(e),
    })?;

    asset_response(body, content_type_for(name).as_ref(), if_none_match)
}

fn if_none_match(req: &Request) -> Option<&str> {
    req.headers()
        .get("If-None-Match")
        .and_then(|v| v.to_str().ok())
}
