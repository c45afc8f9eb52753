use crate::app::App;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::fragments::{BuiltinFragments, FragmentSource};
use crate::router::handle;
use crate::templates::html_error_response;
use astra::{Body, Request, Response};
use http::Method;
use scraper::{Html, Selector};
use std::io::Read;

/// App with the built-in catalog and fragments.
pub fn test_app() -> App {
    App::new(Config::default(), Catalog::builtin(), Box::new(BuiltinFragments))
}

pub fn app_with_fragments(fragments: Box<dyn FragmentSource>) -> App {
    App::new(Config::default(), Catalog::builtin(), fragments)
}

pub fn request(method: Method, uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = method;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

/// Runs the request the way `main` does, turning errors into pages.
pub fn send(app: &App, req: Request) -> Response {
    match handle(req, app) {
        Ok(resp) => resp,
        Err(err) => html_error_response(err),
    }
}

pub fn get(app: &App, uri: &str) -> Response {
    send(app, request(Method::GET, uri))
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    String::from_utf8(body_bytes).unwrap()
}

/// GET `uri`, assert 200, and parse the page.
pub fn get_page(app: &App, uri: &str) -> Html {
    let mut resp = get(app, uri);
    assert_eq!(resp.status(), 200, "GET {uri}");
    Html::parse_document(&body_string(&mut resp))
}

pub fn select_all(doc: &Html, selector: &str) -> Vec<String> {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

pub fn count(doc: &Html, selector: &str) -> usize {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel).count()
}

pub fn attr(doc: &Html, selector: &str, name: &str) -> Option<String> {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .next()
        .and_then(|el| el.value().attr(name))
        .map(str::to_string)
}
