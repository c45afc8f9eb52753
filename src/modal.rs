use crate::query::{href, parse_query_str, Params};

/// Query parameters that belong to the modal and are dropped on dismiss.
const MODAL_PARAMS: [&str; 2] = ["modal", "product"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

impl Modal {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Named dialogs opened by the site's buttons. `product` is only read by
    /// `contact`.
    pub fn for_key(key: &str, product: Option<&str>) -> Option<Self> {
        let modal = match key {
            "login" => Modal::new("Login", "Login functionality would be implemented here."),
            "signup" => Modal::new("Sign Up", "Sign up functionality would be implemented here."),
            "get-started" => Modal::new(
                "Get Started",
                "Welcome! Create your account to start selling or buying produce directly.",
            ),
            "create-account" => Modal::new(
                "Create Account",
                "Sign up now to access all features and start connecting with buyers.",
            ),
            "demo" => Modal::new(
                "Schedule Demo",
                "Our team will reach out to schedule a personalized demo for you.",
            ),
            "contact-us" => Modal::new(
                "Contact Us",
                "We'd love to hear from you! Our team will get back to you within 24 hours.",
            ),
            "menu" => Modal::new(
                "Menu",
                "Mobile menu functionality would be implemented here with a sliding drawer navigation.",
            ),
            "contact" => {
                let product = product.map(str::trim).filter(|p| !p.is_empty()).unwrap_or("this product");
                Modal::new(
                    "Contact Seller",
                    format!(
                        "You're interested in {product}. In a full implementation, this would \
                         open a chat or contact form to connect you directly with the farmer."
                    ),
                )
            }
            _ => return None,
        };
        Some(modal)
    }

    /// At most one modal per page: the single `modal` parameter picks it.
    pub fn from_params(params: &Params) -> Option<Self> {
        let key = params.get("modal")?;
        Self::for_key(key, params.get("product").map(String::as_str))
    }
}

/// Link that opens `key` on `path` while keeping the page's other state.
pub fn open_href(path: &str, params: &Params, key: &str, product: Option<&str>) -> String {
    let kept = params
        .iter()
        .filter(|(k, _)| !MODAL_PARAMS.contains(&k.as_str()))
        .map(|(k, v)| (k.as_str(), v.as_str()));
    let extra = std::iter::once(("modal", key)).chain(product.map(|p| ("product", p)));
    href(path, kept.chain(extra))
}

/// The same page with the modal closed.
pub fn dismiss_href(path: &str, params: &Params) -> String {
    href(
        path,
        params
            .iter()
            .filter(|(k, _)| !MODAL_PARAMS.contains(&k.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str())),
    )
}

/// Rewrites the bare `?modal=` links of shared markup (header, footer) into
/// `open_href` links, so opening a modal from them keeps the page's state.
pub fn carry_page_state(markup: &str, path: &str, params: &Params) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;

    while let Some(at) = rest.find("href=") {
        let inner = at + "href=".len() + 1;
        let quote = match rest[at + "href=".len()..].chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => {
                out.push_str(&rest[..inner - 1]);
                rest = &rest[inner - 1..];
                continue;
            }
        };
        let Some(len) = rest[inner..].find(quote) else {
            break;
        };
        let link = &rest[inner..inner + len];
        out.push_str(&rest[..inner]);

        let opened = link
            .strip_prefix('?')
            .map(|query| parse_query_str(&query.replace("&amp;", "&")))
            .and_then(|linked| {
                let key = linked.get("modal")?;
                let product = linked.get("product").map(String::as_str);
                Some(open_href(path, params, key, product).replace('&', "&amp;"))
            });
        out.push_str(opened.as_deref().unwrap_or(link));
        rest = &rest[inner + len..];
    }

    out.push_str(rest);
    out
}
