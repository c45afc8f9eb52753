use astra::Request;
use std::collections::BTreeMap;
use url::form_urlencoded;

/// Decoded query parameters. Ordered so links rebuilt from them are stable.
pub type Params = BTreeMap<String, String>;

pub fn parse_query(req: &Request) -> Params {
    req.uri().query().map(parse_query_str).unwrap_or_default()
}

/// Later duplicates win, matching a single form control per name.
pub fn parse_query_str(query: &str) -> Params {
    form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// `path?k=v&...`, or just `path` when there is nothing to encode.
pub fn href<'a, I>(path: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut ser = form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (k, v) in pairs {
        ser.append_pair(k, v);
        any = true;
    }

    if any {
        format!("{path}?{}", ser.finish())
    } else {
        path.to_string()
    }
}
