use std::ops::Range;

/// Page file name -> id of its link in the header.
const PAGE_NAV: [(&str, &str); 4] = [
    ("index.html", "nav-home"),
    ("marketplace.html", "nav-marketplace"),
    ("tracking.html", "nav-tracking"),
    ("about.html", "nav-about"),
];

const HOME_NAV: &str = "nav-home";

/// Last path segment, with `index.html` for an empty one.
pub fn page_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => "index.html",
    }
}

pub fn nav_id_for_path(path: &str) -> &'static str {
    let page = page_name(path);
    PAGE_NAV
        .iter()
        .find(|(name, _)| *name == page)
        .map_or(HOME_NAV, |&(_, id)| id)
}

/// Adds the `active` class to the element whose `id` attribute is `nav_id`.
/// Markup without such an element is returned unchanged.
pub fn highlight(markup: &str, nav_id: &str) -> String {
    let mut pos = 0;
    while let Some(offset) = markup[pos..].find('<') {
        let start = pos + offset;
        if !markup[start + 1..].starts_with(|c: char| c.is_ascii_alphabetic()) {
            pos = start + 1;
            continue;
        }

        let tag = scan_tag(markup, start);
        let is_target = tag
            .attr(markup, "id")
            .and_then(|attr| attr.value.as_ref())
            .is_some_and(|value| &markup[value.text.clone()] == nav_id);
        if is_target {
            return add_active(markup, &tag);
        }
        pos = tag.end;
    }
    markup.to_string()
}

struct Tag {
    attrs: Vec<Attr>,
    /// Byte offset just past the closing `>`.
    end: usize,
}

struct Attr {
    name: Range<usize>,
    value: Option<AttrValue>,
}

struct AttrValue {
    /// Value text without its quotes.
    text: Range<usize>,
    quoted: bool,
}

impl Tag {
    fn attr(&self, markup: &str, name: &str) -> Option<&Attr> {
        self.attrs
            .iter()
            .find(|attr| markup[attr.name.clone()].eq_ignore_ascii_case(name))
    }
}

/// Splits the tag opening at `start` into attributes. Quoted values may
/// contain `>` and whitespace.
fn scan_tag(markup: &str, start: usize) -> Tag {
    let bytes = markup.as_bytes();
    let len = bytes.len();
    let skip_ws = |mut i: usize| {
        while i < len && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        i
    };

    let mut i = start + 1;
    while i < len && !bytes[i].is_ascii_whitespace() && !matches!(bytes[i], b'>' | b'/') {
        i += 1;
    }

    let mut attrs = Vec::new();
    loop {
        while i < len && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        if i >= len {
            return Tag { attrs, end: len };
        }
        if bytes[i] == b'>' {
            return Tag { attrs, end: i + 1 };
        }

        let name_start = i;
        while i < len && !bytes[i].is_ascii_whitespace() && !matches!(bytes[i], b'=' | b'>' | b'/') {
            i += 1;
        }
        let name = name_start..i;

        let eq = skip_ws(i);
        if eq >= len || bytes[eq] != b'=' {
            attrs.push(Attr { name, value: None });
            continue;
        }

        let value_start = skip_ws(eq + 1);
        let value = match bytes.get(value_start) {
            Some(&quote @ (b'"' | b'\'')) => {
                let inner = value_start + 1;
                let close = bytes[inner..]
                    .iter()
                    .position(|&b| b == quote)
                    .map_or(len, |p| inner + p);
                i = (close + 1).min(len);
                AttrValue {
                    text: inner..close,
                    quoted: true,
                }
            }
            _ => {
                i = value_start;
                while i < len && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                    i += 1;
                }
                AttrValue {
                    text: value_start..i,
                    quoted: false,
                }
            }
        };
        attrs.push(Attr {
            name,
            value: Some(value),
        });
    }
}

fn add_active(markup: &str, tag: &Tag) -> String {
    let (at, replace_to, insert) = match tag.attr(markup, "class") {
        Some(Attr {
            value: Some(value), ..
        }) => {
            let current = &markup[value.text.clone()];
            if current.split_ascii_whitespace().any(|class| class == "active") {
                return markup.to_string();
            }
            if value.quoted {
                let sep = if current.trim().is_empty() { "" } else { " " };
                (value.text.end, value.text.end, format!("{sep}active"))
            } else {
                (value.text.start, value.text.end, format!("\"{current} active\""))
            }
        }
        Some(Attr { name, value: None }) => (name.start, name.end, "class=\"active\"".to_string()),
        None => {
            let id_at = tag
                .attr(markup, "id")
                .map_or(tag.end, |attr| attr.name.start);
            (id_at, id_at, "class=\"active\" ".to_string())
        }
    };

    let mut out = String::with_capacity(markup.len() + insert.len());
    out.push_str(&markup[..at]);
    out.push_str(&insert);
    out.push_str(&markup[replace_to..]);
    out
}
