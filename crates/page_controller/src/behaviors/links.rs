use tracing::debug;
use url::Url;

use crate::dom::{Document, Element, ElementId};

/// Opens off-site links in a new tab and marks them with an icon. Returns the
/// decorated links.
pub fn decorate_external_links(doc: &mut Document) -> Vec<ElementId> {
    let mut decorated = Vec::new();
    for link in doc.query_all(r#"a[href^="http"]"#) {
        let Some(href) = doc.attr(link, "href") else {
            continue;
        };
        let host = match Url::parse(href) {
            Ok(url) => url.host_str().map(str::to_ascii_lowercase),
            Err(error) => {
                debug!(href, %error, "skipping unparseable link");
                continue;
            }
        };
        if host.as_deref() == Some(doc.hostname()) {
            continue;
        }

        doc.set_attr(link, "target", "_blank");
        doc.set_attr(link, "rel", "noopener noreferrer");
        let icon = doc.append(link, Element::new("i").with_class("bi bi-box-arrow-up-right ms-1"));
        doc.set_style(icon, "font-size", "0.8em");
        decorated.push(link);
    }
    decorated
}
