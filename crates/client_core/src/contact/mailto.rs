use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters `encodeURIComponent` leaves untouched, inverted.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Address of a `mailto:` contact link, without the scheme.
pub fn address_from_link(href: Option<&str>) -> String {
    href.map(|href| href.trim().trim_start_matches("mailto:").to_string())
        .unwrap_or_default()
}

/// `mailto:` URI with only the non-empty `subject` / `body` parameters.
pub fn mailto_uri(address: &str, subject: &str, body: &str) -> String {
    let mut query = Vec::new();
    if !subject.is_empty() {
        query.push(format!("subject={}", encode_component(subject)));
    }
    if !body.is_empty() {
        query.push(format!("body={}", encode_component(body)));
    }

    let mut uri = format!("mailto:{}", encode_component(address));
    if !query.is_empty() {
        uri.push('?');
        uri.push_str(&query.join("&"));
    }
    uri
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omits_query_when_subject_and_body_are_empty() {
        assert_eq!(mailto_uri("me@example.com", "", ""), "mailto:me%40example.com");
    }

    #[test]
    fn encodes_subject_and_body_like_encode_uri_component() {
        assert_eq!(
            mailto_uri("me@example.com", "Hi & bye", "Line one\nit's (fine)!"),
            "mailto:me%40example.com?subject=Hi%20%26%20bye&body=Line%20one%0Ait's%20(fine)!"
        );
    }

    #[test]
    fn body_only_has_no_subject_parameter() {
        assert_eq!(mailto_uri("", "", "hello"), "mailto:?body=hello");
    }

    #[test]
    fn strips_scheme_from_contact_link() {
        assert_eq!(
            address_from_link(Some("mailto:me@example.com")),
            "me@example.com"
        );
        assert_eq!(address_from_link(None), "");
    }

    #[test]
    fn encodes_non_ascii_as_utf8() {
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }
}
