// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Markup fragment for the counter widget.
//!
//! The widget is rebuilt from scratch on every render, so this is just a
//! string builder: state values are interpolated into a fixed template.

use crate::config::Config;
use crate::state::ViewState;

/// Build the markup fragment for `state`:
///
/// ```
/// # use tally::{markup, Config, ViewState};
/// let html = markup::fragment(&ViewState::new("Hello", 0), &Config::default());
///
/// assert_eq!(
///     html,
///     r#"<section><h1>Hello</h1><p>Count: 0</p><button id="inc">Increment</button></section>"#,
/// );
/// ```
pub fn fragment(state: &ViewState, config: &Config) -> String {
    let mut count = itoa::Buffer::new();
    let count = count.format(state.count);

    let mut out = String::with_capacity(
        80 + state.message.len() + count.len() + config.control_id().len() + config.label().len(),
    );

    out.push_str("<section><h1>");
    escape_into(&mut out, &state.message);
    out.push_str("</h1><p>Count: ");
    out.push_str(count);
    out.push_str("</p><button id=\"");
    escape_into(&mut out, config.control_id());
    out.push_str("\">");
    escape_into(&mut out, config.label());
    out.push_str("</button></section>");

    out
}

/// Append `text` to `out`, escaping characters that are meaningful in HTML text
/// and double or single quoted attribute values.
pub fn escape_into(out: &mut String, text: &str) {
    let mut rest = text;

    while let Some(idx) = rest.find(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        out.push_str(&rest[..idx]);
        out.push_str(match rest.as_bytes()[idx] {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            _ => "&#39;",
        });
        rest = &rest[idx + 1..];
    }

    out.push_str(rest);
}

/// Reverse of [`escape_into`] for the five entities it produces.
pub fn unescape(text: &str) -> String {
    const ENTITIES: [(&str, char); 5] = [
        ("&amp;", '&'),
        ("&lt;", '<'),
        ("&gt;", '>'),
        ("&quot;", '"'),
        ("&#39;", '\''),
    ];

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'outer: while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];

        for (entity, ch) in ENTITIES {
            if let Some(tail) = rest.strip_prefix(entity) {
                out.push(ch);
                rest = tail;
                continue 'outer;
            }
        }

        out.push('&');
        rest = &rest[1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape(text: &str) -> String {
        let mut out = String::new();
        escape_into(&mut out, text);
        out
    }

    #[test]
    fn fragment_embeds_state() {
        let html = fragment(&ViewState::new("Hello", 5), &Config::default());

        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<p>Count: 5</p>"));
        assert!(html.contains(r#"<button id="inc">Increment</button>"#));
    }

    #[test]
    fn fragment_formats_negative_and_large_counts() {
        let config = Config::default();

        assert!(fragment(&ViewState::new("", -3), &config).contains("Count: -3<"));
        assert!(fragment(&ViewState::new("", i64::MAX), &config)
            .contains("Count: 9223372036854775807<"));
    }

    #[test]
    fn fragment_uses_config() {
        let config = Config::default()
            .with_control_id("plus")
            .with_label("Add one");

        let html = fragment(&ViewState::default(), &config);

        assert!(html.contains(r#"<button id="plus">Add one</button>"#));
    }

    #[test]
    fn message_is_escaped() {
        let html = fragment(
            &ViewState::new("<b>Tom & \"Jerry\"</b>", 0),
            &Config::default(),
        );

        assert!(html.contains("<h1>&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;</h1>"));
    }

    #[test]
    fn escape_leaves_plain_text_alone() {
        assert_eq!(escape("Hello, world"), "Hello, world");
        assert_eq!(escape(""), "");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn unescape_reverses_escape() {
        let text = "a < b && c > 'd' \"e\"";

        assert_eq!(unescape(&escape(text)), text);
    }

    #[test]
    fn unescape_keeps_unknown_entities() {
        assert_eq!(unescape("&nbsp;&amp"), "&nbsp;&amp");
    }
}
