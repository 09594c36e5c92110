use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Tag pattern should compile"));
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]{2,}$")
        .expect("Email pattern should compile")
});

/// Strip anything shaped like an HTML tag, trim surrounding whitespace and cap
/// the result at `max_len` characters.
///
/// This is textual filtering only: quotes and ampersands pass through
/// untouched. Use [`escape_html`] on top when the text is going into markup.
pub fn clean(raw: &str, max_len: usize) -> String {
    let stripped = TAG_RE.replace_all(raw, "");
    stripped
        .trim_matches(is_blank)
        .chars()
        .take(max_len)
        .collect()
}

/// Whitespace as browsers count it, which includes the byte order mark.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Syntactic check for `local@domain.tld`. Says nothing about deliverability.
pub fn is_valid_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_tag(s: &str) -> bool {
        TAG_RE.is_match(s)
    }

    #[test]
    fn test_clean_strips_tags() {
        assert_eq!(clean("<b>Marie</b> Martin", 100), "Marie Martin");
        assert_eq!(
            clean("<script>alert('x')</script>bonjour", 100),
            "alert('x')bonjour"
        );
        assert_eq!(clean("<img src=x onerror=alert(1)>", 100), "");
    }

    #[test]
    fn test_clean_never_leaves_a_tag() {
        let inputs = [
            "<<b>>",
            "<a<b>>c",
            "<<x>y>",
            "a < b > c",
            "<div><p>texte</p></div>",
            "<>",
            "<unterminated",
            "plain > text < here",
        ];
        for input in inputs {
            let out = clean(input, 1000);
            assert!(!has_tag(&out), "{input:?} cleaned to {out:?}");
        }
        assert_eq!(clean("<unterminated", 100), "<unterminated");
    }

    #[test]
    fn test_clean_trims_after_stripping() {
        assert_eq!(clean("  <br>  Rodez  <br/> ", 100), "Rodez");
        assert_eq!(clean("\n\t<p></p>\n", 100), "");
    }

    #[test]
    fn test_clean_trims_byte_order_mark() {
        assert_eq!(clean("\u{feff}A", 100), "A");
        assert_eq!(clean(" \u{feff}Marie\u{feff} ", 100), "Marie");
        assert_eq!(clean("\u{feff}<b></b>\u{feff}", 100), "");
    }

    #[test]
    fn test_clean_caps_length() {
        let long = "a".repeat(3000);
        assert_eq!(clean(&long, 2000).chars().count(), 2000);
        assert_eq!(clean("bonjour", 3), "bon");
        assert_eq!(clean("bonjour", 0), "");
        for cap in 0..12 {
            assert!(clean("  <i>Zdr</i>_DEV à Rodez  ", cap).chars().count() <= cap);
        }
    }

    #[test]
    fn test_clean_truncates_on_char_boundaries() {
        assert_eq!(clean("éèàçù", 3), "éèà");
        assert_eq!(clean("☕☕☕", 2), "☕☕");
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("marie@moncommerce.fr"));
        assert!(is_valid_email("prenom.nom+devis@sous.domaine.fr"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a b@c.fr"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a\u{feff}@b.co"));
        assert!(!is_valid_email("a@b\u{feff}.co"));
        assert!(!is_valid_email("a@b.c\u{feff}o"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"Tom & "Jerry" <3 l'été"#),
            "Tom &amp; &quot;Jerry&quot; &lt;3 l&#39;été"
        );
        assert_eq!(escape_html("rien à signaler"), "rien à signaler");
    }
}
