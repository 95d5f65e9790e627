//! Minimal `{{name}}` placeholder rendering for shell scripts

/// Replaces every `{{key}}` (whitespace inside the braces allowed) with its
/// value. Unknown keys and unterminated braces are left as written.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = after[..end].trim();
        match vars.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_known_keys() {
        let out = render("{{bindFunc}}() { {{ binary }} get; }", &[
            ("bindFunc", "j"),
            ("binary", "/usr/bin/qj"),
        ]);
        assert_eq!(out, "j() { /usr/bin/qj get; }");
    }

    #[test]
    fn keeps_unknown_keys() {
        assert_eq!(render("a {{other}} b", &[("x", "y")]), "a {{other}} b");
    }

    #[test]
    fn keeps_unterminated_braces() {
        assert_eq!(render("x {{open", &[("open", "no")]), "x {{open");
    }

    #[test]
    fn leaves_shell_syntax_alone() {
        let src = "${PROMPT_COMMAND:+;$PROMPT_COMMAND} ${(f)\"$(x)\"}";
        assert_eq!(render(src, &[("x", "y")]), src);
    }
}
