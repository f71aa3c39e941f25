pub const SCENE_SYSTEM: &str = include_str!("../data/prompts/scene_system.txt");
pub const SCENE_USER: &str = include_str!("../data/prompts/scene_user.txt");

/// Replace `{{key}}` placeholders in a template string.
///
/// Single pass over the template: substituted values are copied verbatim and
/// never scanned for placeholders themselves.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let value = after.find("}}").and_then(|end| {
            let key = &after[..end];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, end))
        });

        match value {
            Some((value, end)) => {
                result.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                result.push_str("{{");
                rest = after;
            }
        }
    }

    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{{a}} and {{b}}", &[("a", "cats")]), "cats and {{b}}");
    }

    #[test]
    fn test_render_does_not_expand_placeholders_inside_values() {
        let rendered = render(
            SCENE_USER,
            &[
                ("quote", "Say {{prompt}} twice"),
                ("author", "{{quote}}"),
                ("prompt", "a quiet kitchen"),
            ],
        );

        assert!(rendered.starts_with("Inspiring Quote: \"Say {{prompt}} twice\" \u{2014} {{quote}}"));
        assert!(rendered.contains("Scene Context: a quiet kitchen"));
        assert_eq!(rendered.matches("a quiet kitchen").count(), 1);
    }

    #[test]
    fn test_render_handles_unclosed_and_nested_braces() {
        assert_eq!(render("{{a", &[("a", "x")]), "{{a");
        assert_eq!(render("{{ {{a}}", &[("a", "x")]), "{{ x");
        assert_eq!(render("}}{{a}}", &[("a", "x")]), "}}x");
    }

    #[test]
    fn test_prompts_have_no_trailing_newline() {
        assert!(!SCENE_SYSTEM.ends_with('\n'));
        assert!(!SCENE_USER.ends_with('\n'));
        assert!(SCENE_USER.ends_with("inspired by this quote and context."));
    }

    #[test]
    fn test_prompts_are_non_empty() {
        assert!(!SCENE_SYSTEM.is_empty());
        assert!(!SCENE_USER.is_empty());
    }

    #[test]
    fn test_scene_system_states_format_rules() {
        assert!(SCENE_SYSTEM.contains("ALL CAPS"));
        assert!(SCENE_SYSTEM.contains("present tense"));
        assert!(SCENE_SYSTEM.contains("2-3 characters"));
        assert!(SCENE_SYSTEM.contains("300-500 words"));
    }

    #[test]
    fn test_scene_user_has_placeholders() {
        assert!(SCENE_USER.contains("{{quote}}"));
        assert!(SCENE_USER.contains("{{author}}"));
        assert!(SCENE_USER.contains("{{prompt}}"));
    }
}
