//! Dashboard HTML rendering
//!
//! The page shell lives in a template file under the operator's control and
//! is read on every request. Rendering is plain placeholder substitution;
//! the post list is built here and injected as a block.

use crate::search::{AggregateView, PostSummary};
use crate::TemplateError;
use std::path::Path;

/// Body served when the template cannot be loaded or rendered
pub const FALLBACK_MESSAGE: &str = "页面没有准备好，请稍后再访问 ...";

/// Count placeholders the template shell must contain
const COUNT_PLACEHOLDERS: [&str; 4] = [
    "{{day_count}}",
    "{{week_count}}",
    "{{month_count}}",
    "{{year_count}}",
];

/// Placeholder replaced by the rendered post list
const POSTS_PLACEHOLDER: &str = "{{today_posts}}";

/// Renders the dashboard page for an aggregate view
///
/// # Arguments
///
/// * `view` - The aggregated counts and posts to render
/// * `template_path` - Path to the template shell file
///
/// # Returns
///
/// * `Ok(String)` - The rendered page
/// * `Err(TemplateError)` - The shell is unreadable or missing a placeholder
pub fn render_index(view: &AggregateView, template_path: &Path) -> Result<String, TemplateError> {
    let mut page =
        std::fs::read_to_string(template_path).map_err(|source| TemplateError::Io {
            path: template_path.display().to_string(),
            source,
        })?;

    let counts = [
        view.day_count,
        view.week_count,
        view.month_count,
        view.year_count,
    ];
    for (placeholder, count) in COUNT_PLACEHOLDERS.iter().zip(counts) {
        if !page.contains(placeholder) {
            return Err(missing(template_path, placeholder));
        }
        page = page.replace(placeholder, &count.to_string());
    }

    if !page.contains(POSTS_PLACEHOLDER) {
        return Err(missing(template_path, POSTS_PLACEHOLDER));
    }
    page = page.replace(POSTS_PLACEHOLDER, &post_rows(&view.today_posts));

    Ok(page)
}

fn missing(template_path: &Path, placeholder: &str) -> TemplateError {
    TemplateError::MissingPlaceholder {
        path: template_path.display().to_string(),
        placeholder: placeholder.to_string(),
    }
}

/// Builds the list items for today's posts
fn post_rows(posts: &[PostSummary]) -> String {
    let mut rows = String::new();

    for post in posts {
        rows.push_str(&format!(
            r#"<li class="post"><a href="{}" title="{}">{}</a><p class="description">{}</p></li>
"#,
            html_escape(&post.url),
            html_escape(&post.title),
            html_escape(&post.title),
            html_escape(&post.description),
        ));
    }

    rows
}

/// Escapes text for safe interpolation into HTML
fn html_escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SHELL: &str = "<html><body>\
        <span>{{day_count}}</span><span>{{week_count}}</span>\
        <span>{{month_count}}</span><span>{{year_count}}</span>\
        <ul>{{today_posts}}</ul></body></html>";

    fn create_template(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn sample_view() -> AggregateView {
        AggregateView {
            day_count: 5,
            week_count: -1,
            month_count: 100,
            year_count: 7,
            today_posts: vec![PostSummary {
                url: "/post/1".to_string(),
                title: "hello".to_string(),
                description: "a post".to_string(),
            }],
        }
    }

    #[test]
    fn test_render_substitutes_all_placeholders() {
        let file = create_template(SHELL);
        let page = render_index(&sample_view(), file.path()).unwrap();

        assert!(page.contains("<span>5</span>"));
        assert!(page.contains("<span>-1</span>"));
        assert!(page.contains("<span>100</span>"));
        assert!(page.contains("<span>7</span>"));
        assert!(page.contains(r#"<a href="/post/1" title="hello">hello</a>"#));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn test_render_empty_posts() {
        let file = create_template(SHELL);
        let view = AggregateView {
            today_posts: Vec::new(),
            ..sample_view()
        };
        let page = render_index(&view, file.path()).unwrap();
        assert!(page.contains("<ul></ul>"));
    }

    #[test]
    fn test_render_escapes_post_fields() {
        let file = create_template(SHELL);
        let view = AggregateView {
            today_posts: vec![PostSummary {
                url: "/post?a=1&b=2".to_string(),
                title: "<script>alert(1)</script>".to_string(),
                description: "x \"quoted\" & more".to_string(),
            }],
            ..sample_view()
        };
        let page = render_index(&view, file.path()).unwrap();

        assert!(page.contains("/post?a=1&amp;b=2"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("&quot;quoted&quot;"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn test_render_missing_file() {
        let view = sample_view();
        let result = render_index(&view, Path::new("/nonexistent/index.html"));
        assert!(matches!(result, Err(TemplateError::Io { .. })));
    }

    #[test]
    fn test_render_missing_placeholder() {
        let file = create_template("<html><body>{{day_count}}</body></html>");
        let result = render_index(&sample_view(), file.path());
        assert!(matches!(
            result,
            Err(TemplateError::MissingPlaceholder { .. })
        ));
    }
}
