//! Preview rendering.
//!
//! Turns stored website records back into standalone HTML documents for the
//! iframe preview, the download action, and the view-code affordance.
//! Presentation only: the stored html/css are embedded unmodified.

use super::types::Website;

/// Wrap a stored website into a standalone, renderable document.
pub fn render_document(website: &Website) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
      body {{ margin: 0; padding: 0; }}
      {css}
    </style>
</head>
<body>
    {html}
</body>
</html>"#,
        title = escape_html(&website.name),
        css = website.generated_css,
        html = website.generated_html,
    )
}

/// Minimal page served when the requested preview id does not exist.
pub fn render_not_found() -> String {
    r#"<html><body style="font-family: Arial; padding: 40px; text-align: center;">
  <h2>Website Not Found</h2>
  <p>The requested website preview could not be found.</p>
</body></html>"#
        .to_string()
}

/// Minimal page served on an internal preview failure.
pub fn render_error() -> String {
    r#"<html><body style="font-family: Arial; padding: 40px; text-align: center;">
  <h2>Preview Error</h2>
  <p>Unable to load the website preview.</p>
</body></html>"#
        .to_string()
}

/// Debug document showing the raw generated HTML (escaped) and CSS.
pub fn render_source_view(website: &Website) -> String {
    format!(
        r#"<html>
<head>
    <title>Generated Code - {title}</title>
    <style>
      body {{ font-family: monospace; margin: 20px; background: #f5f5f5; }}
      .section {{ background: white; margin: 20px 0; padding: 20px; border-radius: 8px; }}
      h2 {{ color: #333; border-bottom: 2px solid #007acc; padding-bottom: 10px; }}
      pre {{ background: #f8f8f8; padding: 15px; border-radius: 4px; overflow-x: auto; }}
    </style>
</head>
<body>
    <h1>Generated Code for: {title}</h1>
    <div class="section">
      <h2>HTML</h2>
      <pre>{html}</pre>
    </div>
    <div class="section">
      <h2>CSS</h2>
      <pre>{css}</pre>
    </div>
</body>
</html>"#,
        title = escape_html(&website.name),
        html = escape_html(&website.generated_html),
        css = escape_html(&website.generated_css),
    )
}

/// Download filename: lowercased name, whitespace runs collapsed to `-`.
pub fn download_filename(website: &Website) -> String {
    let slug: Vec<String> = website
        .name
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect();
    format!("{}.html", slug.join("-"))
}

/// Escape HTML special characters for safe embedding in markup.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
