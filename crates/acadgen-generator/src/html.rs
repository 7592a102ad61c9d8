//! Page shell and HTML escaping.
//!
//! Every generated page shares the same skeleton: head with favicon,
//! stylesheet, and table styles, a `<div id="page">` wrapper around the
//! page body, a trailing links section, and a copyright footer.

use acadgen_core::config::SiteConfig;

/// Inline styles for the generated tables.
const TABLE_CSS: &str = "\
      table.pub-list {
        border-collapse: collapse;
        width: 100%;
      }
      table.pub-list th, table.pub-list td {
        border: 1px solid #ddd;
        padding: 8px;
        vertical-align: top;
      }
      table.pub-list th {
        background-color: #f2f2f2;
        text-align: left;
      }
      .authors {
        white-space: pre-line;
      }";

/// Renders the shared page skeleton around a page body.
#[derive(Debug)]
pub struct PageShell {
    site: SiteConfig,
}

impl PageShell {
    /// Create a page shell from site configuration.
    #[must_use]
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }

    /// Render a complete HTML document with the given title and body.
    pub fn render(&self, title: &str, body: &str) -> String {
        let analytics = self
            .site
            .analytics_id
            .as_deref()
            .map(analytics_snippet)
            .unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
{analytics}    <meta charset="utf-8">
    <link rel="icon" type="image/x-icon" href="{favicon}">
    <link rel="stylesheet" href="{stylesheet}">
    <title>{title}</title>
    <style>
{TABLE_CSS}
    </style>
  </head>
  <body>
    <div id="page">
{body}
      <h1>Links</h1>
      <hr>
      <ul>
        <li><a href="{home_url}">Back to home</a></li>
      </ul>

      <footer id="pageFoot">
        <p id="copyright"><small>Copyright &copy; {copyright}</small></p>
      </footer>
    </div>
  </body>
</html>
"#,
            favicon = html_escape(&self.site.favicon),
            stylesheet = html_escape(&self.site.stylesheet),
            title = html_escape(title),
            home_url = html_escape(&self.site.home_url),
            copyright = html_escape(&self.site.copyright),
        )
    }
}

/// Google Analytics gtag snippet for a configured tag id.
fn analytics_snippet(tag_id: &str) -> String {
    let tag_id = html_escape(tag_id);
    format!(
        r#"    <script async src="https://www.googletagmanager.com/gtag/js?id={tag_id}"></script>
    <script>
    window.dataLayer = window.dataLayer || [];
    function gtag(){{dataLayer.push(arguments);}}
    gtag('js', new Date());
    gtag('config', '{tag_id}');
    </script>
"#
    )
}

/// Escape HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("a < b & c"), "a &lt; b &amp; c");
        assert_eq!(html_escape(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_shell_structure() {
        let shell = PageShell::new(SiteConfig::default());
        let page = shell.render("Publications", "      <p>body here</p>\n");

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Publications</title>"));
        assert!(page.contains("body here"));
        assert!(page.contains("Back to home"));
        assert!(page.contains("Copyright &copy;"));
        assert!(!page.contains("googletagmanager"));
    }

    #[test]
    fn test_analytics_snippet_when_configured() {
        let site = SiteConfig {
            analytics_id: Some("UA-000000000-1".to_string()),
            ..SiteConfig::default()
        };
        let page = PageShell::new(site).render("T", "");

        assert!(page.contains("googletagmanager.com/gtag/js?id=UA-000000000-1"));
        assert!(page.contains("gtag('config', 'UA-000000000-1')"));
    }

    #[test]
    fn test_title_escaped() {
        let shell = PageShell::new(SiteConfig::default());
        let page = shell.render("A <b> title", "");
        assert!(page.contains("<title>A &lt;b&gt; title</title>"));
    }
}
