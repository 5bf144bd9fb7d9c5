//! Markdown to HTML rendering.
//!
//! Conversion is GitHub-flavored via comrak: fenced code blocks are
//! syntax-highlighted through syntect, pipe tables are enabled, and single
//! newlines become `<br>` (hard breaks), matching how pasted notes are
//! written. The rendered body is wrapped in a complete HTML document with
//! auto-refresh, a sticky sync header, and a client-side theme toggle.

use chrono::Local;
use comrak::plugins::syntect::SyntectAdapter;
use comrak::{markdown_to_html_with_plugins, Options, Plugins};

/// Configuration for the renderer.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Document title and sync-header label (usually the snapshot file name).
    pub title: String,
    /// Auto-refresh interval for the rendered page, in seconds.
    pub refresh_secs: u32,
    /// Syntect theme used for fenced code blocks.
    pub syntax_theme: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "mdbridge".to_string(),
            refresh_secs: 5,
            syntax_theme: "base16-ocean.dark".to_string(),
        }
    }
}

/// Converts Markdown text into a complete, styled HTML document.
pub struct Renderer {
    options: RenderOptions,
    adapter: SyntectAdapter,
}

impl Renderer {
    /// Create a renderer with the given options.
    pub fn new(options: RenderOptions) -> Self {
        let adapter = SyntectAdapter::new(Some(options.syntax_theme.as_str()));
        Self { options, adapter }
    }

    /// Convert Markdown to an HTML body fragment.
    ///
    /// Enabled comrak features: pipe tables, strikethrough, hard line
    /// breaks, and highlighted fenced code via the syntect adapter.
    pub fn render_body(&self, markdown: &str) -> String {
        let mut options = Options::default();
        options.extension.table = true;
        options.extension.strikethrough = true;
        options.render.hardbreaks = true;

        let mut plugins = Plugins::default();
        plugins.render.codefence_syntax_highlighter = Some(&self.adapter);

        markdown_to_html_with_plugins(markdown, &options, &plugins)
    }

    /// Render Markdown into the full HTML document served to clients.
    pub fn render_page(&self, markdown: &str) -> String {
        self.wrap(&self.render_body(markdown))
    }

    /// The static document served before any content has been submitted.
    pub fn placeholder_page(&self) -> String {
        self.wrap("<h1>Bridge ready</h1>\n<p>Send something from your editor!</p>")
    }

    /// Wrap a rendered body in the page chrome: meta refresh, stylesheet,
    /// sync header with a local-time stamp, and the theme-toggle script.
    fn wrap(&self, body: &str) -> String {
        let synced_at = Local::now().format("%H:%M:%S");
        format!(
            r#"<!DOCTYPE html>
<html lang="en" data-theme="dark">
<head>
<meta charset="UTF-8">
<meta http-equiv="refresh" content="{refresh}">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
:root[data-theme="dark"] {{
  --bg: #0d1117; --fg: #c9d1d9; --surface: #161b22; --border: #30363d; --muted: #8b949e;
}}
:root[data-theme="light"] {{
  --bg: #ffffff; --fg: #24292f; --surface: #f6f8fa; --border: #d0d7de; --muted: #57606a;
}}
body {{ background-color: var(--bg); color: var(--fg); margin: 0; padding: 0;
  display: flex; flex-direction: column; align-items: center;
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif; }}
.content {{ box-sizing: border-box; min-width: 200px; max-width: 900px; width: 100%;
  margin: 0 auto; padding: 45px; line-height: 1.5; }}
.sync-header {{ position: sticky; top: 0; background: var(--surface); padding: 10px;
  text-align: center; font-size: 12px; color: var(--muted);
  border-bottom: 1px solid var(--border); width: 100%; z-index: 100; }}
.sync-header button {{ float: right; margin-right: 12px; background: none;
  border: 1px solid var(--border); border-radius: 6px; color: var(--muted); cursor: pointer; }}
pre {{ background-color: var(--surface) !important; border: 1px solid var(--border);
  padding: 12px; border-radius: 6px; overflow-x: auto;
  white-space: pre-wrap; word-wrap: break-word; }}
code {{ font-family: ui-monospace, SFMono-Regular, Menlo, monospace; }}
table {{ border-collapse: collapse; }}
th, td {{ border: 1px solid var(--border); padding: 6px 13px; }}
blockquote {{ border-left: 4px solid var(--border); margin-left: 0; padding-left: 16px;
  color: var(--muted); }}
a {{ color: #58a6ff; }}
</style>
</head>
<body>
<div class="sync-header">
  Displaying: {title} | Last synced: {synced_at}
  <button id="theme-toggle">theme</button>
</div>
<article class="content">
{body}
</article>
<script>
(function () {{
  var root = document.documentElement;
  var saved = localStorage.getItem("mdbridge-theme");
  if (saved) {{ root.setAttribute("data-theme", saved); }}
  document.getElementById("theme-toggle").addEventListener("click", function () {{
    var next = root.getAttribute("data-theme") === "dark" ? "light" : "dark";
    root.setAttribute("data-theme", next);
    localStorage.setItem("mdbridge-theme", next);
  }});
}})();
</script>
</body>
</html>
"#,
            refresh = self.options.refresh_secs,
            title = self.options.title,
            synced_at = synced_at,
            body = body,
        )
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}
