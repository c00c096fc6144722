//! Preview harness generation.
//!
//! Builds a self-contained HTML document that mounts the emitted markup with
//! mock implementations of the catalog components, close enough visually to
//! judge layout. Transform or mount failures render as an in-page error
//! panel; harness generation itself never fails.

mod capture;

pub use capture::{
    CaptureResult, ScreenshotBackend, ScreenshotOptions, DEFAULT_MAX_CONTENT_HEIGHT,
    DEFAULT_NAVIGATION_TIMEOUT, DEFAULT_NETWORK_IDLE_TIMEOUT, DEFAULT_PROCESS_TIMEOUT,
};

use crate::catalog::Framework;

const SHARED_STYLES: &str = r#"
    body { font-family: -apple-system, 'Helvetica Neue', Arial, sans-serif; margin: 16px; background: #fff; }
    .preview-error { border: 2px solid #d33; border-radius: 6px; background: #fdecea; color: #611a15; padding: 12px 16px; white-space: pre-wrap; font-family: monospace; }
    .mock { box-sizing: border-box; }
    .mock-button { border: none; border-radius: 6px; background: #2457f5; color: #fff; padding: 8px 16px; cursor: pointer; }
    .mock-button.small { padding: 4px 10px; font-size: 12px; }
    .mock-button.large { padding: 12px 22px; font-size: 16px; }
    .mock-input { border: 1px solid #c4c9d0; border-radius: 4px; padding: 8px 10px; }
    .mock-card { border: 1px solid #e2e5e9; border-radius: 8px; padding: 16px; margin: 4px 0; }
    .mock-card-title { font-weight: 600; margin-bottom: 8px; }
    .mock-modal { border: 1px solid #c4c9d0; border-radius: 10px; box-shadow: 0 4px 16px rgba(0,0,0,0.18); padding: 20px; max-width: 480px; }
    .mock-chip, .mock-badge, .mock-tag { display: inline-block; border-radius: 999px; padding: 2px 10px; font-size: 12px; background: #eef1f5; margin: 2px; }
    .mock-badge { background: #d33; color: #fff; }
    .mock-text { display: block; margin: 2px 0; }
    .mock-link { color: #2457f5; text-decoration: underline; }
    .mock-icon { display: inline-block; width: 16px; height: 16px; background: #c4c9d0; border-radius: 3px; font-size: 9px; overflow: hidden; }
    .mock-switch { display: inline-block; width: 36px; height: 20px; border-radius: 999px; background: #c4c9d0; }
    .mock-tab { display: flex; gap: 12px; border-bottom: 2px solid #e2e5e9; padding: 6px 0; }
    .mock-table { border: 1px solid #e2e5e9; border-radius: 4px; padding: 8px; color: #6b7280; }
    .mock-labeled { display: flex; gap: 8px; margin: 2px 0; }
    .mock-labeled .label { color: #6b7280; }
"#;

const REACT_MOCKS: &str = r#"
      const Button = ({ size, children }) => <button className={'mock mock-button ' + (size || '')}>{children}</button>;
      const Input = ({ placeholder }) => <input className="mock mock-input" placeholder={placeholder || ''} readOnly />;
      const Card = ({ title, children }) => <div className="mock mock-card">{title ? <div className="mock-card-title">{title}</div> : null}{children}</div>;
      const Modal = ({ title, children }) => <div className="mock mock-modal">{title ? <div className="mock-card-title">{title}</div> : null}{children}</div>;
      const Table = ({ children }) => <div className="mock mock-table">{children || 'table'}</div>;
      const Text = ({ children }) => <span className="mock mock-text">{children}</span>;
      const TextLink = ({ href, children }) => <a className="mock mock-link" href={href || '#'}>{children}</a>;
      const Chip = ({ children }) => <span className="mock mock-chip">{children}</span>;
      const Badge = ({ children }) => <span className="mock mock-badge">{children}</span>;
      const Tag = ({ children }) => <span className="mock mock-tag">{children}</span>;
      const Icon = ({ name }) => <span className="mock mock-icon">{name}</span>;
      const Switch = () => <span className="mock mock-switch"></span>;
      const Tab = ({ children }) => <div className="mock mock-tab">{children}</div>;
      const Accordion = ({ title, children }) => <details className="mock mock-card" open><summary>{title || 'Section'}</summary>{children}</details>;
      const LabeledText = ({ label, value }) => <div className="mock mock-labeled"><span className="label">{label}</span><span>{value}</span></div>;
"#;

const VUE_MOCKS: &str = r#"
      const mocks = {
        Button: { props: ['size'], template: `<button class="mock mock-button" :class="size"><slot /></button>` },
        Input: { props: ['placeholder'], template: `<input class="mock mock-input" :placeholder="placeholder" readonly />` },
        Card: { props: ['title'], template: `<div class="mock mock-card"><div v-if="title" class="mock-card-title">{{ title }}</div><slot /></div>` },
        Modal: { props: ['title'], template: `<div class="mock mock-modal"><div v-if="title" class="mock-card-title">{{ title }}</div><slot /></div>` },
        Table: { template: `<div class="mock mock-table"><slot>table</slot></div>` },
        Text: { template: `<span class="mock mock-text"><slot /></span>` },
        TextLink: { props: ['href'], template: `<a class="mock mock-link" :href="href || '#'"><slot /></a>` },
        Chip: { template: `<span class="mock mock-chip"><slot /></span>` },
        Badge: { template: `<span class="mock mock-badge"><slot /></span>` },
        Tag: { template: `<span class="mock mock-tag"><slot /></span>` },
        Icon: { props: ['name'], template: `<span class="mock mock-icon">{{ name }}</span>` },
        Switch: { template: `<span class="mock mock-switch"></span>` },
        Tab: { template: `<div class="mock mock-tab"><slot /></div>` },
        Accordion: { props: ['title'], template: `<details class="mock mock-card" open><summary>{{ title || 'Section' }}</summary><slot /></details>` },
        LabeledText: { props: ['label', 'value'], template: `<div class="mock mock-labeled"><span class="label">{{ label }}</span><span>{{ value }}</span></div>` },
      };
"#;

/// Build a standalone HTML preview document for emitted markup.
pub fn render_preview_html(markup: &str, component_name: &str, framework: Framework) -> String {
    match framework {
        Framework::React => react_harness(markup, component_name),
        Framework::Vue => vue_harness(markup, component_name),
    }
}

fn react_harness(markup: &str, component_name: &str) -> String {
    let body = if markup.trim().is_empty() {
        "null".to_string()
    } else {
        format!("(\n{}\n      )", indent_markup(markup, 8))
    };
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{component_name} preview</title>
  <style>{SHARED_STYLES}</style>
  <script crossorigin src="https://unpkg.com/react@18/umd/react.development.js"></script>
  <script crossorigin src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>
  <script src="https://unpkg.com/@babel/standalone/babel.min.js"></script>
</head>
<body>
  <div id="root"></div>
  <script>
    function showPreviewError(message) {{
      var root = document.getElementById('root');
      root.innerHTML = '';
      var panel = document.createElement('div');
      panel.className = 'preview-error';
      panel.textContent = 'Preview failed: ' + message;
      root.appendChild(panel);
    }}
    window.addEventListener('error', function (event) {{
      showPreviewError(event.message || String(event.error));
    }});
  </script>
  <script type="text/babel">
    try {{
{REACT_MOCKS}
      function {component_name}() {{
        return {body};
      }}
      ReactDOM.createRoot(document.getElementById('root')).render(<{component_name} />);
    }} catch (err) {{
      showPreviewError(err && err.message ? err.message : String(err));
    }}
  </script>
</body>
</html>
"#
    )
}

fn vue_harness(markup: &str, component_name: &str) -> String {
    let template = if markup.trim().is_empty() {
        "<div />".to_string()
    } else {
        escape_template_literal(markup)
    };
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <title>{component_name} preview</title>
  <style>{SHARED_STYLES}</style>
  <script src="https://unpkg.com/vue@3/dist/vue.global.js"></script>
</head>
<body>
  <div id="app"></div>
  <script>
    function showPreviewError(message) {{
      var app = document.getElementById('app');
      app.innerHTML = '';
      var panel = document.createElement('div');
      panel.className = 'preview-error';
      panel.textContent = 'Preview failed: ' + message;
      app.appendChild(panel);
    }}
    try {{
{VUE_MOCKS}
      const app = Vue.createApp({{
        name: '{component_name}',
        template: `{template}`,
      }});
      for (const [name, mock] of Object.entries(mocks)) {{
        app.component(name, mock);
      }}
      app.config.errorHandler = function (err) {{
        showPreviewError(err && err.message ? err.message : String(err));
      }};
      app.mount('#app');
    }} catch (err) {{
      showPreviewError(err && err.message ? err.message : String(err));
    }}
  </script>
</body>
</html>
"#
    )
}

fn indent_markup(markup: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    markup
        .lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markup lands inside a JS template literal; escape its metacharacters.
fn escape_template_literal(markup: &str) -> String {
    markup
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn react_harness_embeds_markup_and_error_panel() {
        let html = render_preview_html("<Button>Pay</Button>", "Checkout", Framework::React);
        assert!(html.contains("<Button>Pay</Button>"));
        assert!(html.contains("function Checkout()"));
        assert!(html.contains("showPreviewError"));
        assert!(html.contains("text/babel"));
    }

    #[test]
    fn react_harness_defines_a_mock_per_catalog_component() {
        let html = render_preview_html("<Button>Pay</Button>", "Checkout", Framework::React);
        for name in ["Button", "Input", "Card", "Modal", "LabeledText", "Accordion"] {
            assert!(html.contains(&format!("const {name} =")), "missing mock {name}");
        }
    }

    #[test]
    fn empty_markup_renders_null_body() {
        let html = render_preview_html("", "Empty", Framework::React);
        assert!(html.contains("return null;"));
    }

    #[test]
    fn vue_harness_registers_mocks_and_escapes_template() {
        let html = render_preview_html("<Tag>a ` b ${c}</Tag>", "Badges", Framework::Vue);
        assert!(html.contains("vue.global.js"));
        assert!(html.contains("app.component(name, mock)"));
        assert!(html.contains("a \\` b \\${c}"));
        assert!(html.contains("name: 'Badges',"));
    }
}
