use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #222; }
.shell { display: grid; grid-template-columns: 300px 1fr; min-height: 100vh; }
aside { background: #f0f2f6; padding: 1.5rem; }
main { padding: 2rem 3rem; max-width: 860px; }
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-bottom: 1.25rem; }
label.field { display: block; font-size: 0.9rem; margin-bottom: 0.35rem; }
select, input[type=number], input[type=text], textarea { width: 100%; padding: 0.45rem; font-size: 1rem; box-sizing: border-box; }
.radio-row label { margin-right: 1rem; }
button { padding: 0.5rem 1.1rem; font-size: 1rem; cursor: pointer; border: 1px solid #bbb; border-radius: 6px; background: #fff; }
.alert { padding: 0.75rem 1rem; border-radius: 6px; margin: 1rem 0; }
.alert-error { background: #fde8e8; color: #8a1c1c; }
.alert-success { background: #e6f4ea; color: #1e6b34; }
.result-box { padding: 10px; border: 1px solid #444; border-radius: 5px; background-color: #333; margin-top: 1.25rem; }
.result-box p { font-size: 18px; font-weight: bold; color: white; text-align: center; margin: 0.5rem 0; }
"#;

/// Page shell: sidebar on the left, main content on the right.
pub fn desktop_layout(title: &str, sidebar: Markup, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {};
            }
            body {
                div class="shell" {
                    aside { (sidebar) }
                    main {
                        h1 { (title) }
                        (content)
                    }
                }
            }
        }
    }
}
