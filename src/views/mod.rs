//! Server-side HTML views.
//!
//! All rendering uses [maud](https://maud.lambda.xyz/) for compile-time HTML
//! generation; dynamic values are escaped automatically.

pub mod items;
pub mod login;

use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline CSS shared by every page. Plain, form-centric layout.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.5;color:#111;background:#fafafa;padding:1.5rem}
main{max-width:960px;margin:0 auto}
h1{margin-bottom:1rem}
a{color:#0b5fff;text-decoration:none}
a:hover{text-decoration:underline}
table{border-collapse:collapse;width:100%;background:#fff}
th,td{border:1px solid #ddd;padding:.5rem .75rem;text-align:left;vertical-align:top}
th{background:#f0f0f0}
form.fields{max-width:420px;background:#fff;border:1px solid #ddd;padding:1rem;border-radius:6px}
form.fields label{display:block;margin:.5rem 0 .15rem;font-weight:600}
form.fields input{width:100%;padding:.4rem .5rem;border:1px solid #ccc;border-radius:4px}
form.fields button{margin-top:.85rem;padding:.45rem 1.1rem;border:0;border-radius:4px;background:#0b5fff;color:#fff;cursor:pointer}
img.cert{max-width:160px;border:1px solid #ccc}
.toolbar{margin-bottom:1rem;display:flex;gap:1rem}
button.danger{background:#c0392b;color:#fff;border:0;border-radius:4px;padding:.3rem .7rem;cursor:pointer}
"#;

/// Common page shell: head with inline CSS, body with a `main` wrapper.
pub fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " — certdesk" }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main {
                    (content)
                }
            }
        }
    }
}
