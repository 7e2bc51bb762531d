use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use maud::{Markup, PreEscaped, html};

use super::page;
use crate::db::models::DbItem;

/// Client-side delete: the route is a DELETE, so a plain link won't do.
const DELETE_JS: &str = r#"
function deleteItem(id) {
  fetch('/delete-item/' + id, { method: 'DELETE' }).then(function (r) {
    if (r.ok) { location.reload(); } else { r.text().then(alert); }
  });
}
"#;

/// The home listing: every item with its embedded certificate image.
pub fn list_page(items: &[DbItem]) -> Markup {
    page(
        "Items",
        html! {
            h1 { "Items" }
            div class="toolbar" {
                a href="/add-item" { "Add item" }
                a href="/logout" { "Logout" }
            }
            @if items.is_empty() {
                p { "No items yet." }
            } @else {
                table {
                    tr {
                        th { "Name" } th { "Age" } th { "Salary" } th { "Gender" }
                        th { "Profession" } th { "Jadagam" } th { "Certificate" } th { "" }
                    }
                    @for item in items {
                        tr {
                            td { (item.name) }
                            td { (item.age) }
                            td { (item.salary) }
                            td { (item.gender) }
                            td { (item.profession) }
                            td { (item.jadagam) }
                            td {
                                img class="cert"
                                    alt={ "Certificate for " (item.name) }
                                    src=(data_uri(item));
                            }
                            td {
                                a href={ "/edit-item/" (item.id) } { "Edit" }
                                " "
                                button class="danger"
                                    onclick={ "deleteItem(" (item.id) ")" } { "Delete" }
                            }
                        }
                    }
                }
            }
            script { (PreEscaped(DELETE_JS)) }
        },
    )
}

pub fn add_page() -> Markup {
    page(
        "Add item",
        html! {
            h1 { "Add item" }
            (fields_form("/add-item", None))
            p { a href="/" { "Back to list" } }
        },
    )
}

pub fn edit_page(item: &DbItem) -> Markup {
    page(
        "Edit item",
        html! {
            h1 { "Edit item" }
            (fields_form(&format!("/edit-item/{}", item.id), Some(item)))
            p { a href="/" { "Back to list" } }
        },
    )
}

/// Shared add/edit form; `item` pre-fills the inputs for edit.
fn fields_form(action: &str, item: Option<&DbItem>) -> Markup {
    let text = |field: fn(&DbItem) -> &str| item.map(field).unwrap_or_default().to_string();
    let num = |field: fn(&DbItem) -> i64| item.map(field).map(|v| v.to_string()).unwrap_or_default();

    html! {
        form class="fields" method="post" action=(action) {
            label for="name" { "Name" }
            input id="name" name="name" type="text" value=(text(|i| &i.name)) required;
            label for="age" { "Age" }
            input id="age" name="age" type="number" value=(num(|i| i.age)) required;
            label for="salary" { "Salary" }
            input id="salary" name="salary" type="number" value=(num(|i| i.salary)) required;
            label for="gender" { "Gender" }
            input id="gender" name="gender" type="text" value=(text(|i| &i.gender)) required;
            label for="profession" { "Profession" }
            input id="profession" name="profession" type="text" value=(text(|i| &i.profession)) required;
            label for="jadagam" { "Jadagam" }
            input id="jadagam" name="jadagam" type="text" value=(text(|i| &i.jadagam)) required;
            button type="submit" { "Save" }
        }
    }
}

fn data_uri(item: &DbItem) -> String {
    format!(
        "data:{};base64,{}",
        item.image_content_type,
        BASE64.encode(&item.image)
    )
}
