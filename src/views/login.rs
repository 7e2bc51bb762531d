use maud::{Markup, html};

use super::page;

pub fn login_page() -> Markup {
    page(
        "Login",
        html! {
            h1 { "Login" }
            form class="fields" method="post" action="/login" {
                label for="username" { "Username" }
                input id="username" name="username" type="text" required;
                label for="password" { "Password" }
                input id="password" name="password" type="password" required;
                button type="submit" { "Sign in" }
            }
        },
    )
}
