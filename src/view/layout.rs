use maud::{DOCTYPE, Markup, html};

use crate::{HTMX_PATH, LEAFLET_CSS_PATH, LEAFLET_JS_PATH};

pub const GITHUB_URL: &str = "https://github.com/jeremyirvine";

/// Centered wrapper. `kind` adds a `container-{kind}` modifier class.
#[must_use]
pub fn container(kind: Option<&str>, content: &Markup) -> Markup {
    let class = match kind {
        Some(kind) => format!("container container-{kind}"),
        None => "container".to_string(),
    };
    html! {
        div class=(class) { (content) }
    }
}

#[must_use]
pub fn render_header() -> Markup {
    let links = html! {
        ul {
            li {
                a href=(GITHUB_URL) {
                    span class="visually-hidden" { "Github" }
                    span class="icon-github" aria-hidden="true" {}
                }
            }
        }
    };
    html! {
        header { (container(Some("content"), &links)) }
    }
}

#[must_use]
pub fn render_footer(site_owner: &str, year: i32) -> Markup {
    let notice = html! {
        p { "© " (year) ", " (site_owner) }
    };
    html! {
        footer { (container(None, &notice)) }
    }
}

/// Full page: head assets, header, `content` in `main`, footer.
#[must_use]
pub fn render_layout(
    title: &str,
    page_name: &str,
    site_owner: &str,
    year: i32,
    content: &Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" type="text/css" href=(LEAFLET_CSS_PATH);
                link rel="stylesheet" type="text/css" href="static/tracker.css";
                script src=(LEAFLET_JS_PATH) defer {}
                script src=(HTMX_PATH) defer {}
                script src="static/tracker.js" defer {}
            }
            body class=(format!("page-{page_name}")) {
                div class="wrapper" {
                    (render_header())
                    main { (content) }
                    (render_footer(site_owner, year))
                }
            }
        }
    }
}
