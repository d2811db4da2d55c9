use maud::{Markup, html};

use crate::model::MapSettings;
use crate::view::layout::render_layout;

#[must_use]
pub fn render_map(settings: &MapSettings) -> Markup {
    html! {
        div id="map" class="map"
            data-center-lat=(settings.center_lat)
            data-center-lng=(settings.center_lng)
            data-zoom=(settings.zoom)
            data-base-map=(settings.base_map) {}
    }
}

#[must_use]
pub fn render_index_template(
    title: &str,
    settings: &MapSettings,
    site_owner: &str,
    year: i32,
) -> Markup {
    let content = html! {
        div class="tracker" {
            (render_map(settings))
            div id="tracker" hx-get="tracker" hx-trigger="load" hx-swap="innerHTML" {
                img alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
            }
        }
    };
    render_layout(title, "home", site_owner, year, &content)
}
