use maud::{html, Markup, DOCTYPE};

use crate::utils;

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/icon.svg" type="image/svg+xml" {}
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href="/" {
                            strong { "Skill Matcher" }
                        }
                    }
                }
                ul {
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())
            (icon())

            title { (format!("{title} - Skill Matcher")) }
        }

        body."container" {
            (header())
            (main(body))
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - Skill Matcher" }
        (body)
    }
}

/// Full page for direct loads, fragment with a title swap for htmx requests.
pub fn render(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body)
    }
}
