#![recursion_limit = "256"]

use app::content::{Anchor, PROFILE};
use app::pages::home::Index;
use chrono::Datelike;
use leptos::prelude::*;

const BADGE_CLASS: &str =
    "px-4 py-2 rounded-full text-sm font-medium bg-white border border-slate-200 text-slate-800";

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn render_home() -> String {
    setup();
    Owner::new().with(|| view! { <Index/> }.to_html())
}

/// The whole document as served for `/`, shell and router included.
fn render_document() -> String {
    setup();
    Owner::new().with(|| {
        let (meta_context, _) = leptos_meta::ServerMetaContext::new();
        provide_context(meta_context);
        provide_context(leptos_router::location::RequestUrl::new("/"));
        let options = LeptosOptions::builder().output_name("portfolio").build();
        app::shell(options).to_html()
    })
}

/// The markup between the first occurrence of `start` and the first
/// occurrence of `end` that follows it.
fn between<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
    let from = html.find(start).unwrap_or_else(|| panic!("`{start}' not rendered"));
    let to = html[from..]
        .find(end)
        .map(|offset| from + offset)
        .unwrap_or_else(|| panic!("`{end}' not rendered after `{start}'"));
    &html[from..to]
}

#[test]
fn every_section_renders_once() {
    let html = render_home();
    assert_eq!(1, html.matches("<main").count());
    assert_eq!(1, html.matches("<nav").count());
    assert_eq!(4, html.matches("<section").count());
    assert_eq!(1, html.matches("<form").count());
    assert_eq!(1, html.matches("<footer").count());
}

#[test]
fn anchor_targets_exist_once() {
    let html = render_home();
    for anchor in Anchor::ALL {
        let id = format!("id=\"{}\"", anchor.id());
        assert_eq!(1, html.matches(id.as_str()).count(), "{id}");
        let href = format!("href=\"{}\"", anchor.href());
        assert!(html.contains(href.as_str()), "no link to {}", anchor.href());
    }
}

#[test]
fn nav_links_every_anchor() {
    let html = render_home();
    let nav = between(&html, "<nav", "</nav>");
    for anchor in Anchor::ALL {
        assert!(nav.contains(&format!("href=\"{}\"", anchor.href())));
    }
}

#[test]
fn skills_render_three_categories_of_five_badges() {
    let html = render_home();
    let skills = between(&html, "id=\"skills\"", "id=\"projects\"");
    assert_eq!(15, skills.matches(BADGE_CLASS).count());

    let categories: Vec<&str> = skills.split("<h3").skip(1).collect();
    assert_eq!(3, categories.len());
    for category in categories {
        assert_eq!(5, category.matches(BADGE_CLASS).count());
    }
    assert!(skills.contains("Framer Motion"));
    assert!(skills.contains("Agile/Scrum"));
}

#[test]
fn projects_render_four_cards() {
    let html = render_home();
    let projects = between(&html, "id=\"projects\"", "id=\"contact\"");
    assert_eq!(4, projects.matches("<h3").count());
    assert_eq!(4, projects.matches("Voir le projet").count());
    for number in 1..=4 {
        assert!(projects.contains(&format!("Nom du Projet {number}")));
    }
    // second and fourth cards are staggered
    assert_eq!(2, projects.matches("md:mt-24").count());
}

#[test]
fn footer_shows_current_year() {
    let before = chrono::Local::now().year();
    let html = render_home();
    let after = chrono::Local::now().year();

    let footer = between(&html, "<footer", "</footer>");
    assert!(
        footer.contains(&format!("\u{a9} {before} Thaïs"))
            || footer.contains(&format!("\u{a9} {after} Thaïs")),
        "{footer}"
    );
}

#[test]
fn contact_form_fields_are_required() {
    let html = render_home();
    let form = between(&html, "<form", "</form>");
    assert!(form.contains("type=\"text\""));
    assert!(form.contains("id=\"name\""));
    assert!(form.contains("type=\"email\""));
    assert!(form.contains("id=\"email\""));
    assert!(form.contains("<textarea"));
    assert!(form.contains("id=\"message\""));
    assert_eq!(3, form.matches("required").count());
}

#[test]
fn contact_button_does_not_submit() {
    let html = render_home();
    let form = between(&html, "<form", "</form>");
    assert!(form.contains("type=\"button\""));
    assert!(!form.contains("type=\"submit\""));
    assert!(!form.contains("action="));
}

#[test]
fn document_carries_language_and_description() {
    let html = render_document();
    let root = between(&html, "<html", ">");
    assert!(root.contains("lang=\"fr\""), "{root}");
    assert!(root.contains("scroll-smooth"), "{root}");
    assert!(html.contains(&format!("content=\"{}\"", PROFILE.description)));
    let body = between(&html, "<body", ">");
    assert!(body.contains("antialiased"), "{body}");
    assert!(body.contains("selection:bg-primary"), "{body}");
}

#[test]
fn document_has_each_anchor_target_once() {
    let html = render_document();
    for anchor in Anchor::ALL {
        let id = format!("id=\"{}\"", anchor.id());
        assert_eq!(1, html.matches(id.as_str()).count(), "{id}");
    }
    assert_eq!(1, html.matches("<main").count());
    assert!(!html.contains("Page not found."));
}

#[test]
fn section_titles_keep_their_margin() {
    let html = render_home();
    let skills_title = between(&html, "id=\"skills\"", "</h2>");
    assert!(skills_title.contains("tracking-tight mb-12"), "{skills_title}");
    let projects_title = between(&html, "id=\"projects\"", "</h2>");
    assert!(projects_title.contains("tracking-tight mb-0"), "{projects_title}");
    assert!(!projects_title.contains("mb-12"), "{projects_title}");
}
