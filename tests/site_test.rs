//! Whole-page installation tests.

mod common;

use common::SamplePage;
use pantera_common::Modifier;
use pantera_dom::{Document, KeyEvent, MemoryDocument, Outcome};
use pantera_site::config::{load_config, SiteConfig};
use pantera_site::site;
use std::rc::Rc;

#[test]
fn installs_both_features() {
    let page = SamplePage::new("/episodes.html", 2);
    let site = site::install(Rc::clone(&page.doc), &SiteConfig::default());

    assert!(site.synchronizer().is_some());
    assert!(site.media().is_some());
    assert_eq!(page.active_links(), vec![page.nav_links[2]]);

    page.click(page.control);
    assert_eq!(page.iframes().len(), 1);
}

#[test]
fn navigation_survives_missing_media_markup() {
    let doc = Rc::new(MemoryDocument::new("/gallery.html"));
    let body = doc.body().unwrap();
    let link = doc.element(body, "a", &[("class", "nav-link"), ("href", "gallery.html")]);
    doc.text_element(body, "h1", &[], "Galería");

    let site = site::install(Rc::clone(&doc), &SiteConfig::default());

    assert!(site.media().is_none());
    assert!(site.synchronizer().is_some());
    assert!(doc.has_class(link, "active"));

    let outcome = doc.dispatch(
        pantera_dom::ListenTarget::Document,
        &pantera_dom::DomEvent::KeyDown(KeyEvent::new("h").with_modifier(Modifier::Alt)),
    );
    assert_eq!(outcome, Outcome::PreventDefault);
    assert_eq!(doc.navigations(), vec!["index.html".to_string()]);
}

#[test]
fn configured_shortcuts_and_classes_apply() {
    let config = load_config(
        r#"
[navigation]
active_class = "current"

[shortcuts]
modifier = "ctrl"
bindings = [{ key = "x", href = "extras.html", label = "Extras" }]
"#,
    )
    .unwrap();

    let page = SamplePage::new("/index.html", 0);
    site::install(Rc::clone(&page.doc), &config);

    assert!(page.doc.has_class(page.nav_links[0], "current"));
    assert!(!page.doc.has_class(page.nav_links[0], "active"));

    assert_eq!(page.key(KeyEvent::new("h").with_modifier(Modifier::Alt)), Outcome::Proceed);
    page.key(KeyEvent::new("x").with_modifier(Modifier::Ctrl));
    assert_eq!(page.doc.navigations(), vec!["extras.html".to_string()]);
}

#[test]
fn teardown_releases_everything() {
    let page = SamplePage::new("/gallery.html", 3);
    let site = site::install(Rc::clone(&page.doc), &SiteConfig::default());
    assert!(page.doc.listener_count() > 0);

    site.teardown();
    assert_eq!(page.doc.listener_count(), 0);
    assert!(page.doc.element_by_id("pantera-sr-only-style").is_none());

    page.click(page.section_link);
    page.click(page.control);
    assert!(page.doc.history().is_empty());
    assert!(page.iframes().is_empty());
}
