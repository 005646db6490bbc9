use super::*;

fn controller(store: &MemoryStore) -> ThemeController<&MemoryStore> {
    ThemeController::new(store, "theme")
}

// =============================================================
// Theme
// =============================================================

#[test]
fn parse_accepts_known_names_only() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn flip_is_an_involution() {
    assert_eq!(Theme::Light.flip(), Theme::Dark);
    assert_eq!(Theme::Dark.flip().flip(), Theme::Dark);
}

#[test]
fn icons_differ_per_theme() {
    assert_ne!(Theme::Light.icon_svg(), Theme::Dark.icon_svg());
    assert!(Theme::Light.icon_svg().starts_with("<svg"));
}

#[test]
fn icons_are_single_closed_paths() {
    for theme in [Theme::Light, Theme::Dark] {
        let svg = theme.icon_svg();
        assert!(svg.starts_with(r#"<svg viewBox="0 0 24 24""#), "{theme:?}");
        assert!(svg.ends_with("z\"/></svg>"), "{theme:?}");
        assert_eq!(svg.matches("<path").count(), 1, "{theme:?}");
    }
    assert!(Theme::Dark.icon_svg().contains("M21.64 13a1 1 0 00-1.05-.14"));
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn get_theme_defaults_to_light_when_unset() {
    let store = MemoryStore::new();
    assert_eq!(controller(&store).get_theme(), Theme::Light);
}

#[test]
fn get_theme_falls_back_on_invalid_value() {
    let store = MemoryStore::new();
    let themes = controller(&store);
    store.set("theme", "sepia");
    assert_eq!(themes.get_theme(), Theme::Light);
}

#[test]
fn set_theme_persists_name() {
    let store = MemoryStore::new();
    let themes = controller(&store);
    themes.set_theme(Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(themes.get_theme(), Theme::Dark);
}

#[test]
fn toggle_flips_page_theme_and_persists() {
    let store = MemoryStore::new();
    let themes = controller(&store);
    assert_eq!(themes.toggle(Some("light")), Theme::Dark);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn toggle_treats_missing_attribute_as_light() {
    let store = MemoryStore::new();
    let themes = controller(&store);
    assert_eq!(themes.toggle(None), Theme::Dark);
    assert_eq!(themes.toggle(Some("bogus")), Theme::Dark);
}

#[test]
fn double_toggle_restores_theme_and_stored_value() {
    let store = MemoryStore::new();
    let themes = controller(&store);
    themes.set_theme(Theme::Dark);
    let before = store.get("theme");

    let once = themes.toggle(Some(Theme::Dark.as_str()));
    let twice = themes.toggle(Some(once.as_str()));

    assert_eq!(twice, Theme::Dark);
    assert_eq!(store.get("theme"), before);
}

#[test]
fn controller_uses_configured_key() {
    let store = MemoryStore::new();
    let themes = ThemeController::new(&store, "site-theme");
    themes.set_theme(Theme::Dark);
    assert_eq!(store.get("site-theme").as_deref(), Some("dark"));
    assert_eq!(store.get("theme"), None);
}

#[test]
fn double_toggle_from_empty_store_leaves_light_persisted() {
    let store = MemoryStore::new();
    let themes = controller(&store);
    assert_eq!(store.get("theme"), None);

    let once = themes.toggle(None);
    let twice = themes.toggle(Some(once.as_str()));

    assert_eq!(twice, Theme::Light);
    assert_eq!(themes.get_theme(), Theme::Light);
    assert_eq!(store.get("theme").as_deref(), Some("light"));
}

#[test]
fn owned_store_still_works_without_a_borrowed_handle() {
    let themes = ThemeController::new(MemoryStore::new(), "theme");
    themes.set_theme(Theme::Dark);
    assert_eq!(themes.get_theme(), Theme::Dark);
}
