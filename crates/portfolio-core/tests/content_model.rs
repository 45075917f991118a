//! Integration tests for the site's content and navigation model.
//!
//! Drives the catalog, filter, resolver, theme and shell together the way
//! the pages do, without a rendering environment.

use portfolio_core::{
    Catalog, CatalogError, Category, CategorySelection, DetailView, FileStore, NavShell,
    ProjectFilterState, Route, SiteConfig, ThemeMode, ThemeState, UnavailableStore, filter,
    resolve,
};

// ---------------------------------------------------------------------------
// Catalog, filter and resolver
// ---------------------------------------------------------------------------

#[test]
fn test_filter_by_every_category() {
    let catalog = Catalog::builtin();
    for category in Category::all() {
        let matched = filter(catalog.all(), CategorySelection::Only(*category));
        assert!(
            matched.iter().all(|r| r.category == *category),
            "{category} filter leaked another category"
        );
        let positions: Vec<usize> = matched
            .iter()
            .map(|m| catalog.all().iter().position(|r| r.id == m.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "catalog order lost");
    }

    let all = filter(catalog.all(), CategorySelection::All);
    let all_ids: Vec<_> = all.iter().map(|r| r.id).collect();
    let catalog_ids: Vec<_> = catalog.all().iter().map(|r| r.id).collect();
    assert_eq!(all_ids, catalog_ids);
}

#[test]
fn test_mobile_filter_has_one_record() {
    let mobile = filter(
        Catalog::builtin().all(),
        CategorySelection::Only(Category::Mobile),
    );
    assert_eq!(mobile.len(), 1);
    assert_eq!(mobile[0].id, "mobile-app");
}

#[test]
fn test_resolve_job_portal() {
    let project = resolve(Catalog::builtin(), "job-portal").unwrap();
    assert_eq!(project.title, "Job Portal");
    assert_eq!(project.category, Category::FullStack);
}

#[test]
fn test_resolve_missing_ids() {
    for id in ["does-not-exist", "nonexistent-slug", "", "JOB-PORTAL"] {
        assert_eq!(
            resolve(Catalog::builtin(), id),
            Err(CatalogError::NotFound { id: id.to_string() })
        );
    }
}

#[test]
fn test_every_card_link_resolves() {
    let catalog = Catalog::builtin();
    for record in catalog.all() {
        match Route::parse(&record.detail_path()) {
            Route::ProjectDetail { id } => {
                assert!(DetailView::for_id(catalog, &id).is_found(), "{id} has no detail page");
            }
            other => panic!("card link parsed to {other:?}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Theme persistence across sessions
// ---------------------------------------------------------------------------

#[test]
fn test_theme_survives_reload() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = ThemeState::initialize(Box::new(FileStore::in_dir(dir.path())), None);
    assert_eq!(session.mode(), ThemeMode::Light);
    assert_eq!(session.toggle(), ThemeMode::Dark);
    drop(session);

    // Fresh session, fresh store handle, same file
    let reloaded = ThemeState::initialize(
        Box::new(FileStore::in_dir(dir.path())),
        Some(ThemeMode::Light),
    );
    assert_eq!(reloaded.mode(), ThemeMode::Dark);
}

#[test]
fn test_theme_without_storage_falls_back() {
    let mut session = ThemeState::initialize(Box::new(UnavailableStore::new("blocked")), None);
    session.toggle();
    assert_eq!(session.mode(), ThemeMode::Dark);

    let reloaded = ThemeState::initialize(Box::new(UnavailableStore::new("blocked")), None);
    assert_eq!(reloaded.mode(), ThemeMode::Light);
}

#[test]
fn test_config_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let config = SiteConfig::new(dir.path()).with_color_scheme(ThemeMode::Dark);

    let mut session = ThemeState::initialize(config.preference_store(), config.color_scheme);
    assert_eq!(session.mode(), ThemeMode::Dark);
    session.toggle();

    let reloaded = ThemeState::initialize(config.preference_store(), config.color_scheme);
    assert_eq!(reloaded.mode(), ThemeMode::Light);
}

// ---------------------------------------------------------------------------
// Shell + page state
// ---------------------------------------------------------------------------

#[test]
fn test_browse_to_detail_and_back() {
    let catalog = Catalog::builtin();
    let mut shell = NavShell::new(Route::Home);
    let mut projects_page = ProjectFilterState::new();

    shell.toggle_menu();
    shell.navigate_to("/projects");
    assert!(!shell.menu_open());
    assert!(shell.is_active("/projects"));

    projects_page.select(CategorySelection::Only(Category::Mobile));
    let card = projects_page.apply(catalog)[0];
    shell.navigate_to(&card.detail_path());

    match shell.route() {
        Route::ProjectDetail { id } => assert_eq!(id, "mobile-app"),
        other => panic!("unexpected route {other:?}"),
    }

    assert!(shell.back());
    assert_eq!(shell.route(), &Route::Projects);

    // Re-entering the page starts from a fresh filter
    assert_eq!(ProjectFilterState::new().selected, CategorySelection::All);
}

#[test]
fn test_unknown_detail_renders_fallback() {
    let mut shell = NavShell::new(Route::Projects);
    shell.navigate_to("/projects/does-not-exist");

    let Route::ProjectDetail { id } = shell.route().clone() else {
        panic!("expected a detail route");
    };
    match DetailView::for_id(Catalog::builtin(), &id) {
        DetailView::Fallback { back_route, .. } => {
            shell.navigate(back_route);
            assert_eq!(shell.route(), &Route::Projects);
        }
        DetailView::Project(p) => panic!("resolved unexpected project {}", p.id),
    }
}
