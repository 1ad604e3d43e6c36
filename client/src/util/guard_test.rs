use super::*;
use crate::util::storage::MemoryStorage;

// =============================================================
// Route table
// =============================================================

const ROUTES: [AppRoute; 6] = [
    AppRoute::Browse,
    AppRoute::Login,
    AppRoute::Signup,
    AppRoute::Dashboard,
    AppRoute::ReportLost,
    AppRoute::ReportFound,
];

#[test]
fn protected_routes_are_dashboard_and_reports() {
    let protected: Vec<_> = ROUTES
        .into_iter()
        .filter(|r| r.access() == Access::Protected)
        .collect();
    assert_eq!(protected, vec![AppRoute::Dashboard, AppRoute::ReportLost, AppRoute::ReportFound]);
}

#[test]
fn route_paths_are_distinct_and_absolute() {
    let mut paths: Vec<_> = ROUTES.into_iter().map(AppRoute::path).collect();
    assert!(paths.iter().all(|p| p.starts_with('/')));
    paths.sort_unstable();
    paths.dedup();
    assert_eq!(paths.len(), ROUTES.len());
}

#[test]
fn home_is_not_a_protected_route() {
    assert_eq!(AppRoute::Browse.access(), Access::Public);
    assert_ne!(HOME_PATH, LOGIN_PATH);
}

// =============================================================
// Guard decisions
// =============================================================

#[test]
fn public_views_always_render() {
    assert_eq!(evaluate(Access::Public, false), GuardDecision::Render);
    assert_eq!(evaluate(Access::Public, true), GuardDecision::Render);
}

#[test]
fn protected_views_need_session() {
    assert_eq!(evaluate(Access::Protected, true), GuardDecision::Render);
    assert_eq!(evaluate(Access::Protected, false), GuardDecision::Redirect("/login"));
}

#[test]
fn check_entry_blocks_after_storage_cleared_mid_visit() {
    let store = MemoryStorage::new();
    let mut manager = SessionManager::restore(store.clone());
    manager.establish("jwt".to_owned());
    assert_eq!(check_entry(&mut manager, Access::Protected), GuardDecision::Render);

    store.clear();
    assert_eq!(check_entry(&mut manager, Access::Protected), GuardDecision::Redirect(LOGIN_PATH));
    assert!(!manager.is_authenticated());
}

#[test]
fn check_entry_allows_public_without_session() {
    let mut manager = SessionManager::restore(MemoryStorage::new());
    assert_eq!(check_entry(&mut manager, Access::Public), GuardDecision::Render);
}
