use super::*;

fn item(id: &str, name: &str, description: &str, status: ItemStatus) -> Item {
    Item {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        status,
        category: "Other".to_owned(),
        location: "Library".to_owned(),
        date: "2025-10-01".to_owned(),
        image_url: None,
    }
}

fn loaded(items: Vec<Item>) -> CatalogState {
    let mut state = CatalogState::default();
    assert!(state.begin_load());
    state.apply_loaded(Ok(items));
    state
}

fn ids(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn search_is_case_insensitive_on_name() {
    let state = CatalogState {
        search: "wallet".to_owned(),
        ..loaded(vec![item("1", "Wallet", "black leather", ItemStatus::Lost)])
    };
    assert_eq!(ids(&state.visible_items()), vec!["1"]);
}

#[test]
fn search_matches_description() {
    let mut state = loaded(vec![
        item("1", "Wallet", "black leather", ItemStatus::Lost),
        item("2", "Bottle", "steel, blue", ItemStatus::Found),
    ]);
    state.set_search("LEATHER".to_owned());
    assert_eq!(ids(&state.visible_items()), vec!["1"]);
}

#[test]
fn found_filter_keeps_only_found_items() {
    let mut state = loaded(vec![
        item("1", "Wallet", "", ItemStatus::Lost),
        item("2", "Keys", "", ItemStatus::Found),
    ]);
    state.set_status_filter(StatusFilter::Only(ItemStatus::Found));
    assert_eq!(ids(&state.visible_items()), vec!["2"]);
}

#[test]
fn filtered_views_never_leak_other_statuses() {
    let items = vec![
        item("1", "a", "x", ItemStatus::Lost),
        item("2", "b", "x", ItemStatus::Found),
        item("3", "c", "y", ItemStatus::Lost),
        item("4", "d", "y", ItemStatus::Found),
    ];
    for status in [ItemStatus::Lost, ItemStatus::Found] {
        for search in ["", "x", "Y", "zzz"] {
            let visible: Vec<_> = items
                .iter()
                .filter(|i| is_visible(i, StatusFilter::Only(status), search))
                .collect();
            assert!(visible.iter().all(|i| i.status == status));
        }
    }
}

#[test]
fn empty_search_with_all_filter_shows_everything() {
    let state = loaded(vec![item("1", "a", "", ItemStatus::Lost), item("2", "b", "", ItemStatus::Found)]);
    assert_eq!(state.visible_items().len(), 2);
}

#[test]
fn tab_labels_match_filter_order() {
    let labels: Vec<_> = StatusFilter::TABS.iter().map(|t| t.label()).collect();
    assert_eq!(labels, vec!["All", "Lost", "Found"]);
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_is_requested_once_per_mount() {
    let mut state = CatalogState::default();
    assert!(state.begin_load());
    assert!(state.loading);
    assert!(!state.begin_load());
}

#[test]
fn load_failure_is_not_surfaced() {
    let mut state = CatalogState::default();
    state.begin_load();
    state.apply_loaded(Err(PortalError::Network));
    assert!(!state.loading);
    assert!(state.items.is_empty());
    assert!(state.notice.is_none());
}

// =============================================================
// Claim selection
// =============================================================

#[test]
fn selecting_opens_exactly_one_claim() {
    let mut state = loaded(vec![item("1", "a", "", ItemStatus::Lost), item("2", "b", "", ItemStatus::Found)]);
    assert!(state.select("1"));
    assert!(!state.select("2"));
    assert_eq!(state.claiming.as_ref().map(|i| i.id.as_str()), Some("1"));

    state.close_claim(Some("done".to_owned()));
    assert!(state.claiming.is_none());
    assert_eq!(state.notice.as_deref(), Some("done"));
    assert!(state.select("2"));
    assert!(state.notice.is_none());
}

#[test]
fn selecting_unknown_item_is_refused() {
    let mut state = loaded(vec![item("1", "a", "", ItemStatus::Lost)]);
    assert!(!state.select("missing"));
    assert!(state.claiming.is_none());
}
