use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("token"), None);
    store.set("token", "abc");
    assert_eq!(store.get("token").as_deref(), Some("abc"));
    store.remove("token");
    assert_eq!(store.get("token"), None);
}

#[test]
fn memory_storage_clones_share_entries() {
    let store = MemoryStorage::new();
    let other = store.clone();
    store.set("isLoggedIn", "true");
    assert_eq!(other.get("isLoggedIn").as_deref(), Some("true"));
    other.clear();
    assert_eq!(store.get("isLoggedIn"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_outside_the_browser() {
    let store = BrowserStorage;
    store.set("token", "abc");
    assert_eq!(store.get("token"), None);
    store.remove("token");
}
