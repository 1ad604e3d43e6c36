use super::*;
use crate::util::guard::Access;

#[test]
fn report_actions_lead_to_protected_routes() {
    let reports: Vec<_> = ACTIONS.iter().filter(|(route, ..)| route.access() == Access::Protected).collect();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().any(|(route, ..)| *route == AppRoute::ReportLost));
    assert!(reports.iter().any(|(route, ..)| *route == AppRoute::ReportFound));
}

#[test]
fn browse_action_is_public() {
    assert!(ACTIONS.iter().any(|(route, ..)| route.access() == Access::Public && route.path() == "/browse"));
}
