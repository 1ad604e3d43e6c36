use super::*;

#[test]
fn each_kind_has_its_own_copy() {
    let lost = form_copy(ReportKind::Lost);
    let found = form_copy(ReportKind::Found);
    assert_ne!(lost.heading, found.heading);
    assert_ne!(lost.submit_label, found.submit_label);
}

#[test]
fn photo_label_matches_requirement() {
    for kind in [ReportKind::Lost, ReportKind::Found] {
        let optional = form_copy(kind).photo_label.contains("optional");
        assert_eq!(optional, !kind.requires_image());
    }
}
