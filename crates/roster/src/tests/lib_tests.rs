use super::*;

use shared::domain::PersonId;

fn person(id: i64, name: &str, email: &str) -> PersonRecord {
    PersonRecord {
        id: PersonId(id),
        name: name.to_string(),
        email: email.to_string(),
        phone: format!("555-{id:04}"),
        country: "NZ".to_string(),
        role: Some(Role::Novice),
    }
}

fn numbered_roster(count: i64) -> Vec<PersonRecord> {
    (1..=count)
        .map(|i| person(i, &format!("Person {i}"), &format!("person{i}@example.com")))
        .collect()
}

fn ids(people: &[&PersonRecord]) -> Vec<i64> {
    people.iter().map(|p| p.id.0).collect()
}

#[test]
fn starts_on_first_page_with_empty_query() {
    let controller = RosterViewController::new();
    assert_eq!(controller.search_query(), "");
    assert_eq!(controller.current_page(), 1);
    assert!(!controller.is_collapsed());
}

#[test]
fn paginates_twenty_five_people_into_three_pages() {
    let roster = numbered_roster(25);
    let mut controller = RosterViewController::new();

    let view = controller.view(&roster);
    assert_eq!(view.total_pages, 3);
    assert_eq!(ids(view.paginated()), (1..=10).collect::<Vec<_>>());
    assert!(view.shows_pagination());
    assert!(!view.has_prev());

    controller.go_to_page(&roster, 3);
    let view = controller.view(&roster);
    assert_eq!(view.current_page, 3);
    assert_eq!(ids(view.paginated()), (21..=25).collect::<Vec<_>>());
    assert!(!view.has_next());
    assert_eq!(view.page_label(), "Page 3 of 3");
}

#[test]
fn query_matches_name_case_insensitively() {
    let roster = vec![
        person(1, "Alice", "a1@example.com"),
        person(2, "Bob", "b2@example.com"),
        person(3, "Carol", "c3@example.com"),
    ];
    let mut controller = RosterViewController::new();
    controller.set_search_query("al");

    let view = controller.view(&roster);
    assert_eq!(ids(&view.filtered), vec![1]);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert!(!view.shows_pagination());
}

#[test]
fn query_matches_email_too() {
    let roster = vec![
        person(1, "Alice", "alice@clinic.org"),
        person(2, "Bob", "bob@HOSPITAL.org"),
    ];
    let mut controller = RosterViewController::new();
    controller.set_search_query("Hospital");
    assert_eq!(ids(&controller.view(&roster).filtered), vec![2]);
}

#[test]
fn out_of_range_page_on_single_page_roster_clamps_to_one() {
    let roster = numbered_roster(3);
    let mut controller = RosterViewController::new();
    controller.go_to_page(&roster, 99);
    assert_eq!(controller.current_page(), 1);
    controller.go_to_page(&roster, -4);
    assert_eq!(controller.current_page(), 1);
}

#[test]
fn empty_roster_renders_no_users_state() {
    let roster: Vec<PersonRecord> = Vec::new();
    let controller = RosterViewController::new();
    let view = controller.view(&roster);
    assert!(view.filtered.is_empty());
    assert!(view.paginated().is_empty());
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert!(view.is_empty());
}

#[test]
fn setting_query_resets_page() {
    let roster = numbered_roster(30);
    let mut controller = RosterViewController::new();
    controller.go_to_page(&roster, 3);
    assert_eq!(controller.current_page(), 3);

    controller.set_search_query("person");
    assert_eq!(controller.current_page(), 1);

    controller.go_to_page(&roster, 2);
    controller.set_search_query("");
    assert_eq!(controller.current_page(), 1);
}

#[test]
fn prev_and_next_are_no_ops_at_the_edges() {
    let roster = numbered_roster(15);
    let mut controller = RosterViewController::new();

    controller.prev_page(&roster);
    assert_eq!(controller.current_page(), 1);

    controller.next_page(&roster);
    assert_eq!(controller.current_page(), 2);
    controller.next_page(&roster);
    assert_eq!(controller.current_page(), 2);

    controller.prev_page(&roster);
    assert_eq!(controller.current_page(), 1);
}

#[test]
fn view_reclamps_when_roster_shrinks() {
    let roster = numbered_roster(25);
    let mut controller = RosterViewController::new();
    controller.go_to_page(&roster, 3);

    let shrunk = numbered_roster(12);
    let view = controller.view(&shrunk);
    assert_eq!(view.current_page, 2);
    assert_eq!(ids(view.paginated()), vec![11, 12]);
    // Stored state is untouched by reading.
    assert_eq!(controller.current_page(), 3);
}

#[test]
fn collapse_does_not_change_derived_rows() {
    let roster = numbered_roster(5);
    let mut controller = RosterViewController::new();
    let expanded = ids(controller.view(&roster).paginated());

    controller.toggle_collapsed();
    let view = controller.view(&roster);
    assert!(view.collapsed);
    assert_eq!(ids(view.paginated()), expanded);

    controller.set_collapsed(false);
    assert!(!controller.is_collapsed());
}

#[test]
fn selecting_person_requests_detail_view() {
    let roster = numbered_roster(2);
    let controller = RosterViewController::new();
    let request = controller.select_person(&roster[1]);
    assert_eq!(request.target, ViewTarget::PersonDetail);
    assert_eq!(request.payload, roster[1]);
}

#[test]
fn role_change_is_reported_not_applied() {
    let roster = numbered_roster(1);
    let controller = RosterViewController::new();
    let request = controller.request_role_change(&roster[0], Role::Banned);
    assert_eq!(request.person_id, PersonId(1));
    assert_eq!(request.previous, Some(Role::Novice));
    assert_eq!(request.requested, Role::Banned);
    assert_eq!(roster[0].role, Some(Role::Novice));
}

#[test]
fn role_tones_cover_every_role_and_fall_back_to_neutral() {
    assert_eq!(role_tone(Some(Role::Test)), RoleTone::Blue);
    assert_eq!(role_tone(Some(Role::Novice)), RoleTone::Green);
    assert_eq!(role_tone(Some(Role::Admin)), RoleTone::Purple);
    assert_eq!(role_tone(Some(Role::Banned)), RoleTone::Red);
    assert_eq!(role_tone(None), RoleTone::Neutral);
}

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0), 1);
    assert_eq!(total_pages(10), 1);
    assert_eq!(total_pages(11), 2);
    assert_eq!(total_pages(20), 2);
    assert_eq!(total_pages(21), 3);
}

#[test]
fn clamp_page_handles_extremes() {
    assert_eq!(clamp_page(i64::MIN, 4), 1);
    assert_eq!(clamp_page(0, 4), 1);
    assert_eq!(clamp_page(i64::MAX, 4), 4);
    assert_eq!(clamp_page(3, 0), 1);
}
