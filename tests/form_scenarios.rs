use projdash::engine::ProjectStatus;
use projdash::ui::{Board, FormField, InputForm, SubmitError};

fn board_with(title: &str, description: &str, people: &str) -> Board {
    let mut board = Board::new();
    board.form = InputForm::with_values(title, description, people);
    board
}

fn field_values(board: &Board) -> Vec<String> {
    FormField::ALL
        .iter()
        .map(|f| board.form.field(*f).value().to_string())
        .collect()
}

#[test]
fn valid_submission_adds_active_project_and_clears_fields() {
    let mut board = board_with("Build API", "Design and implement", "3");

    let id = board.submit().expect("valid input should be accepted");

    let project = board.store.get(id).unwrap();
    assert_eq!(project.title, "Build API");
    assert_eq!(project.description, "Design and implement");
    assert_eq!(project.people, 3);
    assert_eq!(project.status, ProjectStatus::Active);

    assert_eq!(board.active_list.rendered_items(), vec!["Build API"]);
    assert!(board.finished_list.rendered_items().is_empty());
    assert_eq!(field_values(&board), vec!["", "", ""]);
}

#[test]
fn blank_title_is_rejected_and_fields_kept() {
    let mut board = board_with("", "ok desc", "5");

    let err = board.submit().unwrap_err();
    assert_eq!(
        err,
        SubmitError::InvalidInput {
            failed: vec![FormField::Title]
        }
    );
    assert_eq!(err.to_string(), "Invalid input");
    assert!(board.store.is_empty());
    assert_eq!(field_values(&board), vec!["", "ok desc", "5"]);
    assert_eq!(board.active_list.render_count(), 0);
}

#[test]
fn description_length_boundary() {
    let mut short = board_with("X", "shrt", "5");
    assert!(short.submit().is_err());
    assert!(short.store.is_empty());

    let mut exact = board_with("X", "short", "5");
    assert!(exact.submit().is_ok());
    assert_eq!(exact.store.len(), 1);
}

#[test]
fn description_length_counts_utf16_units() {
    // Three emoji are six UTF-16 units, enough for the minimum of five
    let mut emoji = board_with("X", "😀😀😀", "5");
    assert!(emoji.submit().is_ok());
    assert_eq!(emoji.active_list.rendered_items(), vec!["X"]);

    let mut too_short = board_with("X", "😀😀", "5");
    assert_eq!(
        too_short.submit().unwrap_err(),
        SubmitError::InvalidInput {
            failed: vec![FormField::Description]
        }
    );
}

#[test]
fn people_accepts_radix_prefixed_numbers() {
    for (people, expected) in [("0x5", 5), ("0b11", 3), ("0o7", 7), (" 0XA ", 10)] {
        let mut board = board_with("Build API", "Design and implement", people);
        let id = board.submit().expect("prefixed number should be accepted");
        assert_eq!(board.store.get(id).unwrap().people, expected, "people = {:?}", people);
    }

    for people in ["0xC", "-0x5", "0x", "0b2"] {
        let mut board = board_with("Build API", "Design and implement", people);
        assert!(board.submit().is_err(), "people = {:?}", people);
    }
}

#[test]
fn people_out_of_range_is_rejected() {
    for people in ["12", "0", "", "many", "-1"] {
        let mut board = board_with("Build API", "Design and implement", people);
        let err = board.submit().unwrap_err();
        assert_eq!(
            err,
            SubmitError::InvalidInput {
                failed: vec![FormField::People]
            },
            "people = {:?}",
            people
        );
        assert!(board.store.is_empty());
    }
}

#[test]
fn people_bounds_are_inclusive() {
    for people in ["1", "11", " 7 "] {
        let mut board = board_with("Build API", "Design and implement", people);
        assert!(board.submit().is_ok(), "people = {:?}", people);
    }
}

#[test]
fn lists_never_mix_statuses() {
    let mut board = Board::new();
    for (title, people) in [("one", "1"), ("two", "2"), ("three", "3")] {
        board.form = InputForm::with_values(title, "a long enough description", people);
        board.submit().unwrap();

        assert!(board.active_list.assigned_projects().iter().all(|p| p.is_active()));
        assert!(
            board
                .finished_list
                .assigned_projects()
                .iter()
                .all(|p| p.status == ProjectStatus::Finished)
        );
    }
    assert_eq!(board.active_list.rendered_items(), vec!["one", "two", "three"]);
}
