//! End-to-end service tests over real files.

use std::path::PathBuf;

use hn_app::{AppError, LayoutOp, Selection, edit_service, network_service};
use hn_graph::NodeAdjacency;

const BASIN: &str = r#"
version: 1
name: Test basin
nodes:
  - id: A
    name: Headgate
    kind: { type: Diversion }
    x: 0.0
    y: 0.0
    downstream: B
  - id: B
    name: Well field
    kind: { type: Well }
    x: 1.0
    y: 7.0
    downstream: C
  - id: C
    name: Gage
    kind: { type: StreamGage }
    x: 5.0
    y: 2.0
    downstream: J
  - id: T
    name: Tributary
    kind: { type: Reservoir }
    x: 20.0
    y: 0.0
    downstream: J
  - id: J
    name: Junction
    kind: { type: Confluence }
    x: 9.0
    y: 10.0
    downstream: E
  - id: E
    name: End
    kind: { type: End }
    x: 9.0
    y: 20.0
"#;

fn write_basin(tag: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "hn_app_{}_{}.yaml",
        std::process::id(),
        tag
    ));
    std::fs::write(&path, BASIN).unwrap();
    path
}

#[test]
fn space_evenly_then_save_and_reload() {
    let path = write_basin("space");
    let mut open = network_service::open(&path).unwrap();

    let outcome = edit_service::apply(&mut open, LayoutOp::SpaceEvenly, &["J", "A", "C", "B"]).unwrap();
    assert_eq!(outcome.moved, 2);
    assert!(network_service::summarize(&open).dirty);

    assert_eq!(network_service::save(&mut open).unwrap(), 2);
    assert!(!network_service::summarize(&open).dirty);
    assert_eq!(network_service::save(&mut open).unwrap(), 0);

    let reopened = network_service::open(&path).unwrap();
    std::fs::remove_file(&path).ok();
    let net = reopened.network();
    let b = net.find("B").unwrap();
    let c = net.find("C").unwrap();
    assert_eq!(net.position(b).map(|p| (p.x, p.y)), Some((3.0, 10.0 / 3.0)));
    assert_eq!(net.position(c).map(|p| (p.x, p.y)), Some((6.0, 20.0 / 3.0)));
    assert_eq!(reopened.file.nodes[1].name, "Well field");
}

#[test]
fn branch_selection_reports_reach_rule() {
    let path = write_basin("branch");
    let mut open = network_service::open(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let err = edit_service::apply(&mut open, LayoutOp::SpaceEvenly, &["C", "T", "J"]).unwrap_err();
    assert!(matches!(err, AppError::NotAReach(_)));
    assert!(!network_service::summarize(&open).dirty);
}

#[test]
fn snap_and_undo() {
    let path = write_basin("snap");
    let mut open = network_service::open(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let outcome = edit_service::apply(&mut open, LayoutOp::SnapX, &["C", "J", "E"]).unwrap();
    assert_eq!(outcome.moved, 2);
    let c = open.network().find("C").unwrap();
    assert_eq!(open.network().position(c).map(|p| p.x), Some(9.0));

    assert_eq!(
        edit_service::undo(&mut open).unwrap().as_deref(),
        Some("snap x to confluence")
    );
    assert_eq!(open.network().position(c).map(|p| p.x), Some(5.0));

    let none = edit_service::apply(&mut open, LayoutOp::SnapY, &["A", "B"]).unwrap();
    assert_eq!(none.moved, 0);
}

#[test]
fn sequence_and_reach_by_common_id() {
    let path = write_basin("seq");
    let open = network_service::open(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let ordered = edit_service::sequence_ids(open.network(), &["E", "C", "J"]).unwrap();
    assert_eq!(ordered, vec!["C", "J", "E"]);

    let reach = edit_service::reach_ids(open.network(), "B", "E").unwrap();
    assert_eq!(reach, vec!["B", "C", "J", "E"]);

    let summary = network_service::summarize(&open);
    assert_eq!(summary.node_count, 6);
    assert_eq!(summary.confluence_count, 1);
    assert_eq!(summary.headwater_count, 2);
    assert_eq!(summary.terminal_count, 1);
}

#[test]
fn unknown_ids_and_missing_files() {
    let path = write_basin("unknown");
    let mut open = network_service::open(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let err = edit_service::apply(&mut open, LayoutOp::SnapX, &["A", "nope"]).unwrap_err();
    assert!(matches!(err, AppError::Graph(_)));

    let empty: [&str; 0] = [];
    let err = edit_service::apply(&mut open, LayoutOp::SnapX, &empty).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));

    let err = network_service::open(&path).unwrap_err();
    assert!(matches!(err, AppError::NetworkFileRead { .. }));
}

#[test]
fn dry_run_leaves_file_untouched() {
    let path = write_basin("dry");
    let selection = Selection::Ids(vec!["A".into(), "B".into(), "C".into(), "J".into()]);
    let run = edit_service::run_edit(&path, LayoutOp::SpaceEvenly, &selection, true).unwrap();
    let on_disk = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(run.outcome.moved, 2);
    assert_eq!(run.written, 0);
    assert!(network_service::summarize(&run.open).dirty);
    assert_eq!(on_disk, BASIN);
}

#[test]
fn reach_selection_matches_explicit_ids() {
    let by_ids = write_basin("by_ids");
    let by_reach = write_basin("by_reach");
    let ids = Selection::Ids(vec!["J".into(), "A".into(), "C".into(), "B".into()]);
    let reach = Selection::Reach {
        from: "A".into(),
        to: "J".into(),
    };

    let a = edit_service::run_edit(&by_ids, LayoutOp::SpaceEvenly, &ids, false).unwrap();
    let b = edit_service::run_edit(&by_reach, LayoutOp::SpaceEvenly, &reach, false).unwrap();
    assert_eq!(a.outcome, b.outcome);
    assert_eq!(a.written, 2);
    assert_eq!(b.written, 2);

    let saved_ids = std::fs::read_to_string(&by_ids).unwrap();
    let saved_reach = std::fs::read_to_string(&by_reach).unwrap();
    std::fs::remove_file(&by_ids).ok();
    std::fs::remove_file(&by_reach).ok();
    assert_ne!(saved_ids, BASIN);
    assert_eq!(saved_ids, saved_reach);
}

#[test]
fn zero_count_snap_does_not_rewrite() {
    let path = write_basin("no_snap");
    let selection = Selection::Ids(vec!["A".into(), "B".into()]);
    let run = edit_service::run_edit(&path, LayoutOp::SnapY, &selection, false).unwrap();
    let on_disk = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(run.outcome.moved, 0);
    assert_eq!(run.written, 0);
    assert_eq!(on_disk, BASIN);
}

#[test]
fn failed_edit_leaves_nothing_to_save() {
    let path = write_basin("failed");
    let mut open = network_service::open(&path).unwrap();

    let err = edit_service::apply(&mut open, LayoutOp::SpaceEvenly, &["A", "B", "T"]).unwrap_err();
    assert!(matches!(err, AppError::NotAReach(_)));
    assert_eq!(network_service::save(&mut open).unwrap(), 0);
    let on_disk = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(on_disk, BASIN);
}

#[test]
fn undo_to_saved_positions_needs_no_save() {
    let path = write_basin("undo_clean");
    let mut open = network_service::open(&path).unwrap();
    std::fs::remove_file(&path).ok();

    edit_service::apply(&mut open, LayoutOp::SnapX, &["C", "J", "E"]).unwrap();
    edit_service::undo(&mut open).unwrap();
    assert!(!network_service::summarize(&open).dirty);
}

#[test]
fn unreadable_path_reports_the_read_error() {
    let dir = std::env::temp_dir().join(format!("hn_app_{}_dir.yaml", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let err = network_service::open(&dir).unwrap_err();
    std::fs::remove_dir(&dir).ok();

    match err {
        AppError::NetworkFileRead { path, source } => {
            assert_eq!(path, dir);
            assert_ne!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected a read error, got {other:?}"),
    }
}
