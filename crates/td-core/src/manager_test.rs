use super::*;
use crate::source::StaticPaths;

/// Two chains into T: A -> B -> T and C -> T
fn simple_source() -> StaticPaths {
    StaticPaths::new(vec![vec!["A", "B", "T"], vec!["C", "T"]])
}

struct FailingSource;

impl DependencyPathSource for FailingSource {
    fn collect_all_dependency_paths(&self, target: &str) -> CoreResult<Vec<Vec<TableName>>> {
        Err(CoreError::Traversal {
            message: format!("no foreign keys loaded for {target}"),
        })
    }
}

#[test]
fn test_build_manager() {
    let source = simple_source();
    let manager = DependencyManager::new("T", &source).unwrap();

    assert_eq!(manager.target_table(), "T");
    assert_eq!(manager.table_dependency_count(), 2);
    assert_eq!(manager.all_referencing_tables(), vec!["A", "C"]);
    assert_eq!(
        manager.table_dependency(0).unwrap().path().to_string(),
        "A -> B -> T"
    );
    assert_eq!(manager.table_dependency(1).unwrap().path().to_string(), "C -> T");
}

#[test]
fn test_refers_to_checks_order() {
    let source = simple_source();
    let manager = DependencyManager::new("T", &source).unwrap();

    assert!(manager.refers_to("A", "T"));
    assert!(manager.refers_to("A", "B"));
    assert!(manager.refers_to("B", "T"));
    assert!(manager.refers_to("C", "T"));
    // Both present, wrong order
    assert!(!manager.refers_to("B", "A"));
    assert!(!manager.refers_to("T", "A"));
    // Never in the same chain
    assert!(!manager.refers_to("A", "C"));
    // Unknown tables
    assert!(!manager.refers_to("Z", "T"));
}

#[test]
fn test_refers_to_head_of_chain() {
    // The referrer sits at index 0 of the deciding chain
    let source = StaticPaths::new(vec![vec!["A", "B", "C", "T"]]);
    let manager = DependencyManager::new("T", &source).unwrap();

    assert!(manager.refers_to("A", "C"));
    assert!(!manager.refers_to("C", "A"));
}

#[test]
fn test_refers_to_first_matching_chain_wins() {
    // The chains disagree on the order of A and B; the first one decides
    let source = StaticPaths::new(vec![vec!["B", "A", "T"], vec!["A", "B", "T"]]);
    let manager = DependencyManager::new("T", &source).unwrap();

    assert!(!manager.refers_to("A", "B"));
    assert!(manager.refers_to("B", "A"));
}

#[test]
fn test_refers_to_skips_chains_missing_a_table() {
    let source = StaticPaths::new(vec![vec!["X", "T"], vec!["A", "B", "T"]]);
    let manager = DependencyManager::new("T", &source).unwrap();

    assert!(manager.refers_to("A", "B"));
}

#[test]
fn test_refers_to_same_table() {
    let source = simple_source();
    let manager = DependencyManager::new("T", &source).unwrap();

    assert!(!manager.refers_to("A", "A"));
}

#[test]
fn test_index_bounds() {
    let source = simple_source();
    let manager = DependencyManager::new("T", &source).unwrap();

    assert!(manager.table_dependency(0).is_ok());
    assert!(manager.table_dependency(1).is_ok());

    let err = manager.table_dependency(2).unwrap_err();
    assert!(matches!(
        err,
        CoreError::IndexOutOfRange { index: 2, count: 2 }
    ));
    assert!(matches!(
        manager.table_dependency(usize::MAX),
        Err(CoreError::IndexOutOfRange { .. })
    ));
}

#[test]
fn test_referencing_tables_keep_duplicates() {
    let source = StaticPaths::new(vec![
        vec!["A", "B", "T"],
        vec!["C", "T"],
        vec!["A", "T"],
    ]);
    let manager = DependencyManager::new("T", &source).unwrap();

    assert_eq!(manager.all_referencing_tables(), vec!["A", "C", "A"]);
    assert_eq!(manager.distinct_referencing_tables(), vec!["A", "C"]);
}

#[test]
fn test_dependencies_between() {
    let source = StaticPaths::new(vec![
        vec!["A", "B", "T"],
        vec!["C", "T"],
        vec!["A", "T"],
    ]);
    let manager = DependencyManager::new("T", &source).unwrap();

    let between = manager.dependencies_between("A", "T");
    assert_eq!(between.len(), 2);
    assert!(between[0].equals(&["A", "B", "T"]));
    assert!(between[1].equals(&["A", "T"]));

    assert!(manager.dependencies_between("B", "T").is_empty());
}

#[test]
fn test_max_level() {
    let source = simple_source();
    let manager = DependencyManager::new("T", &source).unwrap();
    assert_eq!(manager.max_level(), 3);

    let empty = StaticPaths::default();
    let manager = DependencyManager::new("T", &empty).unwrap();
    assert_eq!(manager.max_level(), 0);
    assert_eq!(manager.table_dependency_count(), 0);
    assert!(manager.all_referencing_tables().is_empty());
    assert!(!manager.refers_to("A", "T"));
}

#[test]
fn test_iteration_order() {
    let source = simple_source();
    let manager = DependencyManager::new("T", &source).unwrap();

    let rendered: Vec<String> = manager.iter().map(|d| d.path().to_string()).collect();
    assert_eq!(rendered, vec!["A -> B -> T", "C -> T"]);

    let heads: Vec<&str> = (&manager)
        .into_iter()
        .map(|d| d.source_table().as_str())
        .collect();
    assert_eq!(heads, vec!["A", "C"]);
    assert_eq!(manager.dependencies().len(), 2);
}

#[test]
fn test_malformed_chain_fails_whole_manager() {
    let source = StaticPaths::new(vec![vec!["A", "T"], vec!["T"]]);
    let err = DependencyManager::new("T", &source).unwrap_err();
    assert!(matches!(err, CoreError::InvalidDependency { .. }));
}

#[test]
fn test_empty_chain_is_invalid_dependency() {
    let source = StaticPaths::new(vec![Vec::<&str>::new()]);
    let err = DependencyManager::new("T", &source).unwrap_err();
    assert!(matches!(err, CoreError::InvalidDependency { .. }));
}

#[test]
fn test_chain_not_ending_at_target() {
    let source = StaticPaths::new(vec![vec!["A", "B"]]);
    let err = DependencyManager::new("T", &source).unwrap_err();
    match err {
        CoreError::TargetMismatch { target, path } => {
            assert_eq!(target, "T");
            assert_eq!(path, "A -> B");
        }
        other => panic!("Expected TargetMismatch, got {other:?}"),
    }
}

#[test]
fn test_source_error_propagates() {
    let err = DependencyManager::new("T", &FailingSource).unwrap_err();
    assert!(matches!(err, CoreError::Traversal { .. }));
    assert!(DependencyManager::new_lenient("T", &FailingSource).is_err());
}

#[test]
fn test_lenient_skips_malformed_chains() {
    let source = StaticPaths::new(vec![
        vec!["A", "B", "T"],
        vec!["T"],
        vec!["C", "T"],
        vec!["D", "E"],
    ]);
    let (manager, skipped) = DependencyManager::new_lenient("T", &source).unwrap();

    assert_eq!(manager.table_dependency_count(), 2);
    assert_eq!(manager.all_referencing_tables(), vec!["A", "C"]);
    assert_eq!(skipped.len(), 2);
    assert!(matches!(skipped[0], CoreError::InvalidDependency { .. }));
    assert!(matches!(skipped[1], CoreError::TargetMismatch { .. }));
}

#[test]
fn test_source_is_retained() {
    let source = simple_source();
    let manager = DependencyManager::new("T", &source).unwrap();

    // The retained source can be asked again
    let again = DependencyManager::new("T", manager.source()).unwrap();
    assert_eq!(again.table_dependency_count(), 2);
}

#[test]
fn test_dyn_source() {
    let source: Box<dyn DependencyPathSource> = Box::new(simple_source());
    let manager = DependencyManager::new("T", &*source).unwrap();
    assert_eq!(manager.table_dependency_count(), 2);
}
