//! Reporting structure calculation.
//!
//! Walks the direct-report relation depth-first from a root employee,
//! counting every employee reachable below it, then assembles the resolved
//! report tree bottom-up from the walk. Neither step recurses, so the depth
//! of the org chart never reaches the call stack.
//!
//! The org chart must be a forest. An employee reached twice during one walk
//! aborts the walk with [`DirectoryError::ReportingCycle`] instead of
//! looping forever. The nested tree handed to serializers is bounded by a
//! maximum depth; a deeper chart fails with [`DirectoryError::ReportingTooDeep`].

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{Employee, ReportNode, ReportingStructure};
use crate::store::EmployeeRepository;

use super::RequestContext;

/// Direct reports fetched during one walk, keyed by manager.
#[derive(Debug, Default)]
struct ReportWalk {
    reports_by_manager: HashMap<String, Vec<Employee>>,
    /// Managers in walk order; a manager always precedes its own reports.
    managers: Vec<String>,
    total: usize,
}

async fn walk_reports<R>(
    repo: &R,
    root_id: &str,
    max_depth: Option<usize>,
) -> DirectoryResult<ReportWalk>
where
    R: EmployeeRepository + ?Sized,
{
    let mut walk = ReportWalk::default();
    let mut visited: HashSet<String> = HashSet::from([root_id.to_string()]);
    let mut pending = vec![(root_id.to_string(), 0usize)];

    while let Some((manager_id, depth)) = pending.pop() {
        // An unresolvable employee has no further reports.
        let Some(reports) = repo.get_direct_reports(&manager_id).await else {
            continue;
        };
        if reports.is_empty() {
            continue;
        }
        if let Some(limit) = max_depth.filter(|limit| depth >= *limit) {
            return Err(DirectoryError::ReportingTooDeep {
                employee_id: root_id.to_string(),
                max_depth: limit,
            });
        }

        walk.total += reports.len();
        for report in &reports {
            if !visited.insert(report.employee_id.clone()) {
                return Err(DirectoryError::ReportingCycle {
                    employee_id: report.employee_id.clone(),
                });
            }
            pending.push((report.employee_id.clone(), depth + 1));
        }
        walk.managers.push(manager_id.clone());
        walk.reports_by_manager.insert(manager_id, reports);
    }

    Ok(walk)
}

fn assemble(root: Employee, walk: ReportWalk) -> ReportNode {
    let ReportWalk {
        mut reports_by_manager,
        managers,
        ..
    } = walk;

    // Reverse walk order finishes every manager's reports before the manager.
    let mut finished: HashMap<String, Vec<ReportNode>> = HashMap::new();
    for manager_id in managers.into_iter().rev() {
        let reports = reports_by_manager.remove(&manager_id).unwrap_or_default();
        let nodes = reports
            .into_iter()
            .map(|report| {
                let below = finished.remove(&report.employee_id).unwrap_or_default();
                ReportNode::new(report, below)
            })
            .collect();
        finished.insert(manager_id, nodes);
    }

    let below = finished.remove(&root.employee_id).unwrap_or_default();
    ReportNode::new(root, below)
}

/// Counts the employees reporting to `root_id`, directly or indirectly.
///
/// The root itself is not counted, so a leaf yields 0. The root is assumed to
/// exist; an unknown root also yields 0. No depth limit applies.
///
/// # Errors
///
/// Returns [`DirectoryError::ReportingCycle`] if an employee is reached twice.
pub async fn count_reports<R>(repo: &R, root_id: &str) -> DirectoryResult<usize>
where
    R: EmployeeRepository + ?Sized,
{
    Ok(walk_reports(repo, root_id, None).await?.total)
}

/// Computes the reporting structure of an already-resolved employee.
///
/// The returned view nests every report under its manager and carries the
/// total report count. The tree may be at most `max_depth` levels deep below
/// the root. Nothing is written to the repository.
///
/// # Errors
///
/// - [`DirectoryError::ReportingCycle`] if an employee is reached twice
/// - [`DirectoryError::ReportingTooDeep`] if reports sit more than `max_depth` levels down
pub async fn calculate_reporting_structure<R>(
    ctx: &RequestContext,
    repo: &R,
    root: Employee,
    max_depth: usize,
) -> DirectoryResult<ReportingStructure>
where
    R: EmployeeRepository + ?Sized,
{
    let walk = match walk_reports(repo, &root.employee_id, Some(max_depth)).await {
        Ok(walk) => walk,
        Err(err) => {
            warn!(
                correlation_id = %ctx.correlation_id(),
                employee_id = %root.employee_id,
                error = %err,
                "Reporting structure walk aborted"
            );
            return Err(err);
        }
    };

    let total_report_count = walk.total;
    let employee = assemble(root, walk);

    debug!(
        correlation_id = %ctx.correlation_id(),
        employee_id = %employee.employee_id,
        total_report_count,
        "Reporting structure calculated"
    );

    Ok(ReportingStructure {
        employee,
        total_report_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use proptest::prelude::*;

    use crate::models::EmployeeRef;
    use crate::store::MemoryStore;

    fn employee(id: &str, reports: &[&str]) -> Employee {
        Employee {
            employee_id: id.to_string(),
            first_name: id.to_string(),
            last_name: "Test".to_string(),
            position: "Developer".to_string(),
            department: "Engineering".to_string(),
            direct_reports: reports.iter().map(|r| EmployeeRef::new(*r)).collect(),
        }
    }

    async fn store_with(employees: Vec<Employee>) -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        store.seed(employees).await.unwrap();
        store
    }

    async fn beatles() -> Arc<MemoryStore> {
        store_with(vec![
            employee("john", &["paul", "ringo"]),
            employee("paul", &[]),
            employee("ringo", &["pete", "george"]),
            employee("pete", &[]),
            employee("george", &[]),
        ])
        .await
    }

    #[tokio::test]
    async fn test_john_has_four_reports() {
        let store = beatles().await;
        assert_eq!(count_reports(&store.session(), "john").await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_middle_manager_counts_own_subtree() {
        let store = beatles().await;
        assert_eq!(count_reports(&store.session(), "ringo").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_leaf_has_zero_reports() {
        let store = beatles().await;
        assert_eq!(count_reports(&store.session(), "paul").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unknown_root_has_zero_reports() {
        let store = beatles().await;
        assert_eq!(count_reports(&store.session(), "ghost").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_cycle_fails_fast() {
        let store = store_with(vec![
            employee("a", &["b"]),
            employee("b", &["c"]),
            employee("c", &["a"]),
        ])
        .await;

        match count_reports(&store.session(), "a").await {
            Err(DirectoryError::ReportingCycle { employee_id }) => assert_eq!(employee_id, "a"),
            other => panic!("Expected ReportingCycle, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_self_report_fails_fast() {
        let store = store_with(vec![employee("narcissus", &["narcissus"])]).await;
        assert!(matches!(
            count_reports(&store.session(), "narcissus").await,
            Err(DirectoryError::ReportingCycle { .. })
        ));
    }

    #[tokio::test]
    async fn test_structure_nests_reports_under_managers() {
        let store = beatles().await;
        let session = store.session();
        let john = session.get_by_id("john").await.unwrap();

        let structure = calculate_reporting_structure(&RequestContext::new(), &session, john, 8)
            .await
            .unwrap();

        assert_eq!(structure.total_report_count, 4);
        assert_eq!(structure.employee.employee_id, "john");
        let ids: Vec<&str> = structure
            .employee
            .direct_reports
            .iter()
            .map(|r| r.employee_id.as_str())
            .collect();
        assert_eq!(ids, vec!["paul", "ringo"]);
        let ringo = structure.employee.direct_report("ringo").unwrap();
        assert!(ringo.direct_report("pete").is_some());
        assert!(ringo.direct_report("george").is_some());
        let paul = structure.employee.direct_report("paul").unwrap();
        assert!(paul.direct_reports.is_empty());
    }

    /// `e0` manages `e1`, which manages `e2`, and so on down to `e{len - 1}`.
    fn chain(len: usize) -> Vec<Employee> {
        (0..len)
            .map(|i| {
                let next = format!("e{}", i + 1);
                let reports: Vec<&str> = if i + 1 < len { vec![next.as_str()] } else { vec![] };
                employee(&format!("e{}", i), &reports)
            })
            .collect()
    }

    fn depth_of(node: &ReportNode) -> usize {
        let mut depth = 0;
        let mut current = node;
        while let Some(next) = current.direct_reports.first() {
            depth += 1;
            current = next;
        }
        depth
    }

    #[tokio::test]
    async fn test_chain_within_depth_limit_is_fully_nested() {
        let store = store_with(chain(200)).await;
        let session = store.session();
        let root = session.get_by_id("e0").await.unwrap();

        let structure = calculate_reporting_structure(&RequestContext::new(), &session, root, 199)
            .await
            .unwrap();

        assert_eq!(structure.total_report_count, 199);
        assert_eq!(depth_of(&structure.employee), 199);
    }

    #[tokio::test]
    async fn test_chain_beyond_depth_limit_is_rejected() {
        let store = store_with(chain(5_000)).await;
        let session = store.session();
        let root = session.get_by_id("e0").await.unwrap();

        let result =
            calculate_reporting_structure(&RequestContext::new(), &session, root, 64).await;

        match result {
            Err(DirectoryError::ReportingTooDeep {
                employee_id,
                max_depth,
            }) => {
                assert_eq!(employee_id, "e0");
                assert_eq!(max_depth, 64);
            }
            other => panic!("Expected ReportingTooDeep, got {:?}", other),
        }
        assert_eq!(count_reports(&session, "e0").await.unwrap(), 4_999);
    }

    #[tokio::test]
    async fn test_chain_one_level_past_limit_is_rejected() {
        let store = store_with(chain(4)).await;
        let session = store.session();
        let root = session.get_by_id("e0").await.unwrap();
        let ctx = RequestContext::new();

        assert!(
            calculate_reporting_structure(&ctx, &session, root.clone(), 3)
                .await
                .is_ok()
        );
        assert!(matches!(
            calculate_reporting_structure(&ctx, &session, root, 2).await,
            Err(DirectoryError::ReportingTooDeep { .. })
        ));
    }

    /// Builds a random forest: employee `i` reports to `parents[i - 1]`, which is always `< i`.
    fn tree_from_parents(parents: &[usize]) -> Vec<Employee> {
        let size = parents.len() + 1;
        let mut children: Vec<Vec<String>> = vec![Vec::new(); size];
        for (offset, parent) in parents.iter().enumerate() {
            children[*parent].push(format!("e{}", offset + 1));
        }
        children
            .into_iter()
            .enumerate()
            .map(|(i, reports)| {
                let refs: Vec<&str> = reports.iter().map(String::as_str).collect();
                employee(&format!("e{}", i), &refs)
            })
            .collect()
    }

    fn subtree_size(parents: &[usize], root: usize) -> usize {
        let mut count = 0;
        for (offset, parent) in parents.iter().enumerate() {
            let mut node = offset + 1;
            let mut current = *parent;
            loop {
                if current == root {
                    count += 1;
                    break;
                }
                if node == 0 || current == 0 {
                    break;
                }
                node = current;
                current = parents[node - 1];
            }
        }
        count
    }

    fn parents_strategy() -> impl Strategy<Value = Vec<usize>> {
        (1usize..40).prop_flat_map(|size| {
            (1..size)
                .map(|i| (0..i).boxed())
                .collect::<Vec<_>>()
        })
    }

    proptest! {
        #[test]
        fn prop_count_equals_subtree_size(parents in parents_strategy(), root_seed in any::<usize>()) {
            let size = parents.len() + 1;
            let root = root_seed % size;
            let employees = tree_from_parents(&parents);

            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let count = runtime.block_on(async {
                let store = store_with(employees).await;
                count_reports(&store.session(), &format!("e{}", root)).await.unwrap()
            });

            prop_assert_eq!(count, subtree_size(&parents, root));
        }
    }
}
