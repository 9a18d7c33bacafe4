//! Repeatability and representation independence.
//!
//! Both algorithms are single-threaded and break ties deterministically, so
//! repeated runs must return identical results. Kruskal reads only the edge
//! list and must not depend on the representation; Prim may pick a
//! different tree under the matrix but never a different weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Representation, kruskal, prim};

use super::types::MstFixture;

const REPETITIONS: usize = 3;

pub(super) fn run_determinism_property(fixture: &MstFixture) -> TestCaseResult {
    let list = fixture.graph(Representation::AdjacencyList);
    let matrix = fixture.graph(Representation::AdjacencyMatrix);

    let baseline_forest = kruskal(&list);
    let baseline_tree = prim(&list, 1).map_err(|err| TestCaseError::fail(err.to_string()))?;

    for attempt in 0..REPETITIONS {
        if kruskal(&list) != baseline_forest {
            return Err(TestCaseError::fail(format!(
                "kruskal changed on repetition {attempt} ({})",
                fixture.describe()
            )));
        }
        let tree = prim(&list, 1).map_err(|err| TestCaseError::fail(err.to_string()))?;
        if tree != baseline_tree {
            return Err(TestCaseError::fail(format!(
                "prim changed on repetition {attempt} ({})",
                fixture.describe()
            )));
        }
    }

    if kruskal(&matrix).edges() != baseline_forest.edges() {
        return Err(TestCaseError::fail(format!(
            "kruskal depends on representation ({})",
            fixture.describe()
        )));
    }
    let matrix_tree = prim(&matrix, 1).map_err(|err| TestCaseError::fail(err.to_string()))?;
    if matrix_tree.total_weight() != baseline_tree.total_weight() {
        return Err(TestCaseError::fail(format!(
            "prim weight {} under matrix vs {} under list ({})",
            matrix_tree.total_weight(),
            baseline_tree.total_weight(),
            fixture.describe()
        )));
    }
    Ok(())
}
