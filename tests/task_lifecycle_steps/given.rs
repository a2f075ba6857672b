//! Given steps for task lifecycle BDD scenarios.

use super::world::TaskLifecycleWorld;
use rstest_bdd_macros::given;

#[given("an empty task store")]
fn empty_task_store(world: &mut TaskLifecycleWorld) {
    world.last_task = None;
    world.last_result = None;
}
