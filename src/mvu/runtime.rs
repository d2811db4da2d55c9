use futures::future::join_all;

use crate::mvu::tracker::{Deps, Msg, TrackerModel, run_effect, update};

/// Runs the MVU loop for the tracker model: seeds with `init_msg` and drains
/// effects. Effects emitted by the same update run concurrently, so the two
/// upstream fetches never wait on each other.
pub async fn run_tracker(model: &mut TrackerModel, init_msg: Msg, deps: Deps<'_>) {
    let mut effects = update(model, init_msg);
    while !effects.is_empty() {
        let batch = std::mem::take(&mut effects);
        let msgs = {
            let snapshot: &TrackerModel = model;
            join_all(batch.into_iter().map(|effect| run_effect(effect, snapshot, deps))).await
        };
        for msg in msgs {
            effects.extend(update(model, msg));
        }
    }
}
