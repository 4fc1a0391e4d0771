use shared::protocol::ViewUpdate;
use tokio::sync::mpsc;

/// Rendering surface driven by controller updates.
pub trait View {
    fn apply(&mut self, update: ViewUpdate);
}

/// Applies updates in arrival order until every sender has been dropped.
pub async fn pump_updates<V: View>(
    updates: &mut mpsc::UnboundedReceiver<ViewUpdate>,
    view: &mut V,
) {
    while let Some(update) = updates.recv().await {
        view.apply(update);
    }
}

/// Applies whatever is already queued without waiting.
pub fn drain_pending<V: View>(
    updates: &mut mpsc::UnboundedReceiver<ViewUpdate>,
    view: &mut V,
) -> usize {
    let mut applied = 0;
    while let Ok(update) = updates.try_recv() {
        view.apply(update);
        applied += 1;
    }
    applied
}
