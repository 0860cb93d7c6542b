use tokio::sync::mpsc;

/// Client-side route change, without a full page load.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Hands every requested path to whoever owns the router.
pub struct ChannelNavigator {
    sender: mpsc::UnboundedSender<String>,
}

impl ChannelNavigator {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, path: &str) {
        if self.sender.send(path.to_string()).is_err() {
            tracing::warn!(path, "Dropped a navigation request, the router is gone");
        }
    }
}
