use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::api::AssistantReply;
use crate::core::session::{OutboundRequest, RequestId};
use crate::core::transport::{AssistantTransport, TransportError};

pub type ReplyResult = Result<AssistantReply, TransportError>;

/// Runs outbound questions off the UI task and hands the results back over a
/// channel, tagged with the request id they answer.
pub struct AssistantService {
    transport: Arc<dyn AssistantTransport>,
    tx: mpsc::UnboundedSender<(ReplyResult, RequestId)>,
    unmounted: CancellationToken,
}

impl AssistantService {
    pub fn new(
        transport: Arc<dyn AssistantTransport>,
    ) -> (Self, mpsc::UnboundedReceiver<(ReplyResult, RequestId)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                transport,
                tx,
                unmounted: CancellationToken::new(),
            },
            rx,
        )
    }

    /// Dispatch a request. The call itself is never aborted; once the widget is
    /// unmounted its result is dropped instead of delivered.
    pub fn spawn_request(&self, outbound: OutboundRequest) {
        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        let unmounted = self.unmounted.clone();

        tokio::spawn(async move {
            let OutboundRequest { id, body } = outbound;
            tracing::debug!(request_id = id, "dispatching assistant request");
            let result = transport.ask(&body).await;

            if unmounted.is_cancelled() {
                tracing::debug!(request_id = id, "widget closed; dropping assistant result");
                return;
            }
            let _ = tx.send((result, id));
        });
    }

    /// Mark the widget as gone. Pending results will not be delivered.
    pub fn unmount(&self) {
        self.unmounted.cancel();
    }
}
