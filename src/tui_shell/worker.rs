use std::sync::mpsc::Sender;

use crate::admin::{ApiCall, Msg, perform};
use crate::remote::RemoteClient;

/// Runs `call` off the UI thread; the response comes back on `tx`.
pub(super) fn spawn_call(client: RemoteClient, call: ApiCall, tx: Sender<Msg>) {
    std::thread::spawn(move || {
        let msg = perform(&client, call);
        if tx.send(msg).is_err() {
            tracing::debug!("ui gone before response arrived");
        }
    });
}
