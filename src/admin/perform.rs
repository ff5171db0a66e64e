use std::collections::VecDeque;

use crate::remote::AdminApi;

use super::{AdminState, ApiCall, Effect, Msg, Prompt, update};

/// Runs one API call and wraps the outcome as the matching response message.
pub fn perform(api: &dyn AdminApi, call: ApiCall) -> Msg {
    match call {
        ApiCall::ListFiles => Msg::FilesLoaded(api.list_files()),
        ApiCall::ReadFile { path } => {
            let result = api.read_file(&path);
            Msg::FileLoaded { path, result }
        }
        ApiCall::WriteFile { path, content } => {
            let result = api.write_file(&path, &content);
            Msg::Saved {
                path,
                content,
                result,
            }
        }
        ApiCall::Build => Msg::Built(api.build()),
        ApiCall::Upload(file) => Msg::Uploaded(api.upload(file)),
    }
}

/// Dispatches `msg` and every message its effects produce, in order, on the
/// calling thread. `confirm` answers prompts.
pub fn drive(
    state: &mut AdminState,
    api: &dyn AdminApi,
    confirm: &mut dyn FnMut(Prompt) -> bool,
    msg: Msg,
) {
    let mut queue = VecDeque::from([msg]);
    while let Some(msg) = queue.pop_front() {
        for effect in update(state, msg) {
            let next = match effect {
                Effect::Call(call) => perform(api, call),
                Effect::Confirm(prompt) => Msg::Confirmed(confirm(prompt)),
            };
            queue.push_back(next);
        }
    }
}
