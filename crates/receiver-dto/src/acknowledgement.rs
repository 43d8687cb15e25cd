use serde::Serialize;

/// The fixed reply to every accepted notification: `{"status": "received"}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub status: Status,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    #[default]
    Received,
}

impl Acknowledgement {
    pub fn received() -> Self {
        Self {
            status: Status::Received,
        }
    }
}
