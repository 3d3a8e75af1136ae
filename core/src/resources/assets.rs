//! Media uploads.

use std::path::Path;

use super::{network_path, Payload};
use crate::gateway::Gateway;
use crate::request::{FileAttachment, OutboundRequest};
use crate::result::NormalizedResult;

pub struct Assets<'a> {
    gateway: &'a Gateway,
}

impl<'a> Assets<'a> {
    pub(crate) fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Upload a file as multipart form data: the file goes in the `file`
    /// part and `asset_type` (`image`, `file`, ...) as a text field.
    pub fn upload(&self, network_id: u64, file: FileAttachment, asset_type: &str) -> NormalizedResult {
        let body = Payload::new().field("asset_type", asset_type).build();
        self.gateway.execute(
            OutboundRequest::post(format!("{}/assets", network_path(network_id)))
                .json(body)
                .attach("file", file),
        )
    }

    /// Read `path` and upload it. Only reading the file can fail.
    pub fn upload_path(
        &self,
        network_id: u64,
        path: impl AsRef<Path>,
        asset_type: &str,
    ) -> std::io::Result<NormalizedResult> {
        let file = FileAttachment::from_path(path)?;
        Ok(self.upload(network_id, file, asset_type))
    }
}
