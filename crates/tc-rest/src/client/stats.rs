use tracing::instrument;

use crate::error::Result;
use crate::stats::{CountsResponse, GrowthResponse, SnapshotsResponse};

impl super::TcapiClient {
    /// Record totals per entity type.
    #[instrument(skip(self))]
    pub async fn counts(&self) -> Result<CountsResponse> {
        let response = self.get("/stats/counts").await?;
        Ok(CountsResponse::from_response(&response))
    }

    /// Growth per entity type over the server's default period.
    #[instrument(skip(self))]
    pub async fn growth(&self) -> Result<GrowthResponse> {
        let response = self.get("/stats/growth").await?;
        Ok(GrowthResponse::from_response(&response))
    }

    /// Dated totals per entity type.
    #[instrument(skip(self))]
    pub async fn snapshots(&self) -> Result<SnapshotsResponse> {
        let response = self.get("/stats/snapshots").await?;
        Ok(SnapshotsResponse::from_response(&response))
    }
}
