use pimctl_core::AppResult;

use crate::CommandOutcome;
use crate::display_records::StatusRecord;

use super::PimCommandService;

impl PimCommandService {
    /// Combines active elevations and pending requests, active first.
    pub async fn list_status(&self) -> AppResult<CommandOutcome<Vec<StatusRecord>>> {
        let active = self.list_active().await?;
        let pending = self.list_pending().await?;

        let mut warnings = active.warnings;
        warnings.extend(pending.warnings);

        let records = active
            .records
            .into_iter()
            .map(StatusRecord::from)
            .chain(pending.records.into_iter().map(StatusRecord::from))
            .collect();

        Ok(CommandOutcome { records, warnings })
    }
}
