//! AssignProfileHandler - replaces the marks an alternative receives.

use std::sync::Arc;

use tracing::info;

use crate::domain::alternatives::Profile;
use crate::domain::foundation::{AlternativeId, CommandMetadata, EngineError, MarkId};
use crate::ports::{AlternativeRepository, MarkRepository, ProfileRepository};

/// Command to assign marks to an alternative.
#[derive(Debug, Clone)]
pub struct AssignProfileCommand {
    pub alternative_id: AlternativeId,
    pub mark_ids: Vec<MarkId>,
}

/// Handler for assigning profiles.
///
/// All previous vectors of the alternative are replaced in one write. Every
/// mark must exist and sit on a different criterion.
pub struct AssignProfileHandler {
    alternatives: Arc<dyn AlternativeRepository>,
    marks: Arc<dyn MarkRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl AssignProfileHandler {
    pub fn new(
        alternatives: Arc<dyn AlternativeRepository>,
        marks: Arc<dyn MarkRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self {
            alternatives,
            marks,
            profiles,
        }
    }

    pub async fn handle(&self, cmd: AssignProfileCommand, metadata: CommandMetadata) -> Result<Profile, EngineError> {
        if self.alternatives.find_by_id(&cmd.alternative_id).await?.is_none() {
            return Err(EngineError::UnknownAlternative(cmd.alternative_id));
        }

        let mut marks = Vec::with_capacity(cmd.mark_ids.len());
        for mark_id in &cmd.mark_ids {
            let mark = self
                .marks
                .find_by_id(mark_id)
                .await?
                .ok_or(EngineError::UnknownMark(*mark_id))?;
            marks.push(mark);
        }

        let refs: Vec<_> = marks.iter().collect();
        let profile = Profile::from_marks(cmd.alternative_id, &refs)?;
        self.profiles.replace(&profile).await?;

        info!(
            alternative_id = %profile.alternative_id,
            vectors = profile.vectors.len(),
            correlation_id = metadata.correlation_id(),
            "Profile assigned"
        );
        Ok(profile)
    }
}
