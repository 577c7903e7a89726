//! Event infrastructure for publishing engine results.
//!
//! - `EventId` - Unique identifier for events (deduplication)
//! - `EventMetadata` - Correlation context
//! - `EventEnvelope` - Transport wrapper for domain events
//! - `DomainEvent` - Trait that all domain events implement
//! - `domain_event!` - Macro to simplify DomainEvent implementations

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;
use uuid::Uuid;

use super::{DomainError, ErrorCode, Timestamp};

/// A fact the engine announces after a state change.
///
/// Implemented through `domain_event!`. The type string ends in `.vN` and
/// `schema_version` returns that same N.
pub trait DomainEvent: Send + Sync {
    fn event_type(&self) -> &'static str;
    fn schema_version(&self) -> u32;
    /// Criterion, alternative or decision maker the event is about.
    fn aggregate_id(&self) -> String;
    fn aggregate_type(&self) -> &'static str;
    fn occurred_at(&self) -> Timestamp;
    fn event_id(&self) -> EventId;
}

/// Wraps any serializable event into an [`EventEnvelope`].
pub trait SerializableDomainEvent: DomainEvent + Serialize {
    fn to_envelope(&self) -> Result<EventEnvelope, DomainError> {
        EventEnvelope::from_event(self)
    }
}

impl<T: DomainEvent + Serialize> SerializableDomainEvent for T {}

/// Implements [`DomainEvent`] by naming the fields that carry each value.
///
/// ```ignore
/// domain_event!(
///     JudgmentRecorded,
///     event_type = "judgment.recorded.v1",
///     schema_version = 1,
///     aggregate_id = decision_maker_id,
///     aggregate_type = "DecisionMaker",
///     occurred_at = recorded_at,
///     event_id = event_id
/// );
/// ```
#[macro_export]
macro_rules! domain_event {
    (
        $event_name:ident,
        event_type = $event_type:expr,
        schema_version = $schema_version:expr,
        aggregate_id = $agg_id_field:ident,
        aggregate_type = $agg_type:expr,
        occurred_at = $occurred_field:ident,
        event_id = $event_id_field:ident
    ) => {
        impl $crate::domain::foundation::DomainEvent for $event_name {
            fn event_type(&self) -> &'static str {
                $event_type
            }

            fn schema_version(&self) -> u32 {
                $schema_version
            }

            fn aggregate_id(&self) -> String {
                self.$agg_id_field.to_string()
            }

            fn aggregate_type(&self) -> &'static str {
                $agg_type
            }

            fn occurred_at(&self) -> $crate::domain::foundation::Timestamp {
                self.$occurred_field
            }

            fn event_id(&self) -> $crate::domain::foundation::EventId {
                self.$event_id_field.clone()
            }
        }
    };
}

pub use crate::domain_event;

/// Random per-event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Correlation context carried alongside an event.
///
/// Every event raised while handling one command, or one scenario run,
/// shares the command's correlation id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

/// A published event: routing fields plus the serialized event body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    pub event_id: EventId,
    pub event_type: String,
    pub schema_version: u32,
    pub aggregate_id: String,
    pub aggregate_type: String,
    pub occurred_at: Timestamp,
    pub payload: JsonValue,
    pub metadata: EventMetadata,
}

impl EventEnvelope {
    /// Builds an envelope around a raw JSON payload.
    pub fn new(
        event_type: impl Into<String>,
        aggregate_id: impl Into<String>,
        aggregate_type: impl Into<String>,
        payload: JsonValue,
    ) -> Self {
        Self::assemble(
            EventId::new(),
            event_type.into(),
            aggregate_id.into(),
            aggregate_type.into(),
            Timestamp::now(),
            payload,
        )
    }

    /// Serializes a domain event as the payload of a new envelope.
    pub fn from_event<T>(event: &T) -> Result<Self, DomainError>
    where
        T: DomainEvent + Serialize + ?Sized,
    {
        let payload = serde_json::to_value(event).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Event serialization failed: {}", e))
                .with_detail("event_type", event.event_type())
        })?;

        Ok(Self::assemble(
            event.event_id(),
            event.event_type().to_string(),
            event.aggregate_id(),
            event.aggregate_type().to_string(),
            event.occurred_at(),
            payload,
        ))
    }

    fn assemble(
        event_id: EventId,
        event_type: String,
        aggregate_id: String,
        aggregate_type: String,
        occurred_at: Timestamp,
        payload: JsonValue,
    ) -> Self {
        Self {
            event_id,
            schema_version: version_suffix(&event_type),
            event_type,
            aggregate_id,
            aggregate_type,
            occurred_at,
            payload,
            metadata: EventMetadata::default(),
        }
    }

    /// Tags the envelope with the originating command's correlation id.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.metadata.correlation_id = Some(id.into());
        self
    }

    /// Returns the correlation id, if one was attached.
    pub fn correlation_id(&self) -> Option<&str> {
        self.metadata.correlation_id.as_deref()
    }

    /// Decodes the payload back into its event type.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.payload.clone())
    }
}

/// The N of a trailing `.vN`, or 1 when absent.
fn version_suffix(event_type: &str) -> u32 {
    event_type
        .rsplit_once(".v")
        .and_then(|(_, n)| n.parse().ok())
        .unwrap_or(1)
}
