//! The project card component and its registration record.
//!
//! The host pushes a configuration once and then the full state registry on
//! every change. Each accepted push re-renders the whole card synchronously.

pub mod markup;
pub mod templates;

use crate::config::CardConfig;
use crate::error::CardResult;
use crate::state::StateRegistry;
use crate::types::ProjectSnapshot;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Type name the card registers under.
pub const CARD_TYPE: &str = "todoist-project-card";

/// Layout size hint reported to the host.
pub const CARD_SIZE: u32 = 4;

/// Entry advertised to the host's card picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardInfo {
    #[serde(rename = "type")]
    pub card_type: String,
    pub name: String,
    pub description: String,
}

/// Registry of custom cards known to the host.
#[derive(Debug, Clone, Default)]
pub struct CardRegistry {
    cards: Vec<CardInfo>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card. Returns `false` if its type was already registered.
    pub fn register(&mut self, info: CardInfo) -> bool {
        if self.get(&info.card_type).is_some() {
            debug!(card_type = %info.card_type, "Card already registered");
            return false;
        }
        debug!(card_type = %info.card_type, "Registering card");
        self.cards.push(info);
        true
    }

    pub fn get(&self, card_type: &str) -> Option<&CardInfo> {
        self.cards.iter().find(|c| c.card_type == card_type)
    }

    pub fn cards(&self) -> &[CardInfo] {
        &self.cards
    }
}

/// Entity state resolved for the entity it was looked up for.
#[derive(Debug, Clone)]
struct ResolvedEntity {
    entity: String,
    /// `None` when the registry had no such entity.
    snapshot: Option<ProjectSnapshot>,
}

/// Read-only card showing a project's sections, tasks and subtasks.
///
/// States: unconfigured, configured without state, configured with state
/// (which may be a missing entity).
#[derive(Debug, Clone, Default)]
pub struct TaskTreeCard {
    config: Option<CardConfig>,
    resolved: Option<ResolvedEntity>,
    markup: Option<String>,
    visible: bool,
}

impl TaskTreeCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The card's registration record.
    pub fn card_info() -> CardInfo {
        CardInfo {
            card_type: CARD_TYPE.to_string(),
            name: "Todoist Project Card".to_string(),
            description: "Read-only card for displaying Todoist project tasks (with subtasks)."
                .to_string(),
        }
    }

    /// Register the card with the host, once.
    pub fn register(registry: &mut CardRegistry) -> bool {
        registry.register(Self::card_info())
    }

    /// Apply a host configuration object, replacing any previous one.
    ///
    /// Fails when `entity` is missing; the previous configuration then stays in place.
    pub fn set_config(&mut self, config: &Value) -> CardResult<()> {
        let config = CardConfig::from_value(config)?;
        self.apply_config(config);
        Ok(())
    }

    /// Apply an already validated configuration.
    pub fn apply_config(&mut self, config: CardConfig) {
        debug!(
            entity = %config.entity,
            show_completed = config.show_completed,
            "Card configured"
        );
        if self
            .resolved
            .as_ref()
            .is_some_and(|r| r.entity != config.entity)
        {
            // State resolved for another entity no longer applies.
            self.resolved = None;
            self.markup = None;
        }
        self.config = Some(config);
        self.visible = true;
        self.render();
    }

    /// Receive the host's state registry. Ignored until configured.
    pub fn set_states(&mut self, states: &StateRegistry) {
        let Some(config) = &self.config else {
            debug!("State pushed before configuration, ignoring");
            return;
        };
        let snapshot = states.resolve(&config.entity);
        debug!(
            entity = %config.entity,
            found = snapshot.is_some(),
            tasks = snapshot.as_ref().map_or(0, |s| s.tasks.len()),
            "State received"
        );
        self.resolved = Some(ResolvedEntity {
            entity: config.entity.clone(),
            snapshot,
        });
        self.render();
    }

    /// Layout size hint for the host.
    pub fn card_size(&self) -> u32 {
        CARD_SIZE
    }

    pub fn config(&self) -> Option<&CardConfig> {
        self.config.as_ref()
    }

    /// Whether the card has been made visible by a configuration.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Markup from the latest render, if any render has happened.
    pub fn markup(&self) -> Option<&str> {
        self.markup.as_deref()
    }

    /// Snapshot of the configured entity, if state was received and the entity exists.
    pub fn snapshot(&self) -> Option<&ProjectSnapshot> {
        self.resolved.as_ref().and_then(|r| r.snapshot.as_ref())
    }

    fn render(&mut self) {
        let (Some(config), Some(resolved)) = (&self.config, &self.resolved) else {
            return;
        };
        let html = match &resolved.snapshot {
            None => markup::render_not_found(&config.entity),
            Some(snapshot) => markup::render_project(snapshot, config.show_completed),
        };
        debug!(entity = %config.entity, bytes = html.len(), "Card rendered");
        self.markup = Some(html);
    }
}
