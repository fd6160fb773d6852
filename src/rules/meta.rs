//! Per-deck choices made in the deck-options editor.

use serde::{Deserialize, Serialize};

/// Run-scoped overrides for one deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckMeta {
    /// Faction chosen for options carrying `faction_select`.
    pub faction_selected: Option<String>,
}

impl DeckMeta {
    /// Meta with a selected faction.
    #[must_use]
    pub fn with_faction(faction: impl Into<String>) -> Self {
        Self {
            faction_selected: Some(faction.into()),
        }
    }
}
