// Output vocabulary for the report. One printer, several label sets; the
// set is picked once at startup from `--labels`.

use clap::ValueEnum;

use crate::models::Faction;

/// Selectable label presets.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelPreset {
    /// "Online"/"Offline" with Alliance as faction 0
    #[default]
    Classic,
    /// "up"/"down" with Horde as faction 0
    Terse,
}

impl LabelPreset {
    pub fn label_set(self) -> &'static LabelSet {
        match self {
            LabelPreset::Classic => &CLASSIC,
            LabelPreset::Terse => &TERSE,
        }
    }
}

/// Every string the printer emits, plus the faction order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    pub realm: &'static str,
    pub status: &'static str,
    pub population: &'static str,
    pub queue: &'static str,
    pub realm_type: &'static str,
    pub battlegroup: &'static str,
    pub tol_barad: &'static str,
    pub wintergrasp: &'static str,
    pub next_battle: &'static str,
    pub online: &'static str,
    pub offline: &'static str,
    pub queue_yes: &'static str,
    pub queue_no: &'static str,
    /// Faction names indexed by faction code.
    pub factions: [&'static str; 2],
    /// Used for any code or value with no mapping.
    pub unknown: &'static str,
}

pub static CLASSIC: LabelSet = LabelSet {
    realm: "Realm",
    status: "Status",
    population: "Population",
    queue: "Queue",
    realm_type: "Realm Type",
    battlegroup: "Battlegroup",
    tol_barad: "Tol Barad",
    wintergrasp: "Wintergrasp",
    next_battle: "Next Battle",
    online: "Online",
    offline: "Offline",
    queue_yes: "Yes",
    queue_no: "No",
    factions: ["Alliance", "Horde"],
    unknown: "Unknown",
};

pub static TERSE: LabelSet = LabelSet {
    realm: "realm",
    status: "status",
    population: "pop",
    queue: "queue",
    realm_type: "type",
    battlegroup: "bg",
    tol_barad: "tol barad",
    wintergrasp: "wintergrasp",
    next_battle: "next battle at",
    online: "up",
    offline: "down",
    queue_yes: "yes",
    queue_no: "no",
    factions: ["Horde", "Alliance"],
    unknown: "Unknown",
};

impl LabelSet {
    pub fn realm_status(&self, online: bool) -> &'static str {
        if online { self.online } else { self.offline }
    }

    pub fn queue_state(&self, queued: bool) -> &'static str {
        if queued { self.queue_yes } else { self.queue_no }
    }

    pub fn faction(&self, faction: Faction) -> &'static str {
        usize::try_from(faction.0)
            .ok()
            .and_then(|idx| self.factions.get(idx).copied())
            .unwrap_or(self.unknown)
    }
}
