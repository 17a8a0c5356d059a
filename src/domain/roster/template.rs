//! Slot templates.
//!
//! A template fixes the slot names of a roster, its capacity, and the
//! capability table that expands a declared capability (e.g. `DPS`) into
//! the concrete slots it may fill (`DPS1`, `DPS2`). Expansion is a table
//! lookup resolved when the template is built, never string inspection.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Selects the slot template of a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// 8 role-specialized slots (two tanks, two healers, four DPS).
    Full,
    /// 4 role-specialized slots (tank, healer, two DPS).
    Light,
    /// 8 interchangeable seats.
    Free8,
    /// 4 interchangeable seats.
    Free4,
    /// Template supplied by configuration.
    Custom,
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionType::Full => "full",
            SessionType::Light => "light",
            SessionType::Free8 => "free8",
            SessionType::Free4 => "free4",
            SessionType::Custom => "custom",
        };
        write!(f, "{}", s)
    }
}

/// What a flexible participant declared they can fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Acceptable {
    /// Any slot of the roster.
    Any,
    /// Capability or slot names, in declaration order.
    Roles(Vec<String>),
}

impl Acceptable {
    /// Builds a role list, dropping blanks and repeated names.
    pub fn roles<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let roles = names
            .into_iter()
            .map(Into::into)
            .map(|name: String| name.trim().to_string())
            .filter(|name| !name.is_empty() && seen.insert(name.clone()))
            .collect();
        Acceptable::Roles(roles)
    }

    /// Returns true for the wildcard.
    pub fn is_any(&self) -> bool {
        matches!(self, Acceptable::Any)
    }

    /// Returns true when nothing was declared.
    pub fn is_empty(&self) -> bool {
        match self {
            Acceptable::Any => false,
            Acceptable::Roles(roles) => roles.is_empty(),
        }
    }
}

impl fmt::Display for Acceptable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Acceptable::Any => write!(f, "any"),
            Acceptable::Roles(roles) => write!(f, "{}", roles.join("/")),
        }
    }
}

/// One row of the capability table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub name: String,
    pub slots: Vec<String>,
}

impl Capability {
    pub fn new<S: Into<String>>(name: impl Into<String>, slots: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            slots: slots.into_iter().map(Into::into).collect(),
        }
    }
}

/// Slot layout and capability table for one session type.
///
/// # Invariants
///
/// - at least one slot, slot names unique and non-blank
/// - every capability expands to at least one known slot
/// - capability names unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterTemplate {
    session_type: SessionType,
    slots: Vec<String>,
    capabilities: Vec<Capability>,
    open_seating: bool,
}

static FULL: Lazy<RosterTemplate> = Lazy::new(|| {
    let slots = ["MT", "ST", "H1", "H2", "D1", "D2", "D3", "D4"];
    RosterTemplate {
        session_type: SessionType::Full,
        slots: slots.iter().map(|s| s.to_string()).collect(),
        capabilities: slots.iter().map(|s| Capability::new(*s, [*s])).collect(),
        open_seating: false,
    }
});

static LIGHT: Lazy<RosterTemplate> = Lazy::new(|| RosterTemplate {
    session_type: SessionType::Light,
    slots: ["Tank", "Healer", "DPS1", "DPS2"]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    capabilities: vec![
        Capability::new("Tank", ["Tank"]),
        Capability::new("Healer", ["Healer"]),
        Capability::new("DPS", ["DPS1", "DPS2"]),
    ],
    open_seating: false,
});

static FREE8: Lazy<RosterTemplate> = Lazy::new(|| open_seats(SessionType::Free8, 8));

static FREE4: Lazy<RosterTemplate> = Lazy::new(|| open_seats(SessionType::Free4, 4));

fn open_seats(session_type: SessionType, count: usize) -> RosterTemplate {
    let slots: Vec<String> = (1..=count).map(|i| format!("Seat {}", i)).collect();
    RosterTemplate {
        session_type,
        capabilities: slots.iter().map(|s| Capability::new(s.clone(), [s.clone()])).collect(),
        slots,
        open_seating: true,
    }
}

impl RosterTemplate {
    /// Returns the built-in template for a session type.
    ///
    /// `Custom` has no built-in layout and returns `None`.
    pub fn builtin(session_type: SessionType) -> Option<&'static RosterTemplate> {
        match session_type {
            SessionType::Full => Some(&FULL),
            SessionType::Light => Some(&LIGHT),
            SessionType::Free8 => Some(&FREE8),
            SessionType::Free4 => Some(&FREE4),
            SessionType::Custom => None,
        }
    }

    /// Builds a `Custom` template.
    ///
    /// An empty capability table means every slot is its own capability.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if no slots are given
    /// - `InvalidFormat` on duplicate names or expansions to unknown slots
    pub fn custom(slots: Vec<String>, capabilities: Vec<Capability>) -> Result<Self, ValidationError> {
        let slots: Vec<String> = slots.into_iter().map(|s| s.trim().to_string()).collect();
        if slots.is_empty() {
            return Err(ValidationError::empty_field("slots"));
        }
        let mut seen = HashSet::new();
        for slot in &slots {
            if slot.is_empty() {
                return Err(ValidationError::empty_field("slots"));
            }
            if !seen.insert(slot.as_str()) {
                return Err(ValidationError::invalid_format(
                    "slots",
                    format!("duplicate slot '{}'", slot),
                ));
            }
        }

        let capabilities = if capabilities.is_empty() {
            slots.iter().map(|s| Capability::new(s.clone(), [s.clone()])).collect()
        } else {
            capabilities
        };

        let mut names = HashSet::new();
        for capability in &capabilities {
            if !names.insert(capability.name.as_str()) {
                return Err(ValidationError::invalid_format(
                    "capabilities",
                    format!("duplicate capability '{}'", capability.name),
                ));
            }
            if capability.slots.is_empty() {
                return Err(ValidationError::invalid_format(
                    "capabilities",
                    format!("capability '{}' expands to no slot", capability.name),
                ));
            }
            if let Some(unknown) = capability.slots.iter().find(|s| !seen.contains(s.as_str())) {
                return Err(ValidationError::invalid_format(
                    "capabilities",
                    format!("capability '{}' names unknown slot '{}'", capability.name, unknown),
                ));
            }
        }

        Ok(Self {
            session_type: SessionType::Custom,
            slots,
            capabilities,
            open_seating: false,
        })
    }

    pub fn session_type(&self) -> SessionType {
        self.session_type
    }

    /// Total number of concrete slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slot names in template order.
    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// True for "any seat" templates, where the organizer is seated in the
    /// first slot when they don't pick one.
    pub fn is_open_seating(&self) -> bool {
        self.open_seating
    }

    pub fn has_slot(&self, slot: &str) -> bool {
        self.slots.iter().any(|s| s == slot)
    }

    /// True if `name` is a capability or a concrete slot of this template.
    pub fn recognizes(&self, name: &str) -> bool {
        self.capability(name).is_some() || self.has_slot(name)
    }

    fn capability(&self, name: &str) -> Option<&Capability> {
        self.capabilities.iter().find(|c| c.name == name)
    }

    /// Expands a declaration into concrete slot names, in first-seen order
    /// and without repeats.
    ///
    /// Names unknown to the template expand to nothing.
    pub fn expand<'a>(&'a self, acceptable: &Acceptable) -> Vec<&'a str> {
        match acceptable {
            Acceptable::Any => self.slots.iter().map(String::as_str).collect(),
            Acceptable::Roles(roles) => {
                let mut expanded: Vec<&'a str> = Vec::new();
                for role in roles {
                    let targets: Vec<&'a str> = match self.capability(role) {
                        Some(capability) => capability.slots.iter().map(String::as_str).collect(),
                        None => self
                            .slots
                            .iter()
                            .filter(|s| *s == role)
                            .map(String::as_str)
                            .collect(),
                    };
                    for target in targets {
                        if !expanded.contains(&target) {
                            expanded.push(target);
                        }
                    }
                }
                expanded
            }
        }
    }
}

/// Resolves a session type to the template a new roster uses.
///
/// Built-in types always resolve; `Custom` resolves only when a custom
/// template was configured.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    custom: Option<RosterTemplate>,
}

impl TemplateCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_custom(mut self, template: RosterTemplate) -> Self {
        self.custom = Some(template);
        self
    }

    pub fn resolve(&self, session_type: SessionType) -> Option<RosterTemplate> {
        match session_type {
            SessionType::Custom => self.custom.clone(),
            builtin => RosterTemplate::builtin(builtin).cloned(),
        }
    }
}
