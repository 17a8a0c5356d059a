//! Roster behaviour configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::roster::{Capability, RosterTemplate, SeatPolicy, TemplateCatalog};

/// Roster rules shared by every roster the process opens.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterConfig {
    /// What a direct join does to an occupied seat
    #[serde(default)]
    pub seat_policy: SeatPolicy,

    /// Layout used by `SessionType::Custom`
    #[serde(default)]
    pub custom_template: Option<CustomTemplateConfig>,
}

/// Slot list and capability table for the custom session type.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomTemplateConfig {
    pub slots: Vec<String>,

    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

impl RosterConfig {
    /// Template catalog with the custom layout, if one is configured.
    pub fn catalog(&self) -> Result<TemplateCatalog, ValidationError> {
        let catalog = TemplateCatalog::new();
        match &self.custom_template {
            Some(custom) => {
                let template =
                    RosterTemplate::custom(custom.slots.clone(), custom.capabilities.clone())
                        .map_err(|e| ValidationError::InvalidTemplate(e.to_string()))?;
                Ok(catalog.with_custom(template))
            }
            None => Ok(catalog),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::roster::SessionType;

    #[test]
    fn test_default_policy_is_overwrite() {
        let config = RosterConfig::default();
        assert_eq!(config.seat_policy, SeatPolicy::Overwrite);
        assert!(config.catalog().unwrap().resolve(SessionType::Custom).is_none());
    }

    #[test]
    fn test_custom_template_resolves() {
        let config = RosterConfig {
            seat_policy: SeatPolicy::Reject,
            custom_template: Some(CustomTemplateConfig {
                slots: vec!["Caller".into(), "Runner1".into(), "Runner2".into()],
                capabilities: vec![Capability::new("Runner", ["Runner1", "Runner2"])],
            }),
        };

        let template = config
            .catalog()
            .unwrap()
            .resolve(SessionType::Custom)
            .unwrap();
        assert_eq!(template.capacity(), 3);
        assert!(template.recognizes("Runner"));
    }

    #[test]
    fn test_duplicate_custom_slots_fail_validation() {
        let config = RosterConfig {
            custom_template: Some(CustomTemplateConfig {
                slots: vec!["A".into(), "A".into()],
                capabilities: vec![],
            }),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidTemplate(_))
        ));
    }
}
