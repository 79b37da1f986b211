use crate::core::session::GameSettings;
use crate::domain::model::RawParticipant;
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::{self, Validate};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A full game scenario loaded from a TOML file: game settings, mail gateway
/// settings and the participant table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub game: GameConfig,
    pub mailer: MailerConfig,
    pub participants: HashMap<String, RawParticipant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub name: String,
    pub budget: f64,
    pub subject: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    pub endpoint: String,
    pub sender: String,
    pub api_key: Option<String>,
}

impl ScenarioConfig {
    /// Loads a scenario from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SantaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| {
            SantaError::invalid_configuration(format!("TOML parsing error: {}", e))
        })
    }

    /// Replaces `${VAR_NAME}` references with environment values, so secrets
    /// like the gateway API key stay out of the scenario file.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Subject line, defaulting to a year-stamped one when the file omits it.
    pub fn subject(&self) -> String {
        self.game
            .subject
            .clone()
            .unwrap_or_else(|| format!("Secret Santa {}", chrono::Local::now().year()))
    }

    /// Session settings derived from the game and mailer sections.
    pub fn game_settings(&self) -> GameSettings {
        GameSettings {
            name: self.game.name.clone(),
            budget: self.game.budget,
            subject: self.subject(),
            sender: self.mailer.sender.clone(),
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("game.name", &self.game.name)?;
        validation::validate_positive_amount("game.budget", self.game.budget)?;
        validation::validate_url("mailer.endpoint", &self.mailer.endpoint)?;
        validation::validate_non_empty_string("mailer.sender", &self.mailer.sender)?;

        Ok(())
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const BASIC_SCENARIO: &str = r#"
[game]
name = "Smith Secret Santa"
budget = 30.0

[mailer]
endpoint = "https://mail.example.com/send"
sender = "santa@example.com"

[participants.borja]
email = "borja@example.com"
avoidGiftingTo = ["mark"]

[participants.john]
email = "john@example.com"
avoidGiftingTo = []

[participants.mark]
email = "mark@example.com"
avoidGiftingTo = []
"#;

    #[test]
    fn test_parse_basic_scenario() {
        let config = ScenarioConfig::from_toml_str(BASIC_SCENARIO).unwrap();

        assert_eq!(config.game.name, "Smith Secret Santa");
        assert_eq!(config.game.budget, 30.0);
        assert_eq!(config.participants.len(), 3);
        assert_eq!(
            config.participants["borja"].avoid_gifting_to,
            vec!["mark".to_string()]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_subject_is_year_stamped() {
        let config = ScenarioConfig::from_toml_str(BASIC_SCENARIO).unwrap();
        let year = chrono::Local::now().year().to_string();

        assert!(config.subject().contains(&year));
    }

    #[test]
    fn test_explicit_subject_wins() {
        let with_subject = BASIC_SCENARIO.replace(
            "budget = 30.0",
            "budget = 30.0\nsubject = \"Family draw\"",
        );

        let config = ScenarioConfig::from_toml_str(&with_subject).unwrap();
        assert_eq!(config.subject(), "Family draw");
        assert_eq!(config.game_settings().subject, "Family draw");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SANTA_TEST_API_KEY", "sekrit");

        let with_key = BASIC_SCENARIO.replace(
            "sender = \"santa@example.com\"",
            "sender = \"santa@example.com\"\napi_key = \"${SANTA_TEST_API_KEY}\"",
        );

        let config = ScenarioConfig::from_toml_str(&with_key).unwrap();
        assert_eq!(config.mailer.api_key.as_deref(), Some("sekrit"));

        std::env::remove_var("SANTA_TEST_API_KEY");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let with_key = BASIC_SCENARIO.replace(
            "sender = \"santa@example.com\"",
            "sender = \"santa@example.com\"\napi_key = \"${SANTA_UNSET_VARIABLE}\"",
        );

        let config = ScenarioConfig::from_toml_str(&with_key).unwrap();
        assert_eq!(
            config.mailer.api_key.as_deref(),
            Some("${SANTA_UNSET_VARIABLE}")
        );
    }

    #[test]
    fn test_rejects_unknown_participant_fields() {
        let with_extra = BASIC_SCENARIO.replace(
            "email = \"mark@example.com\"",
            "email = \"mark@example.com\"\nnickname = \"marky\"",
        );

        let err = ScenarioConfig::from_toml_str(&with_extra).unwrap_err();
        assert!(err.to_string().contains("TOML parsing error"));
    }

    #[test]
    fn test_rejects_missing_avoid_field() {
        let scenario = r#"
[game]
name = "test"
budget = 10.0

[mailer]
endpoint = "https://mail.example.com/send"
sender = "santa@example.com"

[participants.alice]
email = "alice@example.com"
"#;

        assert!(ScenarioConfig::from_toml_str(scenario).is_err());
    }

    #[test]
    fn test_validation_rejects_bad_endpoint() {
        let broken = BASIC_SCENARIO.replace(
            "endpoint = \"https://mail.example.com/send\"",
            "endpoint = \"not-a-url\"",
        );

        let config = ScenarioConfig::from_toml_str(&broken).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_budget() {
        let broken = BASIC_SCENARIO.replace("budget = 30.0", "budget = 0.0");

        let config = ScenarioConfig::from_toml_str(&broken).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(BASIC_SCENARIO.as_bytes()).unwrap();

        let config = ScenarioConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.game.name, "Smith Secret Santa");
    }
}
