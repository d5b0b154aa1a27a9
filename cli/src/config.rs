use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::{BotType, Mark};

const CONFIG_FILE_NAME: &str = "tictactoe_cli_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub type CliConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub fn get_config_manager(path: Option<&str>) -> CliConfigManager {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(get_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub play: PlayConfig,
    pub self_play: SelfPlayConfig,
    #[serde(default)]
    pub show_values: bool,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.play.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            play: PlayConfig {
                human_mark: Mark::X,
                opponent: BotType::Minimax,
            },
            self_play: SelfPlayConfig {
                x: BotType::Minimax,
                o: BotType::Minimax,
            },
            show_values: false,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayConfig {
    pub human_mark: Mark,
    pub opponent: BotType,
}

impl Validate for PlayConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SelfPlayConfig {
    pub x: BotType,
    pub o: BotType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_cli_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_human_mark_is_invalid() {
        let mut config = Config::default();
        config.play.human_mark = Mark::Empty;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());

        let serialized_string = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized_string).unwrap();

        let read_string = content_provider.get_config_content().unwrap().unwrap();
        let deserialized_config: Config = serializer.deserialize(&read_string).unwrap();
        assert_eq!(default_config, deserialized_config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_manager_returns_saved_config() {
        let config = Config {
            play: PlayConfig {
                human_mark: Mark::O,
                opponent: BotType::Random,
            },
            show_values: true,
            ..Config::default()
        };
        let file_path = get_temp_file_path();
        let manager = get_config_manager(Some(&file_path));

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_show_values_defaults_to_false() {
        let yaml = "play:\n  human_mark: O\n  opponent: Random\nself_play:\n  x: Minimax\n  o: Random\n";
        let config: Config = YamlConfigSerializer::new().deserialize(yaml).unwrap();
        assert_eq!(config.play.human_mark, Mark::O);
        assert_eq!(config.self_play.o, BotType::Random);
        assert!(!config.show_values);
    }
}
