use crate::core::config::data::Config;
use crate::core::toml_file::path_display;

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        println!("  splash-ms: {}", self.splash_duration().as_millis());
        println!("  tick-ms: {}", self.tick_interval().as_millis());
        println!("  theme: {}", self.theme_name());
        match &self.content {
            Some(path) => println!("  content: {}", path_display(path)),
            None => println!("  content: (built-in sample)"),
        }
        match &self.log_file {
            Some(path) => println!("  log-file: {}", path_display(path)),
            None => println!("  log-file: (disabled)"),
        }
    }
}
