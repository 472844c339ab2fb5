use common::config::parse_var_or_default;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationConfig {
    port: u16,
}

impl ApplicationConfig {
    const PORT_ENV_VAR: &str = "PORT";
    pub const DEFAULT_PORT: u16 = 8001;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: parse_var_or_default(lookup, Self::PORT_ENV_VAR, Self::DEFAULT_PORT),
        }
    }

    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            port: Self::DEFAULT_PORT,
        }
    }
}
