use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const MAX_FACTORIAL_INPUT: i64 = 1000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub operands: OperandsConfig,
    pub factorial: FactorialConfig,
    pub primes: PrimesConfig,
    pub greeting: GreetingConfig,
    pub app: AppConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OperandsConfig {
    pub a: i64,
    pub b: i64,
}

impl Default for OperandsConfig {
    fn default() -> Self {
        Self { a: 10, b: 5 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorialConfig {
    pub n: i64,
}

impl Default for FactorialConfig {
    fn default() -> Self {
        Self { n: 5 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimesConfig {
    pub candidates: Vec<i64>,
}

impl Default for PrimesConfig {
    fn default() -> Self {
        Self {
            candidates: (2..=11).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub name: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            name: "Jenkins User".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub version: String,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            environment: "Production".to_string(),
        }
    }
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，缺少的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| DemoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("app.version", &self.app.version)?;
        validate_non_empty_string("app.environment", &self.app.environment)?;
        validate_range("factorial.n", self.factorial.n, 0, MAX_FACTORIAL_INPUT)?;
        Ok(())
    }
}

/// 替換環境變數 (例如 ${USER_NAME})，找不到的變數保留原樣
fn substitute_env_vars(content: &str) -> String {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    });

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}
