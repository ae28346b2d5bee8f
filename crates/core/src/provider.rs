use std::{fmt, str::FromStr};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Missing API key for {provider_name}: {env_var} environment variable is not set")]
    MissingApiKey {
        provider_name: String,
        env_var: String,
    },

    #[error("Unknown provider '{0}'. Supported providers: groq, grok, openai, gemini")]
    Unknown(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Provider {
    #[default]
    Groq,
    Grok,
    Openai,
    Gemini,
}

pub struct ProviderConfig {
    pub api_url: &'static str,
    pub model: &'static str,
    pub env_var: &'static str,
}

impl Provider {
    pub fn config(&self) -> ProviderConfig {
        match self {
            Provider::Groq => ProviderConfig {
                api_url: "https://api.groq.com/openai/v1/chat/completions",
                model: "mixtral-8x7b-32768",
                env_var: "GROQ_API_KEY",
            },
            Provider::Grok => ProviderConfig {
                api_url: "https://api.x.ai/v1/chat/completions",
                model: "grok-4-fast",
                env_var: "XAI_API_KEY",
            },
            Provider::Openai => ProviderConfig {
                api_url: "https://api.openai.com/v1/chat/completions",
                model: "gpt-5.1",
                env_var: "OPENAI_API_KEY",
            },
            Provider::Gemini => ProviderConfig {
                api_url: "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions",
                model: "gemini-3-pro",
                env_var: "GEMINI_API_KEY",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Groq => "Groq",
            Provider::Grok => "Grok",
            Provider::Openai => "OpenAI",
            Provider::Gemini => "Gemini",
        }
    }

    /// Validate that the API key is set for this provider
    pub fn validate_api_key(&self) -> Result<String, ProviderError> {
        self.api_key_from(|var| std::env::var(var).ok())
    }

    /// Resolve the API key through `lookup`; blank values count as missing.
    pub fn api_key_from(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<String, ProviderError> {
        let config = self.config();
        lookup(config.env_var)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ProviderError::MissingApiKey {
                provider_name: self.name().to_string(),
                env_var: config.env_var.to_string(),
            })
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Provider {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "groq" => Ok(Provider::Groq),
            "grok" | "xai" => Ok(Provider::Grok),
            "openai" => Ok(Provider::Openai),
            "gemini" => Ok(Provider::Gemini),
            other => Err(ProviderError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groq_is_the_default() {
        let config = Provider::default().config();
        assert_eq!(config.env_var, "GROQ_API_KEY");
        assert_eq!(config.model, "mixtral-8x7b-32768");
    }

    #[test]
    fn api_key_is_read_from_the_provider_env_var() {
        let key = Provider::Openai
            .api_key_from(|var| (var == "OPENAI_API_KEY").then(|| " sk-test \n".to_string()))
            .unwrap();
        assert_eq!(key, "sk-test");
    }

    #[test]
    fn blank_api_key_is_missing() {
        let err = Provider::Groq
            .api_key_from(|_| Some("   ".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("GROQ_API_KEY"));
    }

    #[test]
    fn parses_provider_names() {
        assert_eq!("Groq".parse::<Provider>().unwrap(), Provider::Groq);
        assert_eq!("xai".parse::<Provider>().unwrap(), Provider::Grok);
        assert!(matches!(
            "claude".parse::<Provider>(),
            Err(ProviderError::Unknown(_))
        ));
    }
}
