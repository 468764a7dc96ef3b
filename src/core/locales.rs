use std::str::FromStr;

use clap::builder::PossibleValue;

/// Languages the bundled prompt labels are translated to.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    CN,
    #[default]
    EN,
}

impl Language {
    pub fn possible_values() -> [Language; 2] {
        [Self::CN, Self::EN]
    }
    /// Short name accepted by `--lang`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CN => "cn",
            Self::EN => "en",
        }
    }
    /// Locale name of the bundled catalog, i.e. a file stem under `<root>/locales`.
    pub fn locale_str(&self) -> &'static str {
        match self {
            Self::CN => "zh-CN",
            Self::EN => "en",
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cn" | "zh-cn" => Ok(Self::CN),
            "en" => Ok(Self::EN),
            _ => Err(anyhow::anyhow!("no bundled prompt labels for language '{s}'")),
        }
    }
}

// lets `Language::possible_values()` feed `--lang` directly
#[allow(clippy::from_over_into)]
impl Into<PossibleValue> for Language {
    fn into(self) -> PossibleValue {
        PossibleValue::new(self.as_str())
    }
}
