use serde::{Deserialize, Serialize};

pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);
pub const DEFAULT_REGEX_DFA_SIZE_LIMIT: usize = 2 * (1 << 20);
pub const DEFAULT_REGEX_NEST_LIMIT: u32 = 250;

/// evaluator settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub regex: RegexSettings,
}

/// limits applied when compiling regex operands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexSettings {
    /// approximate size limit of a compiled pattern, in bytes
    #[serde(default = "default_size_limit")]
    pub size_limit: usize,
    /// approximate size limit of the lazy DFA cache, in bytes
    #[serde(default = "default_dfa_size_limit")]
    pub dfa_size_limit: usize,
    #[serde(default = "default_nest_limit")]
    pub nest_limit: u32,
}

impl Default for RegexSettings {
    fn default() -> Self {
        Self {
            size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            dfa_size_limit: DEFAULT_REGEX_DFA_SIZE_LIMIT,
            nest_limit: DEFAULT_REGEX_NEST_LIMIT,
        }
    }
}

fn default_size_limit() -> usize {
    DEFAULT_REGEX_SIZE_LIMIT
}

fn default_dfa_size_limit() -> usize {
    DEFAULT_REGEX_DFA_SIZE_LIMIT
}

fn default_nest_limit() -> u32 {
    DEFAULT_REGEX_NEST_LIMIT
}
