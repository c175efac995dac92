use std::fs;

use log::debug;

use crate::path::{Normalizer, SEPARATOR};

pub const DEFAULT_PROMPT_ID: &str = "202413153";

/// Shown when the current directory can be neither resolved nor used as is.
const UNRESOLVED: &str = ".";

#[derive(Debug, Clone)]
pub struct PromptRenderer {
    prompt_id: String,
    normalizer: Normalizer,
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PROMPT_ID, Normalizer::default())
    }
}

impl PromptRenderer {
    pub fn new(prompt_id: impl Into<String>, normalizer: Normalizer) -> Self {
        Self {
            prompt_id: prompt_id.into(),
            normalizer,
        }
    }

    /// `*<id>_explorer <path>> `, with no trailing newline.
    pub fn render(&self, current_dir: &str) -> String {
        format!(
            "*{}_explorer {}> ",
            self.prompt_id,
            self.normalizer.normalize(&resolve(current_dir))
        )
    }
}

fn resolve(current_dir: &str) -> String {
    match fs::canonicalize(current_dir) {
        Ok(path) => path.to_string_lossy().into_owned(),
        Err(e) => {
            debug!("cannot resolve {}: {}", current_dir, e);
            if current_dir.starts_with(SEPARATOR) {
                current_dir.to_string()
            } else {
                UNRESOLVED.to_string()
            }
        }
    }
}
