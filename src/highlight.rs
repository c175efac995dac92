use std::collections::BTreeSet;

use inksac::prelude::*;

#[derive(Debug, Clone)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
    commands: BTreeSet<&'static str>,
}

impl SyntaxHighlighter {
    pub fn new(commands: &[&'static str], enabled: bool) -> Self {
        let support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self::with_support(commands, support)
    }

    pub fn with_support(commands: &[&'static str], color_support: ColorSupport) -> Self {
        Self {
            color_support,
            commands: commands.iter().copied().collect(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colors each word in place; the whitespace between words is kept as
    /// typed so the cursor position stays valid.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.is_enabled() {
            return input.to_string();
        }

        let mut result = String::with_capacity(input.len());
        let mut rest = input;
        let mut index = 0;

        loop {
            let word_start = rest.len() - rest.trim_start_matches([' ', '\t']).len();
            result.push_str(&rest[..word_start]);
            rest = &rest[word_start..];
            if rest.is_empty() {
                break;
            }

            let word_len = rest.find([' ', '\t']).unwrap_or(rest.len());
            result.push_str(&self.style_word(&rest[..word_len], index));
            rest = &rest[word_len..];
            index += 1;
        }

        result
    }

    fn style_word(&self, word: &str, index: usize) -> String {
        if index == 0 {
            let color = if self.commands.contains(word) {
                Color::Cyan
            } else {
                Color::Red
            };
            let command_style = Style::builder().foreground(color).bold().build();
            return word.style(command_style).to_string();
        }

        if word.starts_with('-') {
            let flag_style = Style::builder().foreground(Color::Yellow).build();
            return word.style(flag_style).to_string();
        }

        word.to_string()
    }
}
