/*!
 * Prompt construction for provider translation.
 */

use crate::language_utils;

/// Preferred Arabic renderings the provider is asked to use
pub const GLOSSARY: &[(&str, &str)] = &[
    ("Repository", "المستودع"),
    ("Pull Request", "طلب السحب"),
    ("Issue", "القضية"),
    ("Commit", "الالتزام"),
    ("Branch", "الفرع"),
    ("Merge", "الدمج"),
];

fn language_name(code: &str) -> String {
    language_utils::get_language_name(code).unwrap_or_else(|_| code.to_string())
}

/// System prompt: role, preservation rules and, for Arabic, the glossary
pub fn system_prompt(source_language: &str, target_language: &str) -> String {
    let arabic = language_utils::is_rule_target(target_language);
    let register = if arabic {
        "Use formal Modern Standard Arabic."
    } else {
        "Use a formal register."
    };
    let mut prompt = format!(
        "You are an expert {target} translator specializing in technical documentation \
         for software development. Translate {source} Markdown into {target} accurately \
         while preserving all formatting.\n\n\
         Rules:\n\
         1. Keep every templating tag such as {{% ... %}} and {{{{ ... }}}} exactly as written.\n\
         2. Do not translate code blocks, inline code, URLs or file paths.\n\
         3. Keep Markdown structure: headings, lists, links, tables and emphasis.\n\
         4. Keep product names (GitHub, Git, Copilot, Codespaces) in English.\n\
         5. {register}\n\
         6. Return only the translation, with no commentary.\n",
        source = language_name(source_language),
        target = language_name(target_language),
        register = register,
    );
    if arabic {
        prompt.push_str("\nPreferred terminology:\n");
        for (english, target) in GLOSSARY {
            prompt.push_str(&format!("- {}: {}\n", english, target));
        }
    }
    prompt
}

/// User prompt carrying the text and where it comes from
pub fn user_prompt(text: &str, context: &str) -> String {
    format!("Context: {}\n\nText to translate:\n{}", context, text)
}
