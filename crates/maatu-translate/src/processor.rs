//! Language-pair-aware text normalization around the model call.
//!
//! Preprocessing runs before tokenization, postprocessing after decoding.
//! Both are deterministic so the whole pipeline stays reproducible given
//! fixed weights and beam settings.

/// Normalize source text before it reaches the tokenizer.
///
/// Collapses whitespace runs and strips control characters; the script
/// tags are attached separately in the generation request.
pub fn preprocess(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean decoded output before it is returned to the caller.
///
/// Some serving stacks echo the script tags at the start of the decoded
/// sequence; strip them, then normalize whitespace.
pub fn postprocess(text: &str) -> String {
    let mut words: Vec<&str> = text.split_whitespace().collect();
    while let Some(first) = words.first() {
        if is_script_tag(first) {
            words.remove(0);
        } else {
            break;
        }
    }
    words.join(" ")
}

fn is_script_tag(token: &str) -> bool {
    matches!(token, "eng_Latn" | "kan_Knda")
}
