//! Prompt builder for copy requests.
//!
//! Every copy type shares one template shape:
//!
//! ```text
//! {lead} {product}. Target audience: {audience}. Tone: {tone}. Key benefits: {benefits}. {context}
//!
//! {instruction}
//! ```
//!
//! `{context}` is `Additional context: ...` when the request carries
//! non-empty additional info, and empty otherwise. The fallback generator
//! keys off the wording of `{lead}` and `{instruction}`, so changes here must
//! keep the phrases it sniffs for.

use copysmith_types::copy::{CopyRequest, CopyType};

/// Opening phrase of the prompt, ending right before the product name.
pub fn lead(copy_type: CopyType) -> &'static str {
    match copy_type {
        CopyType::WebsiteHeadline => "Create a compelling website headline for",
        CopyType::ProductDescription => "Write a professional product description for",
        CopyType::EmailCampaign => "Create an email campaign copy for",
        CopyType::SocialMediaPost => "Write a social media post for",
        CopyType::AdCopy => "Create ad copy for",
        CopyType::BlogIntro => "Write an engaging blog introduction about",
        CopyType::SalesLetter => "Create a sales letter for",
        CopyType::Tagline => "Create memorable taglines/slogans for",
    }
}

/// Closing instruction, placed after a blank line.
pub fn instruction(copy_type: CopyType) -> &'static str {
    match copy_type {
        CopyType::WebsiteHeadline => "Provide 3 headline options with brief explanations.",
        CopyType::ProductDescription => "Include features, benefits, and a call to action.",
        CopyType::EmailCampaign => "Include subject line, opening, body, and call to action.",
        CopyType::SocialMediaPost => "Provide 3 versions optimized for different platforms.",
        CopyType::AdCopy => {
            "Include headline, body text, and call to action. Keep it concise and impactful."
        }
        CopyType::BlogIntro => "Hook the reader and establish the value proposition.",
        CopyType::SalesLetter => "Use proven copywriting frameworks like AIDA or PAS.",
        CopyType::Tagline => "Provide 5 options that are catchy, memorable, and on-brand.",
    }
}

/// Build the generation prompt for a request.
pub fn build_prompt(request: &CopyRequest) -> String {
    let context = request
        .additional_context()
        .map(|info| format!("Additional context: {info}"))
        .unwrap_or_default();

    format!(
        "{} {}. Target audience: {}. Tone: {}. Key benefits: {}. {}\n\n{}",
        lead(request.copy_type),
        request.product,
        request.target_audience,
        request.tone,
        request.key_benefits,
        context,
        instruction(request.copy_type),
    )
}
