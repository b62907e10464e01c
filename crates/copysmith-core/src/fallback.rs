//! Deterministic fallback generator.
//!
//! Used when no provider credential is configured or the provider call
//! fails. It works from the finished prompt alone: the product name is
//! pulled out of the `for <name>.` (or `about <name>.`) phrase and a canned
//! block is picked by sniffing keywords. The first keyword that matches
//! wins, so `ad copy` is checked before `headline` (the ad prompt asks for a
//! headline too).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Name used when the prompt has no recognizable product phrase.
pub const DEFAULT_PRODUCT: &str = "your product";

const PLACEHOLDER: &str = "{product}";

static PRODUCT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:for|about) ([^.]+)\.").expect("product pattern is a valid regex")
});

/// One of the canned copy blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackBlock {
    Headline,
    ProductDescription,
    Email,
    SocialMedia,
    AdCopy,
    BlogIntro,
    SalesLetter,
    Tagline,
    Generic,
}

/// Keyword checks in priority order.
const KEYWORDS: [(&str, FallbackBlock); 8] = [
    ("ad copy", FallbackBlock::AdCopy),
    ("headline", FallbackBlock::Headline),
    ("product description", FallbackBlock::ProductDescription),
    ("email", FallbackBlock::Email),
    ("social media", FallbackBlock::SocialMedia),
    ("blog intro", FallbackBlock::BlogIntro),
    ("sales letter", FallbackBlock::SalesLetter),
    ("tagline", FallbackBlock::Tagline),
];

impl FallbackBlock {
    /// Block text with `{product}` placeholders.
    pub fn template(&self) -> &'static str {
        match self {
            FallbackBlock::Headline => HEADLINE,
            FallbackBlock::ProductDescription => PRODUCT_DESCRIPTION,
            FallbackBlock::Email => EMAIL,
            FallbackBlock::SocialMedia => SOCIAL_MEDIA,
            FallbackBlock::AdCopy => AD_COPY,
            FallbackBlock::BlogIntro => BLOG_INTRO,
            FallbackBlock::SalesLetter => SALES_LETTER,
            FallbackBlock::Tagline => TAGLINE,
            FallbackBlock::Generic => GENERIC,
        }
    }

    /// Fill every placeholder with the product name.
    pub fn render(&self, product: &str) -> String {
        self.template().replace(PLACEHOLDER, product)
    }
}

impl fmt::Display for FallbackBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackBlock::Headline => write!(f, "headline"),
            FallbackBlock::ProductDescription => write!(f, "product_description"),
            FallbackBlock::Email => write!(f, "email"),
            FallbackBlock::SocialMedia => write!(f, "social_media"),
            FallbackBlock::AdCopy => write!(f, "ad_copy"),
            FallbackBlock::BlogIntro => write!(f, "blog_intro"),
            FallbackBlock::SalesLetter => write!(f, "sales_letter"),
            FallbackBlock::Tagline => write!(f, "tagline"),
            FallbackBlock::Generic => write!(f, "generic"),
        }
    }
}

/// Extract the product name from a prompt, or [`DEFAULT_PRODUCT`].
pub fn extract_product(prompt: &str) -> String {
    PRODUCT_PATTERN
        .captures(prompt)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| DEFAULT_PRODUCT.to_string())
}

/// Pick the block for a prompt by keyword, first match wins.
pub fn select_block(prompt: &str) -> FallbackBlock {
    KEYWORDS
        .iter()
        .find(|(keyword, _)| prompt.contains(keyword))
        .map(|(_, block)| *block)
        .unwrap_or(FallbackBlock::Generic)
}

/// Produce fallback copy for a prompt.
pub fn generate_fallback(prompt: &str) -> String {
    let product = extract_product(prompt);
    let block = select_block(prompt);
    tracing::debug!(block = %block, product = %product, "rendering fallback copy");
    block.render(&product)
}

const HEADLINE: &str = "\
**Option 1:** Transform Your Business with {product}
Emphasizes transformation and directly addresses the target audience's desire for improvement.

**Option 2:** {product} - Where Innovation Meets Simplicity
Balances two key values: cutting-edge solutions and ease of use.

**Option 3:** Unlock Your Full Potential with {product}
Creates aspiration and positions the product as an enabler of success.";

const PRODUCT_DESCRIPTION: &str = "\
Introducing {product} - the professional solution designed to revolutionize the way you work.

Built specifically for discerning professionals who demand excellence, {product} combines powerful features with intuitive design. Our platform streamlines your workflow, saves valuable time, and delivers results that exceed expectations.

**Key Features:**
• Advanced automation capabilities
• Seamless integration with existing tools
• Enterprise-grade security
• 24/7 customer support

**Why Choose {product}?**
Join thousands of satisfied customers who have already transformed their business operations. With {product}, you're not just buying a product - you're investing in your success.

Ready to get started? Try {product} free for 14 days, no credit card required.";

const EMAIL: &str = "\
**Subject Line:** Discover how {product} can transform your workflow

Hi there,

Are you tired of juggling multiple tools and wasting time on repetitive tasks?

{product} was created specifically to solve these challenges. Our platform brings everything you need into one powerful, easy-to-use solution.

Here's what you'll get:
✓ Streamlined workflows that save hours every week
✓ Powerful automation that works in the background
✓ Intuitive interface that requires no training
✓ Results you can measure from day one

Over 10,000 professionals have already made the switch. Here's what they're saying:

\"{product} has completely transformed how we work. We're more efficient and our team is happier.\" - Sarah M., Operations Director

**Special Offer:** Start your free 14-day trial today and see the difference for yourself.

[Get Started Now]

Best regards,
The {product} Team";

const SOCIAL_MEDIA: &str = "\
**LinkedIn Version:**
Tired of inefficient workflows? {product} streamlines your operations and saves you hours every week. Join 10,000+ professionals who've already made the switch. Try free for 14 days → [link]

**Twitter Version:**
Say goodbye to workflow chaos! 🚀 {product} brings everything you need into one powerful platform. Start your free trial today → [link] #productivity #automation

**Instagram Version:**
✨ Work smarter, not harder ✨

{product} helps professionals like you:
⚡ Save time on repetitive tasks
📊 Get better results
🎯 Stay focused on what matters

Link in bio to start your free trial!";

const AD_COPY: &str = "\
**Headline:** Transform Your Workflow in 14 Days

**Body:**
{product} is the all-in-one solution that helps professionals work smarter, not harder. Automate repetitive tasks, streamline operations, and achieve better results - all from one intuitive platform.

Trusted by 10,000+ professionals worldwide.

**Call to Action:**
Start Your Free Trial Today - No Credit Card Required";

const BLOG_INTRO: &str = "\
In today's fast-paced business environment, efficiency isn't just a luxury - it's a necessity. Yet, countless professionals find themselves drowning in repetitive tasks, juggling multiple tools, and struggling to maintain productivity.

What if there was a better way?

Enter {product}, a revolutionary solution that's transforming how professionals approach their daily work. But before we dive into the specifics, let's talk about why traditional approaches to workflow management are falling short and what makes a truly effective solution.

In this comprehensive guide, we'll explore how {product} is helping thousands of professionals reclaim their time, streamline their operations, and achieve results they never thought possible. Whether you're a solo entrepreneur or part of a large organization, the insights shared here will change the way you think about productivity.

Let's get started.";

const SALES_LETTER: &str = "\
Dear Professional,

**PROBLEM:** You're working harder than ever, but feeling like you're falling behind.

Every day brings another pile of repetitive tasks. Another hour lost switching between tools. Another missed opportunity because you couldn't move fast enough.

Sound familiar?

**AGITATION:** You've tried other solutions. Downloaded the apps, watched the tutorials, promised yourself things would change. But nothing really solved the underlying problem. You're still overwhelmed, still stressed, still looking for a way out.

**SOLUTION:** That's why we created {product}.

{product} isn't just another productivity tool - it's a complete transformation of how you work. We've taken everything you need and combined it into one powerful, intuitive platform that actually delivers on its promises.

**Here's what makes {product} different:**

✓ It works WITH your existing workflow, not against it
✓ Setup takes minutes, not days
✓ Results are visible from day one
✓ No technical expertise required

**The Results Speak for Themselves:**

Our customers report an average of 10 hours saved per week. That's an entire workday back in your pocket. Time you can spend on what really matters - growing your business, serving your customers, or simply enjoying life outside of work.

**Risk-Free Guarantee:**

Try {product} free for 14 days. If you don't see immediate improvements in your workflow, simply cancel - no questions asked.

**Your Next Step:**

The choice is yours. You can continue struggling with the status quo, or you can take action today and join the thousands of professionals who've already transformed their work with {product}.

[Start Your Free Trial Now]

To your success,
The {product} Team

P.S. Remember, you have nothing to lose with our 14-day free trial. But every day you wait is another day of lost productivity. Take action now.";

const TAGLINE: &str = "\
**Option 1:** {product} - Work Smarter, Achieve More
Simple, aspirational, and focused on results.

**Option 2:** Where Productivity Meets Simplicity
Emphasizes the dual benefits of power and ease of use.

**Option 3:** {product} - Your Success, Simplified
Personal and benefit-focused, positioning the product as an enabler.

**Option 4:** Transform Work, Transform Results
Action-oriented and emphasizes tangible outcomes.

**Option 5:** {product} - The Smarter Way to Work
Positions the product as an intelligent, modern solution.";

const GENERIC: &str = "\
{product} represents the future of professional excellence. Our innovative solution combines cutting-edge technology with user-friendly design to deliver exceptional results.

With {product}, you'll experience unprecedented efficiency, seamless workflow integration, and measurable improvements in productivity. Join thousands of satisfied customers who have already discovered the difference.

Ready to transform your work? Get started with {product} today.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::build_prompt;
    use copysmith_types::copy::{CopyRequest, CopyType, Tone};

    fn prompt_for(copy_type: CopyType) -> String {
        build_prompt(&CopyRequest {
            copy_type,
            product: "Acme Suite".to_string(),
            target_audience: "SMBs".to_string(),
            key_benefits: "fast, cheap".to_string(),
            tone: Tone::Professional,
            additional_info: None,
        })
    }

    #[test]
    fn test_extract_product_from_for_phrase() {
        assert_eq!(
            extract_product("Create ad copy for Acme Suite. Target audience: SMBs."),
            "Acme Suite"
        );
    }

    #[test]
    fn test_extract_product_from_about_phrase() {
        assert_eq!(
            extract_product("Write an engaging blog introduction about Acme Suite. Tone: casual."),
            "Acme Suite"
        );
    }

    #[test]
    fn test_extract_product_default() {
        assert_eq!(extract_product("no product phrase here"), DEFAULT_PRODUCT);
        assert_eq!(extract_product("headline for . Target"), DEFAULT_PRODUCT);
    }

    #[test]
    fn test_each_copy_type_selects_its_block() {
        let expected = [
            (CopyType::WebsiteHeadline, FallbackBlock::Headline),
            (CopyType::ProductDescription, FallbackBlock::ProductDescription),
            (CopyType::EmailCampaign, FallbackBlock::Email),
            (CopyType::SocialMediaPost, FallbackBlock::SocialMedia),
            (CopyType::AdCopy, FallbackBlock::AdCopy),
            (CopyType::BlogIntro, FallbackBlock::BlogIntro),
            (CopyType::SalesLetter, FallbackBlock::SalesLetter),
            (CopyType::Tagline, FallbackBlock::Tagline),
        ];
        for (copy_type, block) in expected {
            assert_eq!(select_block(&prompt_for(copy_type)), block, "{copy_type}");
        }
    }

    #[test]
    fn test_each_copy_type_renders_product_name() {
        for copy_type in CopyType::ALL {
            let copy = generate_fallback(&prompt_for(copy_type));
            assert!(copy.contains("Acme Suite"), "{copy_type} fallback lacks product");
            assert!(!copy.contains(PLACEHOLDER));
            assert!(!copy.contains(DEFAULT_PRODUCT));
        }
    }

    #[test]
    fn test_no_keyword_selects_generic() {
        let copy = generate_fallback("Describe the mood for Acme Suite.");
        assert_eq!(copy, GENERIC.replace(PLACEHOLDER, "Acme Suite"));
    }

    #[test]
    fn test_every_placeholder_replaced() {
        let copy = generate_fallback("Create memorable taglines/slogans for Acme Suite. Tone: urgent.");
        assert_eq!(copy.matches("Acme Suite").count(), TAGLINE.matches(PLACEHOLDER).count());
        assert!(copy.contains("**Option 5:** Acme Suite - The Smarter Way to Work"));
    }

    #[test]
    fn test_headline_block_structure() {
        let copy = generate_fallback(&prompt_for(CopyType::WebsiteHeadline));
        assert!(copy.starts_with("**Option 1:** Transform Your Business with Acme Suite"));
        assert!(copy.contains("**Option 3:**"));
        assert!(!copy.contains("**Option 4:**"));
    }

    #[test]
    fn test_each_block_keeps_its_structure() {
        let markers: [(CopyType, &[&str]); 6] = [
            (
                CopyType::ProductDescription,
                &["Introducing Acme Suite - the professional solution", "**Key Features:**", "**Why Choose Acme Suite?**"],
            ),
            (
                CopyType::EmailCampaign,
                &["**Subject Line:** Discover how Acme Suite", "**Special Offer:**", "The Acme Suite Team"],
            ),
            (
                CopyType::SocialMediaPost,
                &["**LinkedIn Version:**", "**Twitter Version:**", "**Instagram Version:**"],
            ),
            (
                CopyType::AdCopy,
                &["**Headline:** Transform Your Workflow in 14 Days", "**Body:**", "**Call to Action:**"],
            ),
            (
                CopyType::BlogIntro,
                &["In today's fast-paced business environment", "Enter Acme Suite, a revolutionary solution", "Let's get started."],
            ),
            (
                CopyType::SalesLetter,
                &["**PROBLEM:**", "**AGITATION:**", "**SOLUTION:** That's why we created Acme Suite."],
            ),
        ];
        for (copy_type, expected) in markers {
            let copy = generate_fallback(&prompt_for(copy_type));
            for marker in expected {
                assert!(copy.contains(marker), "{copy_type} fallback lacks {marker:?}");
            }
        }
    }
}
