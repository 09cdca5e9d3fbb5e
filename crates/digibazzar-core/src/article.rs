//! Article synthesizer.
//!
//! Posts carry no body text. The single-post view is generated on demand by
//! filling a fixed narrative template with the post's title and category.
//! The template is a list of block shapes whose text is made of literal
//! segments and named slots; synthesis is plain substitution, so the same
//! `(title, category)` always yields the same article.

use serde::Serialize;

/// Named substitution points in the article template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Title,
    Category,
}

/// One piece of template text
#[derive(Debug, Clone, Copy)]
enum Segment {
    Text(&'static str),
    Strong(&'static str),
    Slot(Slot),
    StrongSlot(Slot),
}

impl Segment {
    #[cfg(test)]
    fn slot(&self) -> Option<Slot> {
        match self {
            Segment::Slot(slot) | Segment::StrongSlot(slot) => Some(*slot),
            Segment::Text(_) | Segment::Strong(_) => None,
        }
    }
}

/// Shape of one article block before substitution
#[derive(Debug, Clone, Copy)]
enum BlockTemplate {
    Lead(&'static [Segment]),
    Heading(u8, &'static [Segment]),
    Paragraph(&'static [Segment]),
    PullQuote(&'static [Segment], &'static str),
    BulletList(&'static [&'static [Segment]]),
    Step(u8, &'static str, &'static [Segment]),
}

impl BlockTemplate {
    #[cfg(test)]
    fn segments(&self) -> Vec<Segment> {
        match self {
            BlockTemplate::Lead(s)
            | BlockTemplate::Heading(_, s)
            | BlockTemplate::Paragraph(s)
            | BlockTemplate::PullQuote(s, _)
            | BlockTemplate::Step(_, _, s) => s.to_vec(),
            BlockTemplate::BulletList(items) => {
                items.iter().flat_map(|item| item.iter().copied()).collect()
            }
        }
    }
}

use Segment::{Slot as S, Strong, StrongSlot as SS, Text as T};

const QUOTE_ATTRIBUTION: &str = "Adarsh Arya";

const TEMPLATE: &[BlockTemplate] = &[
    BlockTemplate::Lead(&[
        SS(Slot::Title),
        T(" is one of the most critical aspects of digital success in today's "),
        S(Slot::Category),
        T(" landscape. Whether you are a small business in Varanasi or a global brand, \
           understanding this concept is key to sustainable growth."),
    ]),
    BlockTemplate::Heading(
        2,
        &[T("Why "), S(Slot::Title), T(" Matters for Your Business?")],
    ),
    BlockTemplate::Paragraph(&[
        T("In the fast-paced world of "),
        S(Slot::Category),
        T(", staying ahead of the curve is essential. We have seen many businesses fail \
           simply because they ignored the fundamentals of "),
        SS(Slot::Title),
        T(". It directly affects how customers perceive your brand and impacts your \
           bottom line revenue."),
    ]),
    BlockTemplate::PullQuote(
        &[
            T("The key to success in Digital Marketing is not just execution, but \
               understanding the strategy behind "),
            S(Slot::Title),
            T(". It's about connecting with humans, not just algorithms."),
        ],
        QUOTE_ATTRIBUTION,
    ),
    BlockTemplate::Heading(3, &[T("Key Benefits of Mastering This:")]),
    BlockTemplate::BulletList(&[
        &[
            Strong("Increased Visibility:"),
            T(" Proper implementation ensures you are seen by the right audience at the \
               right time."),
        ],
        &[
            Strong("Higher Engagement:"),
            T(" Content tailored around this topic resonates better with users, leading \
               to more likes, shares, and comments."),
        ],
        &[
            Strong("Better ROI:"),
            T(" Efficient strategies lead to lower costs and higher returns on your \
               marketing investment."),
        ],
    ]),
    BlockTemplate::Heading(2, &[T("How to Implement This Strategy")]),
    BlockTemplate::Paragraph(&[
        T("Start by analyzing your current performance. Are you currently leveraging "),
        S(Slot::Title),
        T("? If not, it is time to create a roadmap. At "),
        Strong("The Digibazzar"),
        T(", we recommend a three-step approach: Analyze, Optimize, and Scale."),
    ]),
    BlockTemplate::Step(
        1,
        "The Analysis Phase",
        &[T("Look at your data. What does it tell you? Without data, you are just \
             guessing. Use tools like Google Analytics or Search Console.")],
    ),
    BlockTemplate::Step(
        2,
        "Optimization",
        &[T("Once you have the data, refine your approach. This might mean tweaking your \
             keywords, adjusting your ad spend, or redesigning your graphics.")],
    ),
    BlockTemplate::Heading(2, &[T("Conclusion")]),
    BlockTemplate::Paragraph(&[
        T("Mastering "),
        SS(Slot::Title),
        T(" is a journey, not a destination. Keep testing, keep learning, and keep \
           growing. If you need expert help, The Digibazzar is always here to assist you \
           in Varanasi."),
    ]),
];

/// A run of text, optionally emphasised
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inline {
    pub text: String,
    pub strong: bool,
}

/// One block of a synthesized article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Opening paragraph, rendered larger than body text
    Lead { content: Vec<Inline> },
    Heading { level: u8, text: String },
    Paragraph { content: Vec<Inline> },
    PullQuote { text: String, attribution: String },
    BulletList { items: Vec<Vec<Inline>> },
    /// Numbered sub-process step
    Step {
        number: u8,
        heading: String,
        body: Vec<Inline>,
    },
}

/// A synthesized long-form article
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub blocks: Vec<Block>,
}

/// Fill the article template with `title` and `category`
pub fn synthesize(title: &str, category: &str) -> Article {
    let fill = |slot: Slot| match slot {
        Slot::Title => title,
        Slot::Category => category,
    };

    let inlines = |segments: &[Segment]| -> Vec<Inline> {
        segments
            .iter()
            .map(|segment| match *segment {
                Segment::Text(text) => Inline {
                    text: text.to_string(),
                    strong: false,
                },
                Segment::Strong(text) => Inline {
                    text: text.to_string(),
                    strong: true,
                },
                Segment::Slot(slot) => Inline {
                    text: fill(slot).to_string(),
                    strong: false,
                },
                Segment::StrongSlot(slot) => Inline {
                    text: fill(slot).to_string(),
                    strong: true,
                },
            })
            .collect()
    };

    let flat = |segments: &[Segment]| -> String {
        inlines(segments).into_iter().map(|inline| inline.text).collect()
    };

    let blocks = TEMPLATE
        .iter()
        .map(|template| match *template {
            BlockTemplate::Lead(s) => Block::Lead {
                content: inlines(s),
            },
            BlockTemplate::Heading(level, s) => Block::Heading {
                level,
                text: flat(s),
            },
            BlockTemplate::Paragraph(s) => Block::Paragraph {
                content: inlines(s),
            },
            BlockTemplate::PullQuote(s, attribution) => Block::PullQuote {
                text: flat(s),
                attribution: attribution.to_string(),
            },
            BlockTemplate::BulletList(items) => Block::BulletList {
                items: items.iter().map(|&item| inlines(item)).collect(),
            },
            BlockTemplate::Step(number, heading, s) => Block::Step {
                number,
                heading: heading.to_string(),
                body: inlines(s),
            },
        })
        .collect();

    Article { blocks }
}

impl Article {
    /// Render as CommonMark. Substituted values are escaped.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            if !out.is_empty() {
                out.push('\n');
            }
            match block {
                Block::Lead { content } | Block::Paragraph { content } => {
                    out.push_str(&markdown_inlines(content));
                }
                Block::Heading { level, text } => {
                    out.push_str(&"#".repeat(usize::from(*level)));
                    out.push(' ');
                    out.push_str(&escape_markdown(text));
                }
                Block::PullQuote { text, attribution } => {
                    out.push_str(&format!(
                        "> \"{}\" - {}",
                        escape_markdown(text),
                        escape_markdown(attribution)
                    ));
                }
                Block::BulletList { items } => {
                    let lines: Vec<String> = items
                        .iter()
                        .map(|item| format!("- {}", markdown_inlines(item)))
                        .collect();
                    out.push_str(&lines.join("\n"));
                }
                Block::Step {
                    number,
                    heading,
                    body,
                } => {
                    out.push_str(&format!(
                        "### {}. {}\n\n{}",
                        number,
                        escape_markdown(heading),
                        markdown_inlines(body)
                    ));
                }
            }
            out.push('\n');
        }
        out
    }

    /// Render without markup, one block per paragraph
    pub fn to_plain_text(&self) -> String {
        let plain = |content: &[Inline]| -> String {
            content.iter().map(|inline| inline.text.as_str()).collect()
        };

        self.blocks
            .iter()
            .map(|block| match block {
                Block::Lead { content } | Block::Paragraph { content } => plain(content),
                Block::Heading { text, .. } => text.clone(),
                Block::PullQuote { text, attribution } => {
                    format!("\"{}\" - {}", text, attribution)
                }
                Block::BulletList { items } => items
                    .iter()
                    .map(|item| format!("* {}", plain(item)))
                    .collect::<Vec<_>>()
                    .join("\n"),
                Block::Step {
                    number,
                    heading,
                    body,
                } => format!("{}. {}\n{}", number, heading, plain(body)),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Text of every heading, including step headings
    pub fn headings(&self) -> Vec<String> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading { text, .. } => Some(text.clone()),
                Block::Step {
                    number, heading, ..
                } => Some(format!("{}. {}", number, heading)),
                _ => None,
            })
            .collect()
    }

    /// Plain text of the lead paragraph
    pub fn lead(&self) -> Option<String> {
        self.blocks.iter().find_map(|block| match block {
            Block::Lead { content } => {
                Some(content.iter().map(|inline| inline.text.as_str()).collect())
            }
            _ => None,
        })
    }
}

fn markdown_inlines(content: &[Inline]) -> String {
    content
        .iter()
        .map(|inline| {
            let text = escape_markdown(&inline.text);
            if inline.strong {
                format!("**{}**", text)
            } else {
                text
            }
        })
        .collect()
}

/// Escape inline markup and keep the text on one line.
///
/// Line breaks become spaces so a value can never open a new block.
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\r' | '\n' => out.push(' '),
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '>' | '~' | '&' | '#' | '!' | '|' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = synthesize("Technical SEO Checklist", "SEO");
        let b = synthesize("Technical SEO Checklist", "SEO");
        assert_eq!(a, b);
        assert_eq!(a.to_markdown(), b.to_markdown());
    }

    #[test]
    fn test_structure() {
        let article = synthesize("Color Psychology", "Design");
        let blocks = &article.blocks;
        assert!(matches!(blocks[0], Block::Lead { .. }));
        assert_eq!(
            blocks
                .iter()
                .filter(|b| matches!(b, Block::PullQuote { .. }))
                .count(),
            1
        );
        let steps: Vec<u8> = blocks
            .iter()
            .filter_map(|b| match b {
                Block::Step { number, .. } => Some(*number),
                _ => None,
            })
            .collect();
        assert_eq!(steps, vec![1, 2]);
        assert!(blocks
            .iter()
            .any(|b| matches!(b, Block::BulletList { items } if items.len() == 3)));
    }

    #[test]
    fn test_title_in_heading_and_category_in_lead() {
        let article = synthesize("X", "Y");
        assert!(article.headings().iter().any(|h| h.contains('X')));
        assert!(article.lead().unwrap().contains('Y'));
    }

    #[test]
    fn test_every_title_slot_differs() {
        let a = synthesize("Retargeting Magic", "PPC Ads");
        let b = synthesize("Maximizing ROAS", "PPC Ads");
        for (template, (left, right)) in TEMPLATE.iter().zip(a.blocks.iter().zip(&b.blocks)) {
            let has_title = template
                .segments()
                .iter()
                .any(|s| s.slot() == Some(Slot::Title));
            if has_title {
                assert_ne!(left, right);
            } else {
                assert_eq!(left, right);
            }
        }
    }

    #[test]
    fn test_markdown_shape() {
        let md = synthesize("Logo Design Basics", "Design").to_markdown();
        assert!(md.starts_with("**Logo Design Basics** is one of"));
        assert!(md.contains("## Why Logo Design Basics Matters for Your Business?"));
        assert!(md.contains("> \"The key to success"));
        assert!(md.contains("- **Better ROI:**"));
        assert!(md.contains("### 1. The Analysis Phase"));
        assert!(md.contains("### 2. Optimization"));
        assert!(md.contains("## Conclusion"));
    }

    #[test]
    fn test_markdown_escapes_slots() {
        let md = synthesize("*bold* [link]", "SEO").to_markdown();
        assert!(md.contains(r"\*bold\* \[link\]"));
        assert!(!md.contains("[link]("));
    }

    #[test]
    fn test_markdown_escapes_strikethrough() {
        let md = synthesize("~~Old~~ News", "SEO").to_markdown();
        assert!(md.contains(r"\~\~Old\~\~ News"));
        assert!(!md.contains(" ~~Old"));
    }

    #[test]
    fn test_markdown_escapes_entities() {
        let md = synthesize("Fish & Chips &copy;", "SEO").to_markdown();
        assert!(md.contains(r"Fish \& Chips \&copy;"));
    }

    #[test]
    fn test_markdown_escapes_block_markers() {
        let md = synthesize("#1 Tip! | Cheat Sheet", "SEO").to_markdown();
        assert!(md.contains(r"\#1 Tip\! \| Cheat Sheet"));
    }

    #[test]
    fn test_markdown_slot_newlines_stay_inline() {
        let md = synthesize("Line one\n# Injected heading", "Web\r\nDev").to_markdown();
        assert!(md.contains(r"Line one \# Injected heading"));
        assert!(md.contains("Web  Dev"));
        assert!(!md.lines().any(|line| line.starts_with("# ")));
    }

    #[test]
    fn test_plain_text() {
        let text = synthesize("A/B Testing Guide", "PPC Ads").to_plain_text();
        assert!(text.starts_with("A/B Testing Guide is one of"));
        assert!(text.contains("In the fast-paced world of PPC Ads"));
        assert!(text.contains("- Adarsh Arya"));
        assert!(!text.contains("**"));
    }
}
