// src/checker/markdown.rs
// =============================================================================
// This module extracts link and image targets from Markdown text.
//
// We use the `pulldown-cmark` crate which:
// - Parses Markdown into events (heading, paragraph, link, etc.)
// - Follows the CommonMark specification
// - Ships an HTML renderer that consumes any iterator of events
//
// Instead of walking the events ourselves and throwing them away, we run the
// normal HTML renderer and slip a small iterator adapter (LinkCollector) in
// front of it. The adapter writes down every link/image destination it sees
// and passes the event through unchanged, so the renderer behaves exactly as
// it would without us. Whatever pulldown-cmark does with odd markup is what
// we do with it too.
//
// Rust concepts:
// - Iterator adapters: wrapping one iterator in another
// - Lifetimes: the collector borrows the output Vec while rendering
// - Pattern matching: To identify link and image events
// =============================================================================

use pulldown_cmark::{html, Event, LinkType, Options, Parser, Tag};

// The result of running a document through the renderer
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Link and image targets, in the order they appear in the document
    pub targets: Vec<String>,
    /// The rendered HTML (we don't use it, but it proves rendering ran normally)
    pub html: String,
}

// Extracts every link and image target from Markdown text
//
// Parameters:
//   markdown: the markdown text to parse (borrowed as &str)
//
// Returns: Extraction with the targets and the rendered HTML
//
// Example input:
//   "See [guide](./guide.md) and ![logo](img/logo.png)"
//
// Example targets:
//   vec!["./guide.md", "img/logo.png"]
pub fn extract(markdown: &str) -> Extraction {
    let mut targets = Vec::new();
    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);

    let parser = Parser::new_ext(markdown, parser_options());

    // The collector borrows `targets` mutably until push_html is done with it
    let collector = LinkCollector {
        inner: parser,
        targets: &mut targets,
    };
    html::push_html(&mut html_output, collector);

    Extraction {
        targets,
        html: html_output,
    }
}

fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

// Wraps the parser's event stream and records link/image destinations
//
// Every event is forwarded untouched, so the HTML renderer downstream sees
// the same stream it would see without the collector.
struct LinkCollector<'t, I> {
    inner: I,
    targets: &'t mut Vec<String>,
}

impl<'a, 't, I> Iterator for LinkCollector<'t, I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.inner.next()?;

        // In pulldown-cmark 0.9 both are (link_type, destination, title)
        if let Event::Start(Tag::Link(link_type, dest, _) | Tag::Image(link_type, dest, _)) =
            &event
        {
            if is_captured(*link_type) {
                self.targets.push(dest.to_string());
            }
        }

        Some(event)
    }
}

// Autolinks (<https://...>) and e-mail autolinks are their own construct,
// not a [text](target) link, so they are left alone.
fn is_captured(link_type: LinkType) -> bool {
    !matches!(link_type, LinkType::Autolink | LinkType::Email)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why wrap the iterator instead of matching on events directly?
//    - push_html accepts *any* iterator of events
//    - By handing it our own iterator we get to see every event first
//    - The renderer never knows we were there
//
// 2. What is `'t` on LinkCollector?
//    - It's a lifetime: the collector holds a `&mut Vec<String>`
//    - The borrow ends when push_html returns and drops the collector
//    - After that we can move `targets` into the Extraction
//
// 3. What does `?` do inside next()?
//    - self.inner.next() returns Option<Event>
//    - `?` returns None early when the parser runs out of events
// -----------------------------------------------------------------------------
