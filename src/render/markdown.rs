//! HTML synthesis for Markdown sources.
//!
//! Markdown goes through `pulldown-cmark` with plain CommonMark options. In
//! split mode the title is taken out of the parser's event stream, so the
//! split does not depend on how the renderer lays out its output lines.

use std::ops::Range;

use pulldown_cmark::{html, Event, HeadingLevel, Parser, Tag};

use crate::model::{HtmlFragment, Manuscript};
use crate::parser::{OutputMode, SynthesisOptions};

use super::{Synthesis, SynthesisReport};

/// Render Markdown to HTML without any extensions.
pub fn markdown_to_html(markdown: &str) -> HtmlFragment {
    render_events(Parser::new(markdown).collect())
}

/// Convert Markdown to a manuscript.
pub fn synthesize_markdown(markdown: &str, options: &SynthesisOptions) -> Synthesis {
    let events: Vec<Event> = Parser::new(markdown).collect();
    let report = count_blocks(&events);

    let manuscript = match options.mode {
        OutputMode::Split => {
            let (title, body) = split_title_events(events);
            match title {
                Some(title) => Manuscript::split(render_events(title), render_events(body)),
                None => Manuscript::single(render_events(body)),
            }
        }
        OutputMode::Single => Manuscript::single(render_events(events)),
    };

    Synthesis::new(manuscript, report)
}

/// Split rendered Markdown into (title, body) HTML.
///
/// The title is the first level-1 heading that is not nested inside a list,
/// blockquote or other container. Without one, the title is `None` and the
/// body holds everything.
pub fn split_markdown(markdown: &str) -> (Option<HtmlFragment>, HtmlFragment) {
    let events: Vec<Event> = Parser::new(markdown).collect();
    let (title, body) = split_title_events(events);
    (title.map(render_events), render_events(body))
}

fn split_title_events(mut events: Vec<Event<'_>>) -> (Option<Vec<Event<'_>>>, Vec<Event<'_>>) {
    match find_title(&events) {
        Some(range) => {
            let title: Vec<Event> = events.drain(range).collect();
            (Some(title), events)
        }
        None => (None, events),
    }
}

/// Event range of the first top-level `# heading`, inclusive of its end tag.
fn find_title(events: &[Event<'_>]) -> Option<Range<usize>> {
    let mut depth = 0usize;
    let mut start = None;

    for (index, event) in events.iter().enumerate() {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if depth == 0 => {
                start = Some(index);
                depth += 1;
            }
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some(start) = start {
                        return Some(start..index + 1);
                    }
                }
            }
            _ => {}
        }
    }

    None
}

fn render_events(events: Vec<Event<'_>>) -> HtmlFragment {
    let mut out = String::new();
    html::push_html(&mut out, events.into_iter());
    HtmlFragment::from(out)
}

fn count_blocks(events: &[Event<'_>]) -> SynthesisReport {
    let mut report = SynthesisReport::new();
    for event in events {
        match event {
            Event::Start(Tag::Heading { .. }) => report.add_heading(),
            Event::Start(Tag::Paragraph) => report.add_paragraph(),
            Event::Start(Tag::List(_)) => report.add_list(),
            Event::Start(Tag::Item) => report.add_list_item(),
            _ => {}
        }
    }
    report
}
