#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;

use super::ConversationLog;
use crate::domain::models::Media;

/// Renders the conversation newest-first. Purely a view transform; the log's
/// storage order is untouched.
pub fn lines<'a>(log: &'a ConversationLog, username: &str) -> Vec<Line<'a>> {
    let mut rendered: Vec<Line<'a>> = vec![];

    for message in log.display_order() {
        rendered.push(Line::from(vec![
            Span::styled(
                format!("{username}: "),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(message.text.as_str()),
        ]));

        if message.is_loading {
            rendered.push(Line::from(Span::styled(
                format!("Processing... {:.0}%", message.progress),
                Style::default().fg(Color::Yellow),
            )));
        } else if message.failed() {
            rendered.push(Line::from(Span::styled(
                "Processing failed.",
                Style::default().fg(Color::Red),
            )));
        } else if let Some(media) = &message.media {
            for line in media_lines(media) {
                rendered.push(line);
            }
        }

        rendered.push(Line::from(""));
    }

    return rendered;
}

fn media_lines<'a>(media: &'a Media) -> Vec<Line<'a>> {
    return match media {
        Media::Images(images) => images
            .iter()
            .enumerate()
            .map(|(idx, _src)| {
                let n = idx + 1;
                let total = images.len();
                return Line::from(Span::styled(
                    format!("[image {n}/{total}] ctrl+o to view"),
                    Style::default().fg(Color::Green),
                ));
            })
            .collect(),
        Media::Video(_) => vec![Line::from(Span::styled(
            "[video] rendered result",
            Style::default().fg(Color::Green),
        ))],
    };
}
