use yew::prelude::*;

use crate::content::Block;

pub fn render_blocks(blocks: &'static [Block]) -> Html {
    blocks.iter().map(render_block).collect::<Html>()
}

fn render_block(block: &'static Block) -> Html {
    match block {
        Block::Paragraph(text) => html! { <p class="content-text">{ *text }</p> },
        Block::Heading(text) => html! { <h3 class="content-subheading">{ *text }</h3> },
        Block::Card { title, lines } => {
            let (lead, items) = split_card_lines(lines);
            html! {
                <div class="content-card">
                    <h4 class="card-title">{ *title }</h4>
                    {
                        lead.iter().map(|line| html! { <p class="card-text">{ *line }</p> }).collect::<Html>()
                    }
                    if !items.is_empty() {
                        <ul class="card-list">
                            { items.iter().map(|line| html! { <li>{ *line }</li> }).collect::<Html>() }
                        </ul>
                    }
                </div>
            }
        }
    }
}

/// Card lines are either a short list, optionally preceded by one sentence
/// of prose. Anything ending in a full stop before the first short line is
/// treated as prose.
fn split_card_lines(lines: &'static [&'static str]) -> (&'static [&'static str], &'static [&'static str]) {
    if lines.len() <= 1 {
        return (lines, &[]);
    }
    let lead = lines
        .iter()
        .take_while(|line| is_prose(line))
        .count();
    lines.split_at(lead)
}

fn is_prose(line: &str) -> bool {
    line.ends_with('.') || line.ends_with(':') || line.len() > 120
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_card_is_prose() {
        const LINES: &[&str] = &["We work on contingency."];
        assert_eq!(split_card_lines(LINES), (LINES, &[][..]));
    }

    #[test]
    fn intro_sentence_precedes_the_list() {
        const LINES: &[&str] = &[
            "Car doors opened into cyclists' paths.",
            "Driver door openings",
            "Passenger door impacts",
        ];
        let (lead, items) = split_card_lines(LINES);
        assert_eq!(lead, &LINES[..1]);
        assert_eq!(items, &LINES[1..]);
    }

    #[test]
    fn bare_list_has_no_lead() {
        const LINES: &[&str] = &["Pain and suffering", "Emotional distress"];
        let (lead, items) = split_card_lines(LINES);
        assert!(lead.is_empty());
        assert_eq!(items.len(), 2);
    }
}
