/// In-memory preview page: one block per label, rendered to static HTML.
mod server;

use std::{collections::BTreeMap, io::Write};

use chrono::{DateTime, Local};

use crate::{error::Result, page::Document};

pub use server::PreviewServer;

const BACKGROUND_COLOR: &str = "background-color";

/// Index of a block inside a [`PreviewPage`].
pub type BlockId = usize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub label: String,
    pub classes: Vec<String>,
    pub style: BTreeMap<String, String>,
}

impl Block {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn background_color(&self) -> Option<&str> {
        self.style.get(BACKGROUND_COLOR).map(String::as_str)
    }
}

#[derive(Clone, Debug)]
pub struct PreviewPage {
    pub title: String,
    pub blocks: Vec<Block>,
    pub generated_at: DateTime<Local>,
}

impl PreviewPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
            generated_at: Local::now(),
        }
    }

    /// Page with one block per label, each tagged with `class`.
    pub fn from_labels<I, S>(title: impl Into<String>, class: &str, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut page = Self::new(title);
        for label in labels {
            page.push(label, [class]);
        }
        page
    }

    pub fn push<S, C>(&mut self, label: S, classes: C) -> BlockId
    where
        S: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        self.blocks.push(Block {
            label: label.into(),
            classes: classes.into_iter().map(Into::into).collect(),
            style: BTreeMap::new(),
        });
        self.blocks.len() - 1
    }

    pub fn render(&self) -> String {
        format!(
            include_str!("statics/template.html"),
            title = escape(&self.title),
            generated_at = self.generated_at.to_rfc3339(),
            cards = self.blocks.iter().map(render_block).collect::<String>()
        )
    }

    pub fn write_to<W: Write>(&self, mut out: W) -> Result<()> {
        out.write_all(self.render().as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

impl Document for PreviewPage {
    type Handle = BlockId;

    fn elements_by_class_name(&self, class: &str) -> Vec<BlockId> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.has_class(class))
            .map(|(id, _)| id)
            .collect()
    }

    fn set_background_color(&mut self, element: BlockId, color: &str) {
        if let Some(block) = self.blocks.get_mut(element) {
            block
                .style
                .insert(BACKGROUND_COLOR.to_string(), color.to_string());
        }
    }
}

/// Labels "Card 1" through "Card `count`".
pub fn placeholder_labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Card {i}")).collect()
}

fn render_block(block: &Block) -> String {
    let style = if block.style.is_empty() {
        String::new()
    } else {
        let decls = block
            .style
            .iter()
            .map(|(k, v)| format!("{k}: {v};"))
            .collect::<Vec<_>>()
            .join(" ");
        format!(" style=\"{}\"", escape(&decls))
    };
    format!(
        include_str!("statics/card_template.html"),
        classes = escape(&block.classes.join(" ")),
        style = style,
        label = escape(&block.label)
    )
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{color::SequenceChannels, page};

    #[test]
    fn test_from_labels_builds_cards() {
        let page = PreviewPage::from_labels("Fonts", "card", ["Noto Sans", "Fira Code"]);
        assert_eq!(page.blocks.len(), 2);
        assert!(page.blocks.iter().all(|b| b.has_class("card")));
        assert_eq!(page.elements_by_class_name("card"), [0, 1]);
        assert!(page.elements_by_class_name("car").is_empty());
    }

    #[test]
    fn test_only_cards_are_colored() {
        let mut doc = PreviewPage::new("Mixed");
        doc.push("a", ["card"]);
        doc.push("b", ["note"]);
        doc.push("c", ["wide", "card"]);

        let mut source = SequenceChannels::new([10, 80, 250]).unwrap();
        assert_eq!(page::init_cards(&mut doc, "card", &mut source), 2);

        assert_eq!(doc.blocks[0].background_color(), Some("#5550fa"));
        assert_eq!(doc.blocks[1].background_color(), None);
        assert_eq!(doc.blocks[2].background_color(), Some("#5550fa"));
    }

    #[test]
    fn test_render_escapes_and_styles() {
        let mut page = PreviewPage::from_labels("<Fonts & more>", "card", ["\"quoted\""]);
        page.set_background_color(0, "#5550fa");
        page.set_background_color(7, "#5550fa");
        let html = page.render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>&lt;Fonts &amp; more&gt;</title>"));
        assert!(html.contains(
            "<div class=\"card\" style=\"background-color: #5550fa;\"><span>&quot;quoted&quot;</span></div>"
        ));
        assert!(html.contains(".cards {"));
    }

    #[test]
    fn test_unstyled_block_has_no_style_attribute() {
        let page = PreviewPage::from_labels("t", "card", ["x"]);
        assert!(page.render().contains("<div class=\"card\"><span>x</span></div>"));
    }

    #[test]
    fn test_write_to_matches_render() {
        let page = PreviewPage::from_labels("t", "card", ["x", "y"]);
        let mut buf = Vec::new();
        page.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), page.render());
    }

    #[test]
    fn test_placeholder_labels() {
        assert_eq!(placeholder_labels(3), ["Card 1", "Card 2", "Card 3"]);
        assert!(placeholder_labels(0).is_empty());
    }
}
