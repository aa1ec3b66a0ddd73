use crate::models::{
    Block, BlockContent, BlockKind, DEFAULT_TITLE, Document, HeatLevel, Hero, IngredientItem,
    Ingredients, Note, Step,
};

use super::duration::parse_duration_minutes;
use super::fields::{parse_field, physical_lines, unescape_text};

/// Decode recipe text into a [`Document`].
///
/// Decoding never fails. Unknown markers, fields and values are skipped,
/// and a file without a `# ` heading gets [`DEFAULT_TITLE`].
pub fn decode(text: &str) -> Document {
    let mut decoder = Decoder::new();
    for line in physical_lines(text) {
        decoder.push(line);
    }
    decoder.finish()
}

/// A block whose marker has been seen and whose body is still being collected
struct OpenBlock<'a> {
    kind: BlockKind,
    lines: Vec<&'a str>,
}

struct Decoder<'a> {
    title: Option<String>,
    open: Option<OpenBlock<'a>>,
    out: Vec<Block>,
}

impl<'a> Decoder<'a> {
    fn new() -> Self {
        Self {
            title: None,
            open: None,
            out: vec![],
        }
    }

    fn push(&mut self, line: &'a str) {
        if let Some(kind) = BlockKind::from_marker_line(line) {
            self.flush();
            self.open = Some(OpenBlock {
                kind,
                lines: vec![],
            });
            return;
        }

        match &mut self.open {
            Some(open) => open.lines.push(line),
            // Before the first marker only the first heading matters
            None => {
                if self.title.is_none() {
                    self.title = title_from_line(line);
                }
            }
        }
    }

    fn flush(&mut self) {
        if let Some(open) = self.open.take() {
            let content = parse_block(open.kind, &open.lines);
            self.out.push(Block::new(content));
        }
    }

    fn finish(mut self) -> Document {
        // EOF flush
        self.flush();
        Document::with_blocks(
            self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            self.out,
        )
    }
}

fn title_from_line(line: &str) -> Option<String> {
    line.trim()
        .strip_prefix("# ")
        .map(|title| title.trim().to_string())
}

fn parse_block(kind: BlockKind, lines: &[&str]) -> BlockContent {
    match kind {
        BlockKind::Hero => BlockContent::Hero(parse_hero(lines)),
        BlockKind::Ingredients => BlockContent::Ingredients(parse_ingredients(lines)),
        BlockKind::Step => BlockContent::Step(parse_step(lines)),
        BlockKind::Note => BlockContent::Note(parse_note(lines)),
    }
}

fn parse_hero(lines: &[&str]) -> Hero {
    let mut hero = Hero::default();
    for field in lines.iter().filter_map(|line| parse_field(line)) {
        let value = field.value.to_string();
        match field.key.as_str() {
            "image" => hero.image_name = value,
            "servings" => hero.servings = value,
            "time" => hero.total_time = value,
            "nutrition" => hero.nutrition = value,
            _ => {}
        }
    }
    hero
}

fn parse_ingredients(lines: &[&str]) -> Ingredients {
    let mut ingredients = Ingredients::default();
    for line in lines {
        let Some(body) = line.trim().strip_prefix('-') else {
            continue;
        };
        if let Some(item) = parse_ingredient(body) {
            ingredients.push(item);
        }
    }
    ingredients
}

/// Parse the text after a list dash.
///
/// Labelled parts (`name=`, `amount=`, `icon=`) go to their field; unlabelled
/// parts fill `name` and then `amount` in order. Items without a name are dropped.
fn parse_ingredient(body: &str) -> Option<IngredientItem> {
    let mut name = String::new();
    let mut amount = String::new();
    let mut icon = None;

    let parts = body.split('|').map(str::trim).filter(|part| !part.is_empty());
    for part in parts {
        match parse_field(part) {
            Some(field) => match field.key.as_str() {
                "name" => name = field.value.to_string(),
                "amount" => amount = field.value.to_string(),
                "icon" => icon = non_empty(field.value),
                _ => {}
            },
            None if name.is_empty() => name = part.to_string(),
            None if amount.is_empty() => amount = part.to_string(),
            None => {}
        }
    }

    (!name.is_empty()).then(|| IngredientItem::new(name, amount, icon))
}

fn parse_step(lines: &[&str]) -> Step {
    let mut step = Step::default();
    let mut text = TextAccumulator::default();

    for line in lines {
        match parse_field(line) {
            Some(field) => match field.key.as_str() {
                "title" => step.title = field.value.to_string(),
                "time" => step.duration_minutes = parse_duration_minutes(field.value),
                "heat" => step.heat = HeatLevel::parse(field.value),
                "icon" => step.icon = non_empty(field.value),
                "text" => text.push_escaped(field.value),
                _ => {}
            },
            None => text.push_free_line(line),
        }
    }

    step.text = text.finish();
    step
}

fn parse_note(lines: &[&str]) -> Note {
    let mut text = TextAccumulator::default();

    for line in lines {
        match parse_field(line) {
            Some(field) if field.key == "text" => text.push_escaped(field.value),
            _ => text.push_free_line(line),
        }
    }

    Note {
        text: text.finish(),
    }
}

/// Collects the text of a step or note from `text:` fields and bare lines
#[derive(Default)]
struct TextAccumulator {
    lines: Vec<String>,
}

impl TextAccumulator {
    fn push_escaped(&mut self, value: &str) {
        self.lines.push(unescape_text(value));
    }

    /// Bare paragraph lines are kept verbatim; blank lines are dropped
    fn push_free_line(&mut self, line: &str) {
        if !line.trim().is_empty() {
            self.lines.push(line.to_string());
        }
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
