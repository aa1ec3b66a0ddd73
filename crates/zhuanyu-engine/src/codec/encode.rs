use crate::models::{BlockContent, Document, Hero, IngredientItem, Ingredients, Note, Step};

use super::fields::escape_text;

/// Encode a [`Document`] into its canonical text form.
///
/// The output is a `# title` line, a blank line, then each block as its marker
/// line, its non-empty fields in a fixed order and a trailing blank line.
pub fn encode(document: &Document) -> String {
    let mut lines = vec![format!("# {}", document.title), String::new()];

    for block in &document.blocks {
        lines.push(block.kind().marker());
        match &block.content {
            BlockContent::Hero(hero) => encode_hero(hero, &mut lines),
            BlockContent::Ingredients(ingredients) => encode_ingredients(ingredients, &mut lines),
            BlockContent::Step(step) => encode_step(step, &mut lines),
            BlockContent::Note(note) => encode_note(note, &mut lines),
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn push_field(lines: &mut Vec<String>, key: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{key}: {value}"));
    }
}

fn encode_hero(hero: &Hero, lines: &mut Vec<String>) {
    push_field(lines, "image", &hero.image_name);
    push_field(lines, "servings", &hero.servings);
    push_field(lines, "time", &hero.total_time);
    push_field(lines, "nutrition", &hero.nutrition);
}

fn encode_ingredients(ingredients: &Ingredients, lines: &mut Vec<String>) {
    lines.extend(ingredients.items.iter().filter_map(ingredient_line));
}

/// `- name=.. | amount=.. | icon=..` with empty parts left out
fn ingredient_line(item: &IngredientItem) -> Option<String> {
    let parts: Vec<String> = [
        ("name", item.name.as_str()),
        ("amount", item.amount.as_str()),
        ("icon", item.icon.as_deref().unwrap_or_default()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(key, value)| format!("{key}={value}"))
    .collect();

    (!parts.is_empty()).then(|| format!("- {}", parts.join(" | ")))
}

fn encode_step(step: &Step, lines: &mut Vec<String>) {
    push_field(lines, "title", &step.title);
    if let Some(minutes) = step.duration_minutes {
        lines.push(format!("time: {minutes}m"));
    }
    if let Some(heat) = step.heat {
        push_field(lines, "heat", heat.as_str());
    }
    push_field(lines, "icon", step.icon.as_deref().unwrap_or_default());
    push_field(lines, "text", &escape_text(&step.text));
}

fn encode_note(note: &Note, lines: &mut Vec<String>) {
    push_field(lines, "text", &escape_text(&note.text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Block, HeatLevel};
    use pretty_assertions::assert_eq;

    fn encode_one(content: BlockContent) -> String {
        encode(&Document::with_blocks("T", vec![Block::new(content)]))
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(encode(&Document::new("Soup")), "# Soup\n");
    }

    #[test]
    fn test_empty_blocks_emit_only_markers() {
        let doc = Document::with_blocks(
            "Soup",
            vec![Block::hero(), Block::ingredients(), Block::note()],
        );

        assert_eq!(
            encode(&doc),
            "# Soup\n\n[hero]\n\n[ingredients]\n\n[note]\n"
        );
    }

    #[test]
    fn test_hero_field_order() {
        let text = encode_one(BlockContent::Hero(Hero {
            image_name: "pho".to_string(),
            servings: String::new(),
            total_time: "3h".to_string(),
            nutrition: "610 kcal".to_string(),
        }));

        assert_eq!(
            text,
            "# T\n\n[hero]\nimage: pho\ntime: 3h\nnutrition: 610 kcal\n"
        );
    }

    #[test]
    fn test_ingredient_lines_skip_empty_parts() {
        let text = encode_one(BlockContent::Ingredients(Ingredients {
            items: vec![
                IngredientItem::new("Garlic", "2 cloves", Some("drop.fill".to_string())),
                IngredientItem::new("Salt", "", Some(String::new())),
                IngredientItem::new("", "1 cup", None),
                IngredientItem::new("", "", None),
            ],
        }));

        assert_eq!(
            text,
            "# T\n\n[ingredients]\n\
             - name=Garlic | amount=2 cloves | icon=drop.fill\n\
             - name=Salt\n\
             - amount=1 cup\n"
        );
    }

    #[test]
    fn test_step_fields_and_escaping() {
        let text = encode_one(BlockContent::Step(Step {
            title: "Boil".to_string(),
            text: "Boil\nuntil done".to_string(),
            icon: Some("timer".to_string()),
            duration_minutes: Some(8),
            heat: Some(HeatLevel::Medium),
        }));

        assert_eq!(
            text,
            "# T\n\n[step]\ntitle: Boil\ntime: 8m\nheat: medium\nicon: timer\ntext: Boil\\nuntil done\n"
        );
    }

    #[test]
    fn test_step_zero_minutes_is_written() {
        let text = encode_one(BlockContent::Step(Step {
            duration_minutes: Some(0),
            ..Step::default()
        }));

        assert_eq!(text, "# T\n\n[step]\ntime: 0m\n");
    }

    #[test]
    fn test_note_text_is_escaped() {
        let text = encode_one(BlockContent::Note(Note {
            text: "Line one\nLine two".to_string(),
        }));

        assert_eq!(text, "# T\n\n[note]\ntext: Line one\\nLine two\n");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let doc = Document::sample();
        assert_eq!(encode(&doc), encode(&doc.clone()));
    }
}
