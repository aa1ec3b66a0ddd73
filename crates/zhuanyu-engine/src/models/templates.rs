use super::block::{Block, BlockContent, HeatLevel, Hero, IngredientItem, Ingredients, Note, Step};
use super::document::Document;

impl Document {
    /// Scaffold for a freshly created recipe: hero, ingredients and one step
    pub fn new_recipe(title: impl Into<String>) -> Self {
        Self::with_blocks(title, vec![Block::hero(), Block::ingredients(), Block::step()])
    }

    /// The recipe written into an empty recipes directory
    pub fn sample() -> Self {
        let hero = Hero {
            image_name: "hero".to_string(),
            servings: "2".to_string(),
            total_time: "20m".to_string(),
            nutrition: "520 kcal".to_string(),
        };

        let ingredients = Ingredients {
            items: vec![
                IngredientItem::new("Noodles", "200g", Some("leaf.fill".to_string())),
                IngredientItem::new("Chili oil", "1 tbsp", Some("flame.fill".to_string())),
                IngredientItem::new("Garlic", "2 cloves", Some("drop.fill".to_string())),
            ],
        };

        let boil = Step {
            title: "Boil noodles".to_string(),
            text: "Boil noodles until al dente.".to_string(),
            icon: Some("timer".to_string()),
            duration_minutes: Some(8),
            heat: Some(HeatLevel::High),
        };

        let stir_fry = Step {
            title: "Stir-fry".to_string(),
            text: "Toss noodles with chili oil and garlic.".to_string(),
            icon: Some("flame".to_string()),
            duration_minutes: Some(3),
            heat: Some(HeatLevel::High),
        };

        let note = Note {
            text: "Finish with scallions and sesame seeds.".to_string(),
        };

        Self::with_blocks(
            "Weeknight Stir-Fry",
            vec![
                Block::new(BlockContent::Hero(hero)),
                Block::new(BlockContent::Ingredients(ingredients)),
                Block::new(BlockContent::Step(boil)),
                Block::new(BlockContent::Step(stir_fry)),
                Block::new(BlockContent::Note(note)),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockKind;

    #[test]
    fn test_new_recipe_scaffold() {
        let doc = Document::new_recipe("Dumplings");

        assert_eq!(doc.title, "Dumplings");
        assert_eq!(
            doc.kinds(),
            vec![BlockKind::Hero, BlockKind::Ingredients, BlockKind::Step]
        );
    }

    #[test]
    fn test_sample_layout() {
        let doc = Document::sample();

        assert_eq!(doc.title, "Weeknight Stir-Fry");
        assert_eq!(
            doc.kinds(),
            vec![
                BlockKind::Hero,
                BlockKind::Ingredients,
                BlockKind::Step,
                BlockKind::Step,
                BlockKind::Note,
            ]
        );
    }
}
