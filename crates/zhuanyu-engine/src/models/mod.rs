pub mod block;
pub mod document;
pub mod templates;

pub use block::{
    Block, BlockContent, BlockId, BlockKind, HeatLevel, Hero, IngredientId, IngredientItem,
    Ingredients, Note, Step,
};
pub use document::{DEFAULT_TITLE, Document};
