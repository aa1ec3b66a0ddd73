use serde::Serialize;

use super::block::{Block, BlockId, BlockKind};

/// Title used when a recipe file has no `# ` heading
pub const DEFAULT_TITLE: &str = "Untitled Recipe";

/// In-memory representation of one recipe: a title and its ordered blocks.
///
/// Block order is the reading order of the recipe. Equality compares content
/// only, so a document decoded from its own encoding equals the original even
/// though every block gets a fresh [`BlockId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}

impl Document {
    /// Create an empty document with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    pub fn with_blocks(title: impl Into<String>, blocks: Vec<Block>) -> Self {
        Self {
            title: title.into(),
            blocks,
        }
    }

    /// Append a block and return its id
    pub fn push_block(&mut self, block: Block) -> BlockId {
        let id = block.id();
        self.blocks.push(block);
        id
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|block| block.id() == id)
    }

    fn position(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    /// Remove a block, returning it if it was present
    pub fn remove_block(&mut self, id: BlockId) -> Option<Block> {
        let index = self.position(id)?;
        Some(self.blocks.remove(index))
    }

    /// Move a block to `to_index`, clamped to the last position.
    ///
    /// Returns `false` if no block has the given id.
    pub fn move_block(&mut self, id: BlockId, to_index: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        let block = self.blocks.remove(from);
        let to = to_index.min(self.blocks.len());
        self.blocks.insert(to, block);
        true
    }

    /// Number of blocks of each kind, in [`BlockKind::ALL`] order
    pub fn kind_counts(&self) -> Vec<(BlockKind, usize)> {
        BlockKind::ALL
            .into_iter()
            .map(|kind| {
                let count = self.blocks.iter().filter(|b| b.kind() == kind).count();
                (kind, count)
            })
            .collect()
    }

    /// Kinds of all blocks in document order
    pub fn kinds(&self) -> Vec<BlockKind> {
        self.blocks.iter().map(Block::kind).collect()
    }
}
