use serde::Serialize;
use uuid::Uuid;

/// Stable identity of a block within an editing session.
///
/// Never persisted: the codec ignores it and decoding assigns fresh ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BlockId(Uuid);

impl BlockId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BlockId {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable identity of an ingredient row, scoped to its parent block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IngredientId(Uuid);

impl IngredientId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for IngredientId {
    fn default() -> Self {
        Self::new()
    }
}

/// The four kinds of recipe section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Hero,
    Ingredients,
    Step,
    Note,
}

impl BlockKind {
    /// All kinds in declaration order
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Hero,
        BlockKind::Ingredients,
        BlockKind::Step,
        BlockKind::Note,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::Ingredients => "ingredients",
            BlockKind::Step => "step",
            BlockKind::Note => "note",
        }
    }

    /// Human-facing name used by list and detail output
    pub fn display_name(self) -> &'static str {
        match self {
            BlockKind::Hero => "Hero",
            BlockKind::Ingredients => "Ingredients",
            BlockKind::Step => "Step",
            BlockKind::Note => "Note",
        }
    }

    /// The bracketed marker line that opens a block of this kind, e.g. `[step]`
    pub fn marker(self) -> String {
        format!("[{}]", self.as_str())
    }

    /// Recognise a marker line.
    ///
    /// Surrounding whitespace and letter case are ignored, but the brackets
    /// must enclose exactly one known keyword: `[ Step ]` is not a marker.
    pub fn from_marker_line(line: &str) -> Option<BlockKind> {
        let lowered = line.trim().to_lowercase();
        let name = lowered.strip_prefix('[')?.strip_suffix(']')?;
        BlockKind::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

/// Burner setting for a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatLevel {
    Low,
    Medium,
    High,
}

impl HeatLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            HeatLevel::Low => "low",
            HeatLevel::Medium => "medium",
            HeatLevel::High => "high",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeatLevel::Low => "Low",
            HeatLevel::Medium => "Medium",
            HeatLevel::High => "High",
        }
    }

    /// Case-insensitive lookup; anything else is `None`
    pub fn parse(value: &str) -> Option<HeatLevel> {
        match value.trim().to_lowercase().as_str() {
            "low" => Some(HeatLevel::Low),
            "medium" => Some(HeatLevel::Medium),
            "high" => Some(HeatLevel::High),
            _ => None,
        }
    }
}

/// An empty icon name means the same as no icon
fn same_icon(a: &Option<String>, b: &Option<String>) -> bool {
    fn named(icon: &Option<String>) -> Option<&str> {
        icon.as_deref().filter(|name| !name.is_empty())
    }
    named(a) == named(b)
}

/// Summary card shown at the top of a recipe
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub image_name: String,
    pub servings: String,
    pub total_time: String,
    pub nutrition: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IngredientItem {
    id: IngredientId,
    pub name: String,
    pub amount: String,
    pub icon: Option<String>,
}

impl IngredientItem {
    pub fn new(name: impl Into<String>, amount: impl Into<String>, icon: Option<String>) -> Self {
        Self {
            id: IngredientId::new(),
            name: name.into(),
            amount: amount.into(),
            icon: icon.filter(|name| !name.is_empty()),
        }
    }

    pub fn id(&self) -> IngredientId {
        self.id
    }
}

/// Ingredients compare by content; their ids are session-local.
impl PartialEq for IngredientItem {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.amount == other.amount && same_icon(&self.icon, &other.icon)
    }
}

impl Eq for IngredientItem {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ingredients {
    pub items: Vec<IngredientItem>,
}

impl Ingredients {
    /// Append an item and return its id
    pub fn push(&mut self, item: IngredientItem) -> IngredientId {
        let id = item.id();
        self.items.push(item);
        id
    }

    pub fn remove(&mut self, id: IngredientId) -> Option<IngredientItem> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Step {
    pub title: String,
    pub text: String,
    pub icon: Option<String>,
    pub duration_minutes: Option<u32>,
    pub heat: Option<HeatLevel>,
}

impl PartialEq for Step {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.text == other.text
            && same_icon(&self.icon, &other.icon)
            && self.duration_minutes == other.duration_minutes
            && self.heat == other.heat
    }
}

impl Eq for Step {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Note {
    pub text: String,
}

/// Content of a block; each variant carries only the fields its kind has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BlockContent {
    Hero(Hero),
    Ingredients(Ingredients),
    Step(Step),
    Note(Note),
}

impl BlockContent {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Hero(_) => BlockKind::Hero,
            BlockContent::Ingredients(_) => BlockKind::Ingredients,
            BlockContent::Step(_) => BlockKind::Step,
            BlockContent::Note(_) => BlockKind::Note,
        }
    }
}

/// One typed section of a recipe
#[derive(Debug, Clone, Serialize)]
pub struct Block {
    id: BlockId,
    #[serde(flatten)]
    pub content: BlockContent,
}

impl Block {
    pub fn new(content: BlockContent) -> Self {
        Self {
            id: BlockId::new(),
            content,
        }
    }

    pub fn hero() -> Self {
        Self::new(BlockContent::Hero(Hero::default()))
    }

    pub fn ingredients() -> Self {
        Self::new(BlockContent::Ingredients(Ingredients::default()))
    }

    pub fn step() -> Self {
        Self::new(BlockContent::Step(Step {
            title: "Step".to_string(),
            ..Step::default()
        }))
    }

    pub fn note() -> Self {
        Self::new(BlockContent::Note(Note::default()))
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }
}

/// Blocks compare by content; their ids are session-local.
impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.content == other.content
    }
}

impl Eq for Block {}
