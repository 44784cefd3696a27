/// A single statement from a generated batch, tagged with whether it is true.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fact {
    pub statement: String,
    pub is_true: bool,
}

impl Fact {
    pub fn new(statement: impl Into<String>, is_true: bool) -> Self {
        Self {
            statement: statement.into(),
            is_true,
        }
    }

    pub fn is_fake(&self) -> bool {
        !self.is_true
    }
}
